//! Measurement Mapping Details - ViewModel
//!
//! Gender filters both the category dropdown and the measurement checklist;
//! the category filters the subcategory checklist.

use super::model;
use crate::shared::form_submit::{show_field_errors, show_save_error};
use crate::shared::list_state::Saved;
use contracts::domain::a004_measurement_mapping::form::{self, MappingFormError};
use contracts::domain::a004_measurement_mapping::{MappingForm, MeasurementMapping};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct MappingDetailsVm {
    pub form: RwSignal<MappingForm>,
    pub error: RwSignal<Option<String>>,
    /// Shown when the checklists are left empty
    pub warning: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
    pub is_loading_sources: RwSignal<bool>,
    pub is_loaded: RwSignal<bool>,
}

impl MappingDetailsVm {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(form::new_form()),
            error: RwSignal::new(None),
            warning: RwSignal::new(None),
            is_saving: RwSignal::new(false),
            is_loading_sources: RwSignal::new(false),
            is_loaded: RwSignal::new(false),
        }
    }

    pub fn load_if_needed(&self) {
        if self.is_loaded.get_untracked() || self.is_loading_sources.get_untracked() {
            return;
        }
        let this = *self;
        this.is_loading_sources.set(true);
        spawn_local(async move {
            let result = model::fetch_sources().await;
            this.is_loading_sources.set(false);
            match result {
                Ok(sources) => {
                    this.form.update(|f| {
                        if let Err(e) =
                            form::load_sources(f, &sources.categories, &sources.subcategories, &sources.measurements)
                        {
                            log::error!("mapping form: {}", e);
                        }
                    });
                    this.is_loaded.set(true);
                }
                Err(e) => this.error.set(Some(format!("Failed to load form data: {}", e))),
            }
        });
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.is_edit_mode()))
    }

    pub fn edit(&self, item: &MeasurementMapping) {
        self.error.set(None);
        self.warning.set(None);
        let mut report = None;
        self.form.update(|f| report = Some(form::begin_edit(f, item)));
        if let Some(report) = report.filter(|r| !r.is_complete()) {
            log::warn!("mapping {}: selection restored partially: {:?}", item.id, report);
        }
    }

    pub fn cancel(&self) {
        self.error.set(None);
        self.warning.set(None);
        self.form.update(|f| f.reset());
    }

    pub fn select(&self, tier: &'static str, raw: String) {
        self.warning.set(None);
        self.form.update(|f| {
            if let Err(e) = f.resolver.select_input(tier, &raw) {
                log::warn!("mapping form: {}", e);
            }
        });
    }

    pub fn toggle(&self, tier: &'static str, id: String) {
        self.warning.set(None);
        self.form.update(|f| {
            if let Err(e) = f.resolver.toggle_multi_select(tier, id.as_str()) {
                log::warn!("mapping form: {}", e);
            }
        });
    }

    pub fn set_name(&self, value: String) {
        self.form.update(|f| f.fields.name = value);
    }

    pub fn save_command(&self, on_saved: Callback<Saved<MeasurementMapping>>) {
        let dto = match self.form.with_untracked(form::dto_from_draft) {
            Ok(dto) => dto,
            Err(MappingFormError::Fields(errors)) => {
                show_field_errors(self.form, errors);
                return;
            }
            Err(e @ MappingFormError::EmptySelection) => {
                self.warning.set(Some(e.to_string()));
                return;
            }
        };
        let editing_id = self.form.with_untracked(|f| f.editing_id);
        let this = *self;

        self.is_saving.set(true);
        self.error.set(None);
        spawn_local(async move {
            let result = model::save_mapping(editing_id, &dto).await;
            this.is_saving.set(false);
            match result {
                Ok(()) => {
                    this.cancel();
                    on_saved.run(Saved {
                        record: None,
                        editing_id,
                    });
                }
                Err(e) => show_save_error(this.form, this.error, e),
            }
        });
    }
}
