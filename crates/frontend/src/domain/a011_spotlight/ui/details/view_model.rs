//! Spotlight Details - ViewModel

use super::model;
use crate::shared::components::image_picker::PickedImage;
use crate::shared::form_submit::{show_field_errors, show_save_error};
use crate::shared::list_state::Saved;
use contracts::domain::a011_spotlight::form::{self, IMAGE_RULES};
use contracts::domain::a011_spotlight::{Spotlight, SpotlightForm};
use contracts::shared::attachment::AttachmentError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct SpotlightDetailsVm {
    pub form: RwSignal<SpotlightForm>,
    pub background: StoredValue<Option<File>, LocalStorage>,
    pub logo: StoredValue<Option<File>, LocalStorage>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
    pub is_loaded: RwSignal<bool>,
}

impl SpotlightDetailsVm {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(form::new_form()),
            background: StoredValue::new_local(None),
            logo: StoredValue::new_local(None),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
            is_loaded: RwSignal::new(false),
        }
    }

    pub fn load_if_needed(&self) {
        if self.is_loaded.get_untracked() {
            return;
        }
        let this = *self;
        spawn_local(async move {
            match model::fetch_meta().await {
                Ok(meta) => {
                    this.form.update(|f| {
                        if let Err(e) = form::load_vendors(f, &meta.vendors) {
                            log::error!("spotlight form: {}", e);
                        }
                    });
                    this.is_loaded.set(true);
                }
                Err(e) => this.error.set(Some(format!("Failed to load vendors: {}", e))),
            }
        });
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.is_edit_mode()))
    }

    fn clear_files(&self) {
        self.background.set_value(None);
        self.logo.set_value(None);
    }

    pub fn edit(&self, item: &Spotlight) {
        self.clear_files();
        self.error.set(None);
        self.form.update(|f| form::begin_edit(f, item));
    }

    pub fn cancel(&self) {
        self.clear_files();
        self.error.set(None);
        self.form.update(|f| f.reset());
    }

    pub fn select_vendor(&self, raw: String) {
        self.form.update(|f| {
            if let Err(e) = form::select_vendor(f, &raw) {
                log::warn!("spotlight form: {}", e);
            }
        });
    }

    pub fn set_title(&self, value: String) {
        self.form.update(|f| f.fields.title = value);
    }

    pub fn set_price(&self, value: String) {
        self.form.update(|f| f.fields.price = value);
    }

    pub fn pick_background(&self, (draft, file): PickedImage) {
        let mut accepted = false;
        self.form.update(|f| accepted = f.set_attachment(draft, &IMAGE_RULES).is_ok());
        self.background.set_value(accepted.then_some(file));
    }

    pub fn reject_background(&self, err: AttachmentError) {
        self.background.set_value(None);
        self.form.update(|f| f.reject_attachment(&err));
    }

    pub fn pick_logo(&self, (draft, file): PickedImage) {
        let mut accepted = false;
        self.form.update(|f| accepted = form::set_logo(f, draft).is_ok());
        self.logo.set_value(accepted.then_some(file));
    }

    pub fn reject_logo(&self, err: AttachmentError) {
        self.logo.set_value(None);
        self.form.update(|f| form::reject_logo(f, &err));
    }

    pub fn save_command(&self, on_saved: Callback<Saved<Spotlight>>) {
        let fields = match self.form.with_untracked(form::form_fields) {
            Ok(fields) => fields,
            Err(errors) => {
                show_field_errors(self.form, errors);
                return;
            }
        };
        let editing_id = self.form.with_untracked(|f| f.editing_id);
        let background = self.background.get_value();
        let logo = self.logo.get_value();
        let this = *self;

        self.is_saving.set(true);
        self.error.set(None);
        spawn_local(async move {
            let result = model::save_spotlight(editing_id, fields, background, logo).await;
            this.is_saving.set(false);
            match result {
                Ok(record) => {
                    this.cancel();
                    on_saved.run(Saved { record, editing_id });
                }
                Err(e) => show_save_error(this.form, this.error, e),
            }
        });
    }
}
