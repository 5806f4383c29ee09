//! Current Deal Details - ViewModel
//!
//! The product list is kept beside the form: the table resolves
//! product names from it.

use super::model;
use crate::shared::form_submit::{show_field_errors, show_save_error};
use crate::shared::list_state::Saved;
use contracts::domain::a006_product::Product;
use contracts::domain::a008_current_deal::form;
use contracts::domain::a008_current_deal::{CurrentDeal, CurrentDealForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct CurrentDealDetailsVm {
    pub form: RwSignal<CurrentDealForm>,
    pub products: RwSignal<Vec<Product>>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
    pub is_loaded: RwSignal<bool>,
}

impl CurrentDealDetailsVm {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(form::new_form()),
            products: RwSignal::new(Vec::new()),
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
                        if let Err(e) = form::load_meta(f, &meta) {
                            log::error!("current deal form: {}", e);
                        }
                    });
                    this.products.set(meta.products);
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

    pub fn edit(&self, item: &CurrentDeal) {
        self.error.set(None);
        self.form.update(|f| {
            form::begin_edit(f, item);
        });
    }

    pub fn cancel(&self) {
        self.error.set(None);
        self.form.update(|f| f.reset());
    }

    pub fn select(&self, tier: &'static str, raw: String) {
        self.form.update(|f| {
            if let Err(e) = f.resolver.select_input(tier, &raw) {
                log::warn!("current deal form: {}", e);
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<Saved<CurrentDeal>>) {
        let dto = match self.form.with_untracked(form::dto_from_draft) {
            Ok(dto) => dto,
            Err(errors) => {
                show_field_errors(self.form, errors);
                return;
            }
        };
        let editing_id = self.form.with_untracked(|f| f.editing_id);
        let this = *self;

        self.is_saving.set(true);
        self.error.set(None);
        spawn_local(async move {
            let result = model::save_deal(editing_id, &dto).await;
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
