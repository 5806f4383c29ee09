//! Category Details - ViewModel
//!
//! Category types are static, so the form is ready without a meta request.

use super::model;
use crate::shared::components::image_picker::PickedImage;
use crate::shared::form_submit::{show_field_errors, show_save_error};
use crate::shared::list_state::Saved;
use contracts::domain::a001_category::form::{self, IMAGE_RULES};
use contracts::domain::a001_category::{Category, CategoryForm};
use contracts::shared::attachment::AttachmentError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct CategoryDetailsVm {
    pub form: RwSignal<CategoryForm>,
    pub upload: StoredValue<Option<File>, LocalStorage>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
}

impl CategoryDetailsVm {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(form::new_form()),
            upload: StoredValue::new_local(None),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.is_edit_mode()))
    }

    pub fn edit(&self, item: &Category) {
        self.upload.set_value(None);
        self.error.set(None);
        self.form.update(|f| form::begin_edit(f, item));
    }

    pub fn cancel(&self) {
        self.upload.set_value(None);
        self.error.set(None);
        self.form.update(|f| f.reset());
    }

    pub fn select_type(&self, raw: String) {
        self.form.update(|f| {
            if let Err(e) = f.resolver.select_input(form::CATEGORY_TYPE, &raw) {
                log::warn!("category form: {}", e);
            }
        });
    }

    pub fn set_name(&self, value: String) {
        self.form.update(|f| f.fields.name = value);
    }

    pub fn pick_image(&self, (draft, file): PickedImage) {
        let mut accepted = false;
        self.form.update(|f| accepted = f.set_attachment(draft, &IMAGE_RULES).is_ok());
        self.upload.set_value(accepted.then_some(file));
    }

    pub fn reject_image(&self, err: AttachmentError) {
        self.upload.set_value(None);
        self.form.update(|f| f.reject_attachment(&err));
    }

    pub fn save_command(&self, on_saved: Callback<Saved<Category>>) {
        let fields = match self.form.with_untracked(form::form_fields) {
            Ok(fields) => fields,
            Err(errors) => {
                show_field_errors(self.form, errors);
                return;
            }
        };
        let editing_id = self.form.with_untracked(|f| f.editing_id);
        let image = self.upload.get_value();
        let this = *self;

        self.is_saving.set(true);
        self.error.set(None);
        spawn_local(async move {
            let result = model::save_category(editing_id, fields, image).await;
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
