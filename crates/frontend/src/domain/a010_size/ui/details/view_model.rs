//! Size Details - ViewModel

use super::model;
use crate::shared::list_state::Saved;
use contracts::domain::a010_size::form::{dto_from_name, is_duplicate};
use contracts::domain::a010_size::Size;
use contracts::shared::list::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct SizeDetailsVm {
    pub name: RwSignal<String>,
    pub editing_id: RwSignal<Option<i64>>,
    pub errors: RwSignal<ValidationErrors>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
}

impl SizeDetailsVm {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            editing_id: RwSignal::new(None),
            errors: RwSignal::new(ValidationErrors::new()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let editing_id = self.editing_id;
        Signal::derive(move || editing_id.get().is_some())
    }

    pub fn name_error(&self) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.first("name").map(str::to_string)))
    }

    pub fn edit(&self, item: &Size) {
        self.error.set(None);
        self.errors.set(ValidationErrors::new());
        self.editing_id.set(Some(item.id));
        self.name.set(item.name.clone());
    }

    pub fn cancel(&self) {
        self.error.set(None);
        self.errors.set(ValidationErrors::new());
        self.editing_id.set(None);
        self.name.set(String::new());
    }

    /// `loaded` is the visible page, used to catch duplicates before the round trip
    pub fn save_command(&self, loaded: &[Size], on_saved: Callback<Saved<Size>>) {
        let name = self.name.get_untracked();
        let editing_id = self.editing_id.get_untracked();
        let dto = match dto_from_name(&name) {
            Ok(dto) => dto,
            Err(errors) => {
                self.errors.set(errors);
                return;
            }
        };
        if is_duplicate(&dto.name, loaded, editing_id) {
            let mut errors = ValidationErrors::new();
            errors.insert("name", "The name has already been taken.");
            self.errors.set(errors);
            return;
        }
        let this = *self;

        self.is_saving.set(true);
        self.error.set(None);
        spawn_local(async move {
            let result = model::save_size(editing_id, dto).await;
            this.is_saving.set(false);
            match result {
                Ok(record) => {
                    this.cancel();
                    on_saved.run(Saved { record, editing_id });
                }
                Err(e) => {
                    log::warn!("size save failed: {}", e);
                    if let Some(errors) = e.field_errors() {
                        this.errors.set(errors.clone());
                    }
                    this.error.set(Some(e.to_string()));
                }
            }
        });
    }
}
