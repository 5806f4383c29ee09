//! Outcome handling shared by the entity forms.

use super::api_client::ApiError;
use contracts::shared::form_draft::FormDraft;
use contracts::shared::list::ValidationErrors;
use leptos::prelude::*;

/// Client-side check failed: show the messages under the fields
pub fn show_field_errors<F>(form: RwSignal<FormDraft<F>>, errors: ValidationErrors)
where
    F: Send + Sync + 'static,
{
    form.update(|f| f.set_errors(errors));
}

/// Failed save: 422 messages go under the fields, anything else into the page banner
pub fn show_save_error<F>(form: RwSignal<FormDraft<F>>, banner: RwSignal<Option<String>>, err: ApiError)
where
    F: Send + Sync + 'static,
{
    log::warn!("save failed: {}", err);
    if let Some(errors) = err.field_errors() {
        let errors = errors.clone();
        form.update(|f| f.set_errors(errors));
    }
    banner.set(Some(err.to_string()));
}
