//! Controls bound to one tier of a form's dependent selection.
//!
//! The form lives in a single `RwSignal<FormDraft<F>>`; the helpers below
//! derive the candidate list, the current value and the field error of a tier
//! from it, so every screen renders its dropdowns the same way.

use super::ui::Select;
use contracts::shared::form_draft::FormDraft;
use leptos::prelude::*;

/// Candidates of a tier as `(id, label)` pairs
pub fn tier_options<F>(form: RwSignal<FormDraft<F>>, tier: &'static str) -> Signal<Vec<(String, String)>>
where
    F: Send + Sync + 'static,
{
    Signal::derive(move || {
        form.with(|f| {
            f.resolver
                .get_options(tier)
                .into_iter()
                .map(|o| (o.id.to_string(), o.label.clone()))
                .collect()
        })
    })
}

/// Selected id of a single tier, empty when unset
pub fn tier_value<F>(form: RwSignal<FormDraft<F>>, tier: &'static str) -> Signal<String>
where
    F: Send + Sync + 'static,
{
    Signal::derive(move || {
        form.with(|f| {
            f.resolver
                .selected(tier)
                .map(ToString::to_string)
                .unwrap_or_default()
        })
    })
}

/// Selected ids of a multi tier
pub fn tier_selected_ids<F>(form: RwSignal<FormDraft<F>>, tier: &'static str) -> Signal<Vec<String>>
where
    F: Send + Sync + 'static,
{
    Signal::derive(move || {
        form.with(|f| {
            f.resolver
                .selected_ids(tier)
                .iter()
                .map(ToString::to_string)
                .collect()
        })
    })
}

/// First backend or client-side message for a field
pub fn field_error<F>(form: RwSignal<FormDraft<F>>, field: &'static str) -> Signal<Option<String>>
where
    F: Send + Sync + 'static,
{
    Signal::derive(move || form.with(|f| f.field_error(field).map(str::to_string)))
}

/// Dropdown of one tier; locked with a "no options" placeholder while it has no candidates
#[component]
pub fn DependentSelect(
    #[prop(into)]
    label: String,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let locked = Signal::derive(move || options.with(Vec::is_empty));
    let prompt = format!("Select {}", label.to_lowercase());
    let placeholder = Signal::derive(move || {
        if locked.get() {
            "No options".to_string()
        } else {
            prompt.clone()
        }
    });

    view! {
        <Select
            label=label
            id=id
            value=value
            options=options
            placeholder=placeholder
            disabled=locked
            error=error
            on_change=on_change
        />
    }
}
