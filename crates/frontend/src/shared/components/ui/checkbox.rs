use leptos::prelude::*;

/// Checkbox with a clickable label
#[component]
pub fn Checkbox(
    #[prop(into)]
    label: Signal<String>,
    #[prop(into)]
    checked: Signal<bool>,
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// ID for the checkbox element, links the label
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let label_for = id.clone();

    view! {
        <div class="form__checkbox-wrapper">
            <input
                id=id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=label_for>
                {label}
            </label>
        </div>
    }
}
