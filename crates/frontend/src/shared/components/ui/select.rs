use leptos::prelude::*;

/// Native select with label, placeholder and field error
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value; empty means the placeholder is shown
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Text of the first, empty option
    #[prop(optional, into)]
    placeholder: Signal<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Message shown under the control
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let placeholder_text = move || {
        let text = placeholder.get();
        if text.is_empty() {
            "Select".to_string()
        } else {
            text
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                class:form__select--invalid=move || error.get().is_some()
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" selected=move || value.get().is_empty()>
                    {placeholder_text}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
