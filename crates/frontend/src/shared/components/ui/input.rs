use leptos::prelude::*;

/// Input component with label and field error
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", "search"...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Step for numeric inputs
    #[prop(optional, into)]
    step: MaybeProp<String>,
    /// Read-only inputs show values filled by other controls
    #[prop(optional)]
    readonly: bool,
    /// Message shown under the control
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_step = move || step.get();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                class:form__input--invalid=move || error.get().is_some()
                type=input_t
                step=input_step
                prop:value=move || value.get()
                placeholder=input_placeholder
                readonly=readonly
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
