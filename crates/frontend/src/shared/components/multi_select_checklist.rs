use super::ui::Checkbox;
use leptos::prelude::*;

/// Checklist for a multi-select tier.
///
/// Shows `empty_text` while the tier has no candidates (its parent is unset
/// or has no children).
#[component]
pub fn MultiSelectChecklist(
    #[prop(into)]
    label: String,
    /// Candidates as `(id, label)` pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(into)]
    selected: Signal<Vec<String>>,
    /// Receives the id of the toggled option
    on_toggle: Callback<String>,
    #[prop(into)]
    empty_text: Signal<String>,
    /// Prefix for checkbox element ids
    id_prefix: &'static str,
) -> impl IntoView {
    let count = move || selected.with(Vec::len);

    view! {
        <div class="form__group checklist">
            <div class="form__label">
                {label}
                <span class="checklist__count">{move || format!(" ({} selected)", count())}</span>
            </div>
            <Show
                when=move || options.with(|o| !o.is_empty())
                fallback=move || view! { <div class="checklist__empty">{move || empty_text.get()}</div> }
            >
                <div class="checklist__items">
                    <For
                        each=move || options.get()
                        key=|(id, _)| id.clone()
                        children=move |(id, label)| {
                            let id_for_check = id.clone();
                            let id_for_toggle = id.clone();
                            view! {
                                <Checkbox
                                    id=format!("{}-{}", id_prefix, id)
                                    label=label
                                    checked=Signal::derive(move || selected.with(|s| s.contains(&id_for_check)))
                                    on_change=Callback::new(move |_checked: bool| on_toggle.run(id_for_toggle.clone()))
                                />
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
