use crate::shared::config::config;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Search field that reports the term after the user stops typing.
///
/// Every keystroke bumps a generation counter; a timer only fires
/// `on_search` if no newer keystroke arrived in the meantime.
#[component]
pub fn SearchBox(
    on_search: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let term = RwSignal::new(String::new());
    let generation = StoredValue::new(0u64);
    let delay = config().lists.search_debounce_ms;

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        term.set(value.clone());
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if generation.get_value() == current {
                on_search.run(value.trim().to_string());
            }
        });
    };

    view! {
        <div class="search-box">
            <span class="search-box__icon">{icon("search")}</span>
            <input
                type="search"
                class="form__input search-box__input"
                placeholder=move || placeholder.get().unwrap_or_else(|| "Search...".to_string())
                prop:value=move || term.get()
                on:input=on_input
            />
        </div>
    }
}
