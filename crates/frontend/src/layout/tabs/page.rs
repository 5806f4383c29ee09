//! TabPage: renders the content of one tab and hides it while inactive

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Content is created once per open tab; switching tabs only toggles visibility
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    let is_active = move || {
        tabs_store
            .active
            .with(|active| active.as_deref() == Some(tab_key_for_active_check.as_str()))
    };

    log::debug!("TabPage created: '{}'", tab_key);
    let tab_key_for_cleanup = tab_key.clone();
    on_cleanup(move || {
        log::debug!("TabPage destroyed: '{}'", tab_key_for_cleanup);
    });

    let content = render_tab_content(&tab_key, tabs_store);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
