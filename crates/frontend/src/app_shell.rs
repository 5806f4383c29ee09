//! Application Shell: sidebar plus the tab area
//!
//! The access token is issued by the storefront login and only read here.

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use leptos::prelude::*;

/// Initializes the `?active=` sync once and renders one TabPage per open tab
#[component]
pub fn AppShell() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }
                .into_any()
            }
        />
    }
}
