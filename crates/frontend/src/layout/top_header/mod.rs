//! TopHeader: sidebar toggle, application title and the signed-in marker

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::session::get_access_token;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let is_sidebar_visible = move || ctx.left_open.get();
    let has_token = get_access_token().is_some();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Fashion Marketplace Admin"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{if has_token { "Admin" } else { "Guest" }}</span>
                </div>
            </div>
        </div>
    }
}
