pub mod sidebar;

pub use sidebar::Sidebar;

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Left zone of the shell; collapsed by the header toggle
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <aside data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
            {children()}
        </aside>
    }
}
