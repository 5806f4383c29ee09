use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Strip of open tabs above the content
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="tab-bar">
            <For
                each=move || ctx.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab: TabData| view! { <TabHandle tab=tab ctx=ctx /> }
            />
        </div>
    }
}

#[component]
fn TabHandle(tab: TabData, ctx: AppGlobalContext) -> impl IntoView {
    let key_for_active = tab.key.clone();
    let is_active = Memo::new(move |_| ctx.active.get().as_deref() == Some(key_for_active.as_str()));

    let key_for_click = tab.key.clone();
    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_tab(&key_for_close);
    };

    view! {
        <div class="tab" class:active=is_active on:click=move |_| ctx.activate_tab(&key_for_click)>
            <span>{tab.title}</span>
            <button class="tab-close" title="Close" on:click=on_close>{icon("x")}</button>
        </div>
    }
}
