use super::ui::Badge;
use leptos::prelude::*;

/// Header of a tab page: title, optional record counter and action buttons
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Shown as a badge next to the title
    #[prop(optional, into)]
    count: Signal<Option<u32>>,

    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {move || count.get().map(|n| view! {
                    <Badge variant="primary".to_string()>{n.to_string()}</Badge>
                })}
            </div>
            <div class="page__header-right">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
