use crate::shared::icons::icon;
use contracts::shared::list::Pagination;
use leptos::prelude::*;

/// Pagination bar under list tables; pages are 1-indexed as the backend counts them
#[component]
pub fn PaginationControls(
    #[prop(into)]
    pagination: Signal<Pagination>,

    /// Callback with the requested page number
    on_page_change: Callback<u32>,

    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <span class="pagination-summary">
                {move || {
                    let p = pagination.get();
                    format!("Showing {} to {} of {}", p.from, p.to, p.total)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || disabled.get() || !pagination.get().has_prev()
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get();
                    if p.has_prev() {
                        on_page_change.run(p.current_page - 1);
                    }
                }
                disabled=move || disabled.get() || !pagination.get().has_prev()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let p = pagination.get();
                    format!("{} / {}", p.current_page, p.last_page.max(1))
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get();
                    if p.has_next() {
                        on_page_change.run(p.current_page + 1);
                    }
                }
                disabled=move || disabled.get() || !pagination.get().has_next()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(pagination.get().last_page.max(1))
                disabled=move || disabled.get() || !pagination.get().has_next()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
