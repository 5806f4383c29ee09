use crate::shared::api_utils::image_url;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_state::{self, create_state};
use crate::shared::page_frame::PageFrame;
use contracts::domain::a013_order::Order;
use leptos::prelude::*;
use thaw::*;

/// Placed orders, read-only
#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let state = create_state::<Order>();

    list_state::load_if_needed(state);

    let on_search = Callback::new(move |term| list_state::search(state, term));
    let on_page_change = Callback::new(move |page| list_state::go_to_page(state, page));

    view! {
        <PageFrame page_id="a013_order--list" category="list">
            <PageHeader
                title="Orders"
                count=Signal::derive(move || state.with(|s| s.is_loaded.then_some(s.page.pagination.total)))
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| list_state::load_page(state)
                    disabled=Signal::derive(move || state.with(|s| s.loading))
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="list-toolbar">
                    <SearchBox on_search=on_search placeholder="Search orders..." />
                    <PaginationControls
                        pagination=Signal::derive(move || state.with(|s| s.page.pagination))
                        on_page_change=on_page_change
                        disabled=Signal::derive(move || state.with(|s| s.loading))
                    />
                </div>

                {move || state.with(|s| s.error.clone()).map(|e| view! {
                    <div class="alert alert--error">{e}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=80.0>"Order"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Date"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=180.0>"Customer"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=140.0>"Delivery"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>"Items"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Total"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Payment"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || state.with(|s| s.is_loaded && s.page.items.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan="7">
                                        <TableCellLayout>"No orders found"</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            </Show>
                            {move || {
                                state.with(|s| s.page.items.clone()).into_iter().map(|item| {
                                    let variant = if item.is_paid() { "success" } else { "warning" };
                                    let customer = item.customer.name.clone();
                                    let date = item.date.clone();
                                    let avatar = item.customer.avatar.clone();
                                    let delivery = item.delivery.clone();
                                    let total_label = item.total_label();
                                    let payment_status = item.payment_status.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{format!("#{}", item.id)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{date.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {avatar.clone().map(|path| view! {
                                                        <img class="table__avatar" src=image_url(&path) alt=customer.clone() />
                                                    })}
                                                    {customer.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{delivery.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{item.items}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{total_label.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=variant.to_string()>{payment_status.clone()}</Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
