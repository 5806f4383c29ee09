use crate::shared::api_utils::image_url;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_state::{self, create_state};
use crate::shared::page_frame::PageFrame;
use contracts::domain::a012_customer::Customer;
use leptos::prelude::*;
use thaw::*;

/// Registered customers, read-only
#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let state = create_state::<Customer>();

    list_state::load_if_needed(state);

    let on_search = Callback::new(move |term| list_state::search(state, term));
    let on_page_change = Callback::new(move |page| list_state::go_to_page(state, page));

    view! {
        <PageFrame page_id="a012_customer--list" category="list">
            <PageHeader
                title="Customers"
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
                    <SearchBox on_search=on_search placeholder="Search customers..." />
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
                                <TableHeaderCell min_width=50.0>"#"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>"Image"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=180.0>"Username"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=140.0>"Mobile"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=200.0>"Email"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || state.with(|s| s.is_loaded && s.page.items.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan="6">
                                        <TableCellLayout>"No customers found"</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            </Show>
                            {move || {
                                let (items, pagination) = state.with(|s| (s.page.items.clone(), s.page.pagination));
                                items.into_iter().enumerate().map(|(index, item)| {
                                    let avatar = match item.img_path.clone() {
                                        Some(path) => view! {
                                            <img class="table__avatar" src=image_url(&path) alt=item.username.clone() />
                                        }
                                        .into_any(),
                                        None => view! { <span class="table__initials">{item.initials()}</span> }.into_any(),
                                    };
                                    let (status, variant) = if item.is_banned {
                                        ("Banned", "error")
                                    } else {
                                        ("Active", "success")
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{pagination.row_number(index)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{avatar}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{item.username.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{item.mobile.clone().unwrap_or_default()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{item.email.clone().unwrap_or_default()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=variant.to_string()>{status}</Badge>
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
