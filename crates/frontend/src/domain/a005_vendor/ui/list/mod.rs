//! Vendor console: read-only list with a filter bar.
//!
//! Filters are sent as query parameters beside the search term; the date
//! range is checked before the request goes out.

use crate::shared::api_utils::image_url;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::components::ui::{Badge, Input, Select};
use crate::shared::icons::icon;
use crate::shared::list_state::{self, create_state};
use crate::shared::page_frame::PageFrame;
use contracts::domain::a005_vendor::{Vendor, VendorFilter};
use contracts::enums::{ApprovalStatus, VendorType};
use leptos::prelude::*;
use std::collections::BTreeMap;
use thaw::*;

fn approval_variant(status: ApprovalStatus) -> &'static str {
    match status {
        ApprovalStatus::Approved => "success",
        ApprovalStatus::Rejected => "error",
        ApprovalStatus::Pending => "warning",
    }
}

fn avatar(vendor: &Vendor) -> AnyView {
    match vendor.img_path.clone() {
        Some(path) => view! {
            <img class="table__avatar" src=image_url(&path) alt=vendor.display_name().to_string() />
        }
        .into_any(),
        None => view! { <span class="table__initials">{vendor.initials()}</span> }.into_any(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn VendorList() -> impl IntoView {
    let state = create_state::<Vendor>();
    let filter = RwSignal::new(VendorFilter::default());
    let filter_error = RwSignal::new(None::<String>);

    list_state::load_if_needed(state);

    let on_search = Callback::new(move |term| list_state::search(state, term));
    let on_page_change = Callback::new(move |page| list_state::go_to_page(state, page));

    let apply_filters = move |_| {
        let current = filter.get_untracked();
        if let Some(e) = current.date_range_error() {
            filter_error.set(Some(e.to_string()));
            return;
        }
        filter_error.set(None);
        list_state::filter(state, current.to_params());
    };
    let reset_filters = move |_| {
        filter.set(VendorFilter::default());
        filter_error.set(None);
        list_state::filter(state, BTreeMap::new());
    };

    let type_options: Vec<(String, String)> = VendorType::all()
        .into_iter()
        .map(|t| (t.code().to_string(), t.display_name().to_string()))
        .collect();
    let status_options: Vec<(String, String)> = ApprovalStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect();
    let account_options = vec![
        ("0".to_string(), "Active".to_string()),
        ("1".to_string(), "Banned".to_string()),
    ];

    view! {
        <PageFrame page_id="a005_vendor--list" category="list">
            <PageHeader
                title="Vendors"
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
                <div class="filter-bar">
                    <Select
                        label="Vendor Type"
                        id="vendor-filter-type"
                        placeholder="All".to_string()
                        options=type_options
                        value=Signal::derive(move || filter.with(|f| f.vendor_type.clone()))
                        on_change=Callback::new(move |v| filter.update(|f| f.vendor_type = v))
                    />
                    <Select
                        label="Status"
                        id="vendor-filter-status"
                        placeholder="All".to_string()
                        options=status_options
                        value=Signal::derive(move || filter.with(|f| f.approval_status.clone()))
                        on_change=Callback::new(move |v| filter.update(|f| f.approval_status = v))
                    />
                    <Select
                        label="Account"
                        id="vendor-filter-account"
                        placeholder="All".to_string()
                        options=account_options
                        value=Signal::derive(move || filter.with(|f| f.is_banned.clone()))
                        on_change=Callback::new(move |v| filter.update(|f| f.is_banned = v))
                    />
                    <Input
                        label="From"
                        id="vendor-filter-from"
                        input_type="date"
                        value=Signal::derive(move || filter.with(|f| f.from_date.clone()))
                        on_input=Callback::new(move |v| filter.update(|f| f.from_date = v))
                    />
                    <Input
                        label="To"
                        id="vendor-filter-to"
                        input_type="date"
                        value=Signal::derive(move || filter.with(|f| f.to_date.clone()))
                        error=Signal::derive(move || filter_error.get())
                        on_input=Callback::new(move |v| filter.update(|f| f.to_date = v))
                    />
                    <div class="filter-bar__actions">
                        <Button appearance=ButtonAppearance::Primary on_click=apply_filters>
                            {icon("search")}
                            " Apply"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=Signal::derive(move || filter.with(|f| f.is_empty()))
                            on_click=reset_filters
                        >
                            {icon("x")}
                            " Reset"
                        </Button>
                    </div>
                </div>

                <div class="list-toolbar">
                    <SearchBox on_search=on_search placeholder="Search vendors..." />
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
                                <TableHeaderCell min_width=60.0>"ID"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>"Image"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=180.0>"Shop Name"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=140.0>"Detail"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=200.0>"Contact"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Account"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || state.with(|s| s.is_loaded && s.page.items.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan="7">
                                        <TableCellLayout>"No vendors found"</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            </Show>
                            {move || {
                                state.with(|s| s.page.items.clone()).into_iter().map(|item| {
                                    let status = item.approval();
                                    let kind = item.kind().map(|k| k.display_name()).unwrap_or("N/A");
                                    let (account, account_variant) = if item.is_banned {
                                        ("Banned", "error")
                                    } else {
                                        ("Active", "success")
                                    };
                                    let shop_name = item.shop_name.clone().unwrap_or_default();
                                    let username = item.username.clone().unwrap_or_default();
                                    let mobile_no = item.mobile_no.clone().unwrap_or_default();
                                    let email = item.email.clone().unwrap_or_default();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{item.id}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{avatar(&item)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{shop_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="table__stack">
                                                        <span>{username.clone()}</span>
                                                        <span class="table__muted">{kind}</span>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="table__stack">
                                                        <span>{mobile_no.clone()}</span>
                                                        <span class="table__muted">{email.clone()}</span>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=approval_variant(status).to_string()>
                                                        {status.display_name()}
                                                    </Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge variant=account_variant.to_string()>{account}</Badge>
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
