use crate::domain::a004_measurement_mapping::ui::details::{MappingDetails, MappingDetailsVm};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::components::ui::Badge as UiBadge;
use crate::shared::icons::icon;
use crate::shared::list_state::{self, create_state};
use crate::shared::page_frame::PageFrame;
use contracts::domain::a004_measurement_mapping::MeasurementMapping;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn MeasurementMappingList() -> impl IntoView {
    let state = create_state::<MeasurementMapping>();
    let vm = MappingDetailsVm::new();

    list_state::load_if_needed(state);

    let on_saved = Callback::new(move |saved| list_state::apply_saved(state, saved));
    let on_search = Callback::new(move |term| list_state::search(state, term));
    let on_page_change = Callback::new(move |page| list_state::go_to_page(state, page));

    let handle_delete = move |id: i64| list_state::delete_row(state, id, "Delete this mapping?");

    view! {
        <PageFrame page_id="a004_measurement_mapping--list" category="list">
            <PageHeader
                title="Measurement Mapping"
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
                <MappingDetails vm=vm on_saved=on_saved />

                <div class="list-toolbar">
                    <SearchBox on_search=on_search placeholder="Search mappings..." />
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
                                <TableHeaderCell resizable=true min_width=220.0>"Mapping Name"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=160.0>"Category"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Gender"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Counts"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || state.with(|s| s.is_loaded && s.page.items.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan="6">
                                        <TableCellLayout>"No mappings found"</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            </Show>
                            {move || {
                                let (items, pagination) = state.with(|s| (s.page.items.clone(), s.page.pagination));
                                items.into_iter().enumerate().map(|(index, item)| {
                                    let id = item.id;
                                    let item_for_edit = item.clone();
                                    let name = item.name.clone();
                                    let category_name = item.category_name().to_string();
                                    let gender_label = item.gender_label();
                                    let subcategory_count = item.subcategories.len();
                                    let measurement_count = item.measurements.len();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{pagination.row_number(index)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{category_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <UiBadge variant="primary".to_string()>{gender_label}</UiBadge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <UiBadge variant="neutral".to_string()>
                                                        {format!("{} Subs", subcategory_count)}
                                                    </UiBadge>
                                                    " "
                                                    <UiBadge variant="success".to_string()>
                                                        {format!("{} Measurements", measurement_count)}
                                                    </UiBadge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        disabled=Signal::derive(move || !vm.is_loaded.get())
                                                        on_click=move |_| vm.edit(&item_for_edit)
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| handle_delete(id)
                                                    >
                                                        {icon("delete")}
                                                    </Button>
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
