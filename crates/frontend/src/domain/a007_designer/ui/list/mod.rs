use crate::domain::a007_designer::ui::details::{DesignerDetails, DesignerDetailsVm};
use crate::shared::api_utils::image_url;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::icons::icon;
use crate::shared::list_state::{self, create_state};
use crate::shared::page_frame::PageFrame;
use contracts::domain::a007_designer::Designer;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn DesignerList() -> impl IntoView {
    let state = create_state::<Designer>();
    let vm = DesignerDetailsVm::new();

    list_state::load_if_needed(state);

    let on_saved = Callback::new(move |saved| list_state::apply_saved(state, saved));
    let on_search = Callback::new(move |term| list_state::search(state, term));
    let on_page_change = Callback::new(move |page| list_state::go_to_page(state, page));

    let handle_delete = move |id: i64| list_state::delete_row(state, id, "Delete this designer?");

    view! {
        <PageFrame page_id="a007_designer--list" category="list">
            <PageHeader
                title="Top Designers"
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
                <DesignerDetails vm=vm on_saved=on_saved />

                <div class="list-toolbar">
                    <SearchBox on_search=on_search placeholder="Search designers..." />
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
                                <TableHeaderCell min_width=80.0>"Image"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=180.0>"Designer Name"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=200.0>"Title"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Rating"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || state.with(|s| s.is_loaded && s.page.items.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan="6">
                                        <TableCellLayout>"No designers found"</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            </Show>
                            {move || {
                                let (items, pagination) = state.with(|s| (s.page.items.clone(), s.page.pagination));
                                items.into_iter().enumerate().map(|(index, item)| {
                                    let id = item.id;
                                    let item_for_edit = item.clone();
                                    let designer_image = item.designer_image.clone();
                                    let alt = item.designer_name.clone();
                                    let designer_name = item.designer_name.clone();
                                    let designer_title = item.designer_title.clone();
                                    let designer_rating = item.designer_rating.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{pagination.row_number(index)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {designer_image.clone().map(|path| view! {
                                                        <img class="table__thumb" src=image_url(&path) alt=alt.clone() />
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{designer_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{designer_title.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{designer_rating.clone()}</TableCellLayout>
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
