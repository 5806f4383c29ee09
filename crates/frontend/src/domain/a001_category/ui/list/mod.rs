use crate::domain::a001_category::ui::details::{CategoryDetails, CategoryDetailsVm};
use crate::shared::api_utils::image_url;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_box::SearchBox;
use crate::shared::icons::icon;
use crate::shared::list_state::{self, create_state};
use crate::shared::page_frame::PageFrame;
use contracts::domain::a001_category::Category;
use contracts::enums::CategoryType;
use contracts::shared::local_patch::HasId;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let state = create_state::<Category>();
    let vm = CategoryDetailsVm::new();

    list_state::load_if_needed(state);

    let on_saved = Callback::new(move |saved| list_state::apply_saved(state, saved));
    let on_search = Callback::new(move |term| list_state::search(state, term));
    let on_page_change = Callback::new(move |page| list_state::go_to_page(state, page));

    let handle_delete = move |id: i64| list_state::delete_row(state, id, "Delete this category?");

    view! {
        <PageFrame page_id="a001_category--list" category="list">
            <PageHeader
                title="Categories"
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
                <CategoryDetails vm=vm on_saved=on_saved />

                <div class="list-toolbar">
                    <SearchBox on_search=on_search placeholder="Search categories..." />
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
                                <TableHeaderCell resizable=true min_width=220.0>"Name"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=140.0>"Type"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <Show when=move || state.with(|s| s.is_loaded && s.page.items.is_empty())>
                                <TableRow>
                                    <TableCell attr:colspan="5">
                                        <TableCellLayout>"No categories found"</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            </Show>
                            {move || {
                                let (items, pagination) = state.with(|s| (s.page.items.clone(), s.page.pagination));
                                items.into_iter().enumerate().map(|(index, item)| {
                                    let id = item.id();
                                    let item_for_edit = item.clone();
                                    let name = item.display_name().to_string();
                                    let alt = name.clone();
                                    let type_label = CategoryType::label_for(item.kind_code().unwrap_or_default());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{pagination.row_number(index)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {item.img_path.clone().map(|path| view! {
                                                        <img class="table__thumb" src=image_url(&path) alt=alt.clone() />
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{type_label}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
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
