use super::model;
use crate::shared::api_utils::image_url;
use contracts::domain::a006_product::{MeasureGuide, SizeChart, Unit};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn SizeGuide(product_id: i64) -> impl IntoView {
    let chart = RwSignal::new(SizeChart::default());
    let guides = RwSignal::new(Vec::<MeasureGuide>::new());
    let unit = RwSignal::new(Unit::default());
    let error = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(true);

    spawn_local(async move {
        let rows = model::fetch_size_chart(product_id).await;
        let pictures = model::fetch_measure_guides(product_id).await;
        is_loading.set(false);
        match rows {
            Ok(c) => chart.set(c),
            Err(e) => error.set(Some(format!("Failed to load size chart: {}", e))),
        }
        match pictures {
            Ok(g) => guides.set(g),
            Err(e) => log::warn!("product {}: measurement guides: {}", product_id, e),
        }
    });

    view! {
        <div class="size-guide">
            <div class="size-guide__header">
                <h4>"Size Guide"</h4>
                <div class="size-guide__units">
                    {Unit::all().into_iter().map(|u| view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=move || if unit.get() == u { ButtonAppearance::Primary } else { ButtonAppearance::Secondary }
                            on_click=move |_| unit.set(u)
                        >
                            {u.label()}
                        </Button>
                    }).collect_view()}
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Show when=move || is_loading.get()>
                <Spinner size=SpinnerSize::Small />
            </Show>

            <Show when=move || !is_loading.get() && chart.with(SizeChart::is_empty) && error.with(Option::is_none)>
                <div class="size-guide__empty">"No size chart for this product"</div>
            </Show>

            <Show when=move || !chart.with(SizeChart::is_empty)>
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=70.0>"Size"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>"Value"</TableHeaderCell>
                                {move || chart.with(|c| c.headers.clone()).into_iter().map(|h| view! {
                                    <TableHeaderCell min_width=90.0>{format!("{} ({})", h, unit.get().label())}</TableHeaderCell>
                                }).collect_view()}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let u = unit.get();
                                chart.with(|c| {
                                    c.rows.iter().map(|row| {
                                        let cells = c.cells(row, u);
                                        let size = row.size.clone();
                                        let value = row.value.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{size.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{value.clone()}</TableCellLayout>
                                                </TableCell>
                                                {cells.into_iter().map(|cell| view! {
                                                    <TableCell>
                                                        <TableCellLayout>{cell}</TableCellLayout>
                                                    </TableCell>
                                                }).collect_view()}
                                            </TableRow>
                                        }
                                    }).collect_view()
                                })
                            }}
                        </TableBody>
                    </Table>
                </div>
            </Show>

            <div class="size-guide__pictures">
                {move || guides.get().into_iter().map(|g| view! {
                    <figure class="size-guide__picture">
                        {g.reference_image.clone().map(|path| view! {
                            <img src=image_url(&path) alt=g.name.clone() />
                        })}
                        <figcaption>{g.name.clone()}</figcaption>
                    </figure>
                }).collect_view()}
            </div>
        </div>
    }
}
