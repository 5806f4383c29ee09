use super::view_model::ProductDetailsVm;
use crate::domain::a006_product::ui::size_guide::SizeGuide;
use crate::shared::api_utils::image_url;
use crate::shared::components::ui::Badge as UiBadge;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a006_product::pricing::format_price;
use contracts::domain::a006_product::variant::{MATERIAL, SIZE};
use contracts::shared::dependent_selection::OptionId;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ProductDetails(id: i64, on_close: Callback<()>) -> impl IntoView {
    let vm = ProductDetailsVm::new();
    vm.load(id);

    let show_size_guide = RwSignal::new(false);

    let materials = move || {
        vm.product.with(|p| {
            p.as_ref()
                .map(|d| d.product_materials.clone())
                .unwrap_or_default()
        })
    };
    let sizes = move || {
        vm.variant.with(|r| {
            r.get_options(SIZE)
                .into_iter()
                .map(|o| (o.id.clone(), o.label.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <PageFrame page_id="a006_product--detail" category="detail">
            <div class="details-container product-details">
                <div class="details-header">
                    <h3>{move || vm.product.with(|p| p.as_ref().map(|d| d.product_name.clone()).unwrap_or_else(|| format!("Product #{}", id)))}</h3>
                    <div class="details-header__actions">
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.load(id)>
                            {icon("refresh")}
                            " Refresh"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                            {icon("x")}
                            " Close"
                        </Button>
                    </div>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show when=move || vm.is_loading.get()>
                    <Spinner />
                </Show>

                {move || vm.product.get().map(|detail| {
                    let images = detail.all_images.clone();
                    let shop = detail.shop_name().to_string();
                    let starting = detail.starting_price();
                    view! {
                        <div class="product-card">
                            <div class="product-card__gallery">
                                <div class="product-card__main-image">
                                    {move || vm.active_image.get().map(|path| view! {
                                        <img src=image_url(&path) alt="Product image" />
                                    })}
                                </div>
                                <div class="product-card__thumbs">
                                    {images.into_iter().map(|path| {
                                        let src = image_url(&path);
                                        let for_click = path.clone();
                                        let is_active = move || vm.active_image.with(|a| a.as_deref() == Some(path.as_str()));
                                        view! {
                                            <img
                                                class="product-card__thumb"
                                                class:product-card__thumb--active=is_active
                                                src=src
                                                alt="Thumbnail"
                                                on:click=move |_| vm.show_image(for_click.clone())
                                            />
                                        }
                                    }).collect_view()}
                                </div>
                            </div>

                            <div class="product-card__info">
                                <div class="product-card__shop">{shop}</div>

                                <div class="product-card__price">
                                    {move || match (vm.price.get(), vm.is_pricing.get()) {
                                        (_, true) => view! { <Spinner size=SpinnerSize::Tiny /> }.into_any(),
                                        (Some(details), false) => view! {
                                            <span class="price">{format_price(details.price)}</span>
                                            {details.old_price.map(|old| view! {
                                                <span class="price price--old">{format_price(old)}</span>
                                            })}
                                            {if details.out_of_stock {
                                                view! { <UiBadge variant="error".to_string()>"Out of stock"</UiBadge> }.into_any()
                                            } else {
                                                view! {
                                                    <UiBadge variant="success".to_string()>{format!("In stock: {}", details.qty)}</UiBadge>
                                                }.into_any()
                                            }}
                                        }.into_any(),
                                        (None, false) => view! {
                                            <span class="price price--from">
                                                {starting.map(|p| format!("From {}", format_price(p))).unwrap_or_default()}
                                            </span>
                                        }.into_any(),
                                    }}
                                </div>
                                {move || vm.price_error.get().map(|e| view! { <div class="alert alert--warning">{e}</div> })}

                                <div class="product-card__variants">
                                    <div class="form__label">"Material"</div>
                                    <div class="chip-group">
                                        {move || materials().into_iter().map(|m| {
                                            let raw = m.id.to_string();
                                            let option = OptionId::from(m.id);
                                            let selected = move || vm.variant.with(|r| r.is_selected(MATERIAL, &option));
                                            view! {
                                                <button
                                                    class="chip"
                                                    class:chip--selected=selected
                                                    on:click=move |_| vm.select(MATERIAL, raw.clone())
                                                >
                                                    {m.img_path.clone().map(|path| view! {
                                                        <img class="chip__image" src=image_url(&path) alt=m.name().to_string() />
                                                    })}
                                                    {m.name().to_string()}
                                                </button>
                                            }
                                        }).collect_view()}
                                    </div>

                                    <div class="form__label">"Size"</div>
                                    <div class="chip-group">
                                        {move || sizes().into_iter().map(|(option, label)| {
                                            let raw = option.to_string();
                                            let selected = move || vm.variant.with(|r| r.is_selected(SIZE, &option));
                                            view! {
                                                <button
                                                    class="chip"
                                                    class:chip--selected=selected
                                                    on:click=move |_| vm.select(SIZE, raw.clone())
                                                >
                                                    {label}
                                                </button>
                                            }
                                        }).collect_view()}
                                    </div>
                                </div>

                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| show_size_guide.update(|v| *v = !*v)
                                >
                                    {icon("ruler")}
                                    {move || if show_size_guide.get() { " Hide Size Guide" } else { " Size Guide" }}
                                </Button>
                            </div>
                        </div>
                    }
                })}

                <Show when=move || show_size_guide.get()>
                    <SizeGuide product_id=id />
                </Show>
            </div>
        </PageFrame>
    }
}
