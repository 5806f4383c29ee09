//! Product Details - ViewModel
//!
//! Material and size are independent tiers of one resolver. The price is
//! requested once both are chosen; an answer for an older choice is dropped.

use super::model;
use contracts::domain::a006_product::variant::{self, MATERIAL};
use contracts::domain::a006_product::{PriceDetails, PriceQuery, ProductDetail};
use contracts::shared::dependent_selection::DependentSelectionResolver;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct ProductDetailsVm {
    pub product: RwSignal<Option<ProductDetail>>,
    pub variant: RwSignal<DependentSelectionResolver>,
    pub price: RwSignal<Option<PriceDetails>>,
    pub active_image: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub price_error: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
    pub is_pricing: RwSignal<bool>,
}

impl ProductDetailsVm {
    pub fn new() -> Self {
        Self {
            product: RwSignal::new(None),
            variant: RwSignal::new(DependentSelectionResolver::new(variant::hierarchy())),
            price: RwSignal::new(None),
            active_image: RwSignal::new(None),
            error: RwSignal::new(None),
            price_error: RwSignal::new(None),
            is_loading: RwSignal::new(false),
            is_pricing: RwSignal::new(false),
        }
    }

    pub fn load(&self, id: i64) {
        let this = *self;
        this.is_loading.set(true);
        this.error.set(None);
        spawn_local(async move {
            let result = model::fetch_product(id).await;
            this.is_loading.set(false);
            match result {
                Ok(detail) => {
                    this.variant.set(variant::variant_selector(&detail));
                    this.active_image.set(detail.first_image().map(str::to_string));
                    this.price.set(None);
                    this.product.set(Some(detail));
                    this.refresh_price();
                }
                Err(e) => this.error.set(Some(format!("Failed to load product {}: {}", id, e))),
            }
        });
    }

    /// Choose a variant option; a material with its own picture becomes the main image
    pub fn select(&self, tier: &'static str, raw: String) {
        self.variant.update(|r| {
            if let Err(e) = r.select_input(tier, &raw) {
                log::warn!("product variant: {}", e);
            }
        });
        if tier == MATERIAL {
            let picture = self.product.with_untracked(|p| {
                p.as_ref().and_then(|d| {
                    d.product_materials
                        .iter()
                        .find(|m| m.id.to_string() == raw)
                        .and_then(|m| m.img_path.clone())
                })
            });
            if picture.is_some() {
                self.active_image.set(picture);
            }
        }
        self.refresh_price();
    }

    pub fn show_image(&self, path: String) {
        self.active_image.set(Some(path));
    }

    fn current_query(&self) -> Option<PriceQuery> {
        let variant = self.variant;
        self.product.with_untracked(|p| {
            p.as_ref()
                .and_then(|d| variant.with_untracked(|r| variant::price_query(d, r)))
        })
    }

    fn refresh_price(&self) {
        self.price.set(None);
        self.price_error.set(None);
        self.is_pricing.set(false);
        let Some(query) = self.current_query() else {
            return;
        };
        let this = *self;
        this.is_pricing.set(true);
        spawn_local(async move {
            let result = model::fetch_price(&query).await;
            if this.current_query().as_ref() != Some(&query) {
                log::debug!("product {}: dropping price for an older choice", query.product_id);
                return;
            }
            this.is_pricing.set(false);
            match result {
                Ok(quote) => this.price.set(Some(quote.into())),
                Err(e) => this.price_error.set(Some(format!("Failed to load price: {}", e))),
            }
        });
    }
}
