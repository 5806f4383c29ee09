//! Tab content registry: the single place mapping tab.key → View

use super::tab_labels::PRODUCT_DETAIL_PREFIX;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_subcategory::ui::list::SubcategoryList;
use crate::domain::a003_measurement::ui::list::MeasurementList;
use crate::domain::a004_measurement_mapping::ui::list::MeasurementMappingList;
use crate::domain::a005_vendor::ui::list::VendorList;
use crate::domain::a006_product::ui::details::ProductDetails;
use crate::domain::a006_product::ui::lookup::ProductLookup;
use crate::domain::a007_designer::ui::list::DesignerList;
use crate::domain::a008_current_deal::ui::list::CurrentDealList;
use crate::domain::a009_super_save_deal::ui::list::SuperSaveDealList;
use crate::domain::a010_size::ui::list::SizeList;
use crate::domain::a011_spotlight::ui::list::SpotlightList;
use crate::domain::a012_customer::ui::list::CustomerList;
use crate::domain::a013_order::ui::list::OrderList;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Render the content of a tab by its key.
///
/// `tabs_store` lets detail views close their own tab.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Master data
        // ═══════════════════════════════════════════════════════════════════
        "a001_category" => view! { <CategoryList /> }.into_any(),
        "a002_subcategory" => view! { <SubcategoryList /> }.into_any(),
        "a003_measurement" => view! { <MeasurementList /> }.into_any(),
        "a004_measurement_mapping" => view! { <MeasurementMappingList /> }.into_any(),
        "a010_size" => view! { <SizeList /> }.into_any(),
        "a007_designer" => view! { <DesignerList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Deals
        // ═══════════════════════════════════════════════════════════════════
        "a008_current_deal" => view! { <CurrentDealList /> }.into_any(),
        "a009_super_save_deal" => view! { <SuperSaveDealList /> }.into_any(),
        "a011_spotlight" => view! { <SpotlightList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Reports
        // ═══════════════════════════════════════════════════════════════════
        "a005_vendor" => view! { <VendorList /> }.into_any(),
        "a012_customer" => view! { <CustomerList /> }.into_any(),
        "a013_order" => view! { <OrderList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Products
        // ═══════════════════════════════════════════════════════════════════
        "a006_product" => view! { <ProductLookup /> }.into_any(),
        k if k.starts_with(PRODUCT_DETAIL_PREFIX) => {
            match k.strip_prefix(PRODUCT_DETAIL_PREFIX).and_then(|id| id.parse::<i64>().ok()) {
                Some(id) => view! {
                    <ProductDetails
                        id=id
                        on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
                    />
                }
                .into_any(),
                None => {
                    log::warn!("bad product tab key: {}", k);
                    view! { <div class="placeholder">{"Bad product tab key"}</div> }.into_any()
                }
            }
        }

        _ => {
            log::warn!("unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
