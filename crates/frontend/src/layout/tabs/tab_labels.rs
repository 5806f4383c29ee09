//! Tab titles, taken from the resource names where a resource exists

use contracts::domain::a001_category::Category;
use contracts::domain::a002_subcategory::Subcategory;
use contracts::domain::a003_measurement::Measurement;
use contracts::domain::a004_measurement_mapping::MeasurementMapping;
use contracts::domain::a005_vendor::Vendor;
use contracts::domain::a007_designer::Designer;
use contracts::domain::a008_current_deal::CurrentDeal;
use contracts::domain::a009_super_save_deal::SuperSaveDeal;
use contracts::domain::a010_size::Size;
use contracts::domain::a011_spotlight::Spotlight;
use contracts::domain::a012_customer::Customer;
use contracts::domain::a013_order::Order;
use contracts::domain::common::Resource;

pub const PRODUCT_DETAIL_PREFIX: &str = "a006_product_detail_";

/// Title of a menu tab; empty for unknown keys
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_category" => Category::list_name(),
        "a002_subcategory" => Subcategory::list_name(),
        "a003_measurement" => Measurement::list_name(),
        "a004_measurement_mapping" => MeasurementMapping::list_name(),
        "a005_vendor" => Vendor::list_name(),
        "a006_product" => "Product Preview",
        "a007_designer" => "Top Designers",
        "a008_current_deal" => CurrentDeal::list_name(),
        "a009_super_save_deal" => SuperSaveDeal::list_name(),
        "a010_size" => Size::list_name(),
        "a011_spotlight" => Spotlight::list_name(),
        "a012_customer" => Customer::list_name(),
        "a013_order" => Order::list_name(),
        _ => "",
    }
}

/// «<entity> · <identifier>»
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

/// Title for any key, including detail tabs restored from the url
pub fn title_for_key(key: &str) -> String {
    if let Some(id) = key.strip_prefix(PRODUCT_DETAIL_PREFIX) {
        return detail_tab_label("Product", id);
    }
    match tab_label_for_key(key) {
        "" => key.to_string(),
        label => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_for_detail_key() {
        assert_eq!(title_for_key("a006_product_detail_55"), "Product · 55");
    }

    #[test]
    fn test_unknown_key_falls_back_to_itself() {
        assert_eq!(title_for_key("nope"), "nope");
        assert_eq!(title_for_key("a008_current_deal"), "Current Deals");
    }

    #[test]
    fn test_every_menu_key_has_a_title() {
        let keys = [
            "a001_category",
            "a003_measurement",
            "a005_vendor",
            "a010_size",
            "a011_spotlight",
            "a012_customer",
            "a013_order",
        ];
        for key in keys {
            assert!(!tab_label_for_key(key).is_empty(), "{} has no title", key);
        }
        assert_eq!(title_for_key("a013_order"), "Orders");
    }
}
