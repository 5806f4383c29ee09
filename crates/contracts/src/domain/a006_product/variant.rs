//! Выбор варианта на карточке товара: материал и размер как два независимых
//! корневых уровня; цена запрашивается, когда выбраны оба.

use super::aggregate::ProductDetail;
use super::pricing::PriceQuery;
use crate::shared::dependent_selection::{options_from, DependentSelectionResolver, Hierarchy, OptionId, TierSpec};

pub const MATERIAL: &str = "material";
pub const SIZE: &str = "size";

pub fn hierarchy() -> Hierarchy {
    Hierarchy::new(vec![
        TierSpec::root(MATERIAL).payload_key("material_id"),
        TierSpec::root(SIZE),
    ])
    .expect("variant hierarchy is static")
}

/// Селектор варианта с загруженными списками; первый материал выбран сразу
pub fn variant_selector(detail: &ProductDetail) -> DependentSelectionResolver {
    let mut resolver = DependentSelectionResolver::new(hierarchy())
        .with_options(MATERIAL, options_from(&detail.product_materials, None))
        .and_then(|r| r.with_options(SIZE, options_from(&detail.product_sizes, None)))
        .expect("material and size are declared tiers");

    if let Some(first) = detail.product_materials.first() {
        if let Err(err) = resolver.select(MATERIAL, first.id) {
            log::warn!("product {}: cannot preselect material: {}", detail.id, err);
        }
    }
    resolver
}

/// Параметры запроса цены, если выбраны и материал, и размер
pub fn price_query(detail: &ProductDetail, resolver: &DependentSelectionResolver) -> Option<PriceQuery> {
    let material_id = resolver.selected(MATERIAL).and_then(OptionId::as_i64)?;
    let size = resolver.selected(SIZE)?;
    Some(PriceQuery {
        product_id: detail.id,
        material_id,
        size: size.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail() -> ProductDetail {
        serde_json::from_value(json!({
            "id": 55,
            "product_name": "Linen Kurta",
            "vendor": {"id": 3, "shop_name": "Kiran Textiles", "vendor_type": 1},
            "all_images": ["/p/55-1.jpg", "/p/55-2.jpg"],
            "product_materials": [
                {"id": 9, "img_path": "/m/9.jpg", "master_material": {"material_name": "Linen"}, "prices": [{"actual_price": "1499"}]},
                {"id": 10, "master_material": {"material_name": "Cotton"}, "prices": []}
            ],
            "product_sizes": [{"size": "M"}, {"size": "L"}]
        }))
        .unwrap()
    }

    #[test]
    fn test_first_material_is_preselected() {
        let d = detail();
        let resolver = variant_selector(&d);
        assert_eq!(resolver.selected_label(MATERIAL), Some("Linen"));
        assert_eq!(resolver.get_options(SIZE).len(), 2);
        assert_eq!(d.starting_price(), Some(1499.0));
        assert_eq!(d.shop_name(), "Kiran Textiles");
    }

    #[test]
    fn test_price_query_needs_both_tiers() {
        let d = detail();
        let mut resolver = variant_selector(&d);
        assert_eq!(price_query(&d, &resolver), None);

        resolver.select(SIZE, "L").unwrap();
        resolver.select(MATERIAL, 10).unwrap();
        assert_eq!(
            price_query(&d, &resolver),
            Some(PriceQuery {
                product_id: 55,
                material_id: 10,
                size: "L".into()
            })
        );
    }
}
