//! Общая цепочка выбора для сделок: тип продавца → продавец → товар.
//!
//! Запись сделки хранит тип и продавца по названию, а товар по id,
//! поэтому при редактировании тип и продавец восстанавливаются обратным поиском.

use crate::domain::a005_vendor::Vendor;
use crate::domain::a006_product::Product;
use crate::enums::VendorType;
use crate::shared::dependent_selection::{
    options_from, DependentSelectionResolver, Hierarchy, HydrationRecord, OptionId, SelectionError, TierSpec,
};
use crate::shared::list::ValidationErrors;
use crate::shared::serde_utils::null_as_default;
use crate::shared::validation::FieldChecks;
use serde::{Deserialize, Serialize};

pub const TYPE: &str = "type";
pub const VENDOR: &str = "vendor";
pub const PRODUCT: &str = "product";

/// Ответ `/current-deals/meta` и `/supersaver-deals/meta`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DealMeta {
    #[serde(default, deserialize_with = "null_as_default")]
    pub vendors: Vec<Vendor>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
}

pub fn hierarchy() -> Hierarchy {
    Hierarchy::new(vec![
        TierSpec::root(TYPE),
        TierSpec::child(VENDOR, TYPE, "vendor_type").payload_key("vendor_id"),
        TierSpec::child(PRODUCT, VENDOR, "vendor_id").payload_key("product_id"),
    ])
    .expect("deal hierarchy is static")
}

pub fn new_resolver() -> DependentSelectionResolver {
    DependentSelectionResolver::new(hierarchy())
        .with_options(TYPE, options_from(&VendorType::all(), None))
        .expect("type is a declared tier")
}

pub fn load_meta(resolver: &mut DependentSelectionResolver, meta: &DealMeta) -> Result<(), SelectionError> {
    resolver.load_options(VENDOR, options_from(&meta.vendors, Some("vendor_type")))?;
    resolver.load_options(PRODUCT, options_from(&meta.products, Some("vendor_id")))
}

/// Запись для восстановления выбора из сохранённой сделки.
///
/// Тип обычно хранится названием ("Designer"), но встречается и код.
pub fn hydration_record(stored_type: &str, vendor_name: &str, product_id: Option<i64>) -> HydrationRecord {
    let record = match VendorType::from_label(stored_type) {
        Some(kind) => HydrationRecord::new().with_label(TYPE, kind.display_name()),
        None => HydrationRecord::new().with_optional_id(TYPE, OptionId::parse_input(stored_type)),
    };
    record
        .with_label(VENDOR, vendor_name)
        .with_optional_id(PRODUCT, product_id)
}

/// Итог выбора, из которого собираются тела запросов сделок
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealSelection {
    pub kind: VendorType,
    pub vendor_id: i64,
    /// Имя продавца в том виде, в каком его хранит сделка
    pub vendor_name: String,
    pub product_id: i64,
}

impl DealSelection {
    /// Значение поля `type`
    pub fn type_label(&self) -> &'static str {
        self.kind.display_name()
    }
}

/// Проверить, что выбраны все три уровня, и собрать результат.
///
/// Ошибки лежат под ключами полей формы: `type`, `name`, `product_id`.
pub fn deal_selection(resolver: &DependentSelectionResolver) -> Result<DealSelection, ValidationErrors> {
    let kind = resolver.selected(TYPE).and_then(|id| VendorType::from_code(id.as_str()));
    let vendor_id = resolver.selected(VENDOR).and_then(OptionId::as_i64);
    let product_id = resolver.selected(PRODUCT).and_then(OptionId::as_i64);

    FieldChecks::new()
        .tiers(resolver, &[(TYPE, "type", "type"), (VENDOR, "name", "name"), (PRODUCT, "product_id", "product")])
        .finish()?;

    match (kind, vendor_id, product_id) {
        (Some(kind), Some(vendor_id), Some(product_id)) => Ok(DealSelection {
            kind,
            vendor_id,
            vendor_name: resolver.selected_label(VENDOR).unwrap_or_default().to_string(),
            product_id,
        }),
        _ => {
            let mut errors = ValidationErrors::new();
            errors.insert("type", "The type field is required.");
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meta() -> DealMeta {
        serde_json::from_value(json!({
            "vendors": [
                {"id": 1, "username": "asha", "shop_name": "Asha Studio", "vendor_type": 2},
                {"id": 2, "username": "kiran01", "shop_name": "Kiran Textiles", "vendor_type": 1},
                {"id": 3, "username": "meera", "shop_name": "Meera", "vendor_type": 1},
                {"id": 4, "username": "meera2", "shop_name": "Meera", "vendor_type": 1}
            ],
            "products": [
                {"id": 10, "product_name": "Silk Saree", "vendor_id": 1},
                {"id": 11, "product_name": "Linen Kurta", "vendor_id": 2},
                {"id": 12, "product_name": "Cotton Dupatta", "vendor_id": 2},
                {"id": 13, "product_name": "Block Print Shirt", "vendor_id": 3}
            ]
        }))
        .unwrap()
    }

    fn loaded() -> DependentSelectionResolver {
        let mut resolver = new_resolver();
        load_meta(&mut resolver, &meta()).unwrap();
        resolver
    }

    fn labels(resolver: &DependentSelectionResolver, tier: &str) -> Vec<String> {
        resolver.get_options(tier).iter().map(|o| o.label.clone()).collect()
    }

    #[test]
    fn test_type_filters_vendors_and_vendor_filters_products() {
        let mut resolver = loaded();
        assert!(resolver.is_locked(VENDOR));

        resolver.select(TYPE, VendorType::Designer.code()).unwrap();
        assert_eq!(labels(&resolver, VENDOR), vec!["asha"]);

        resolver.select(TYPE, VendorType::Shop.code()).unwrap();
        assert_eq!(labels(&resolver, VENDOR), vec!["Kiran Textiles", "Meera", "Meera"]);

        resolver.select(VENDOR, 2).unwrap();
        assert_eq!(labels(&resolver, PRODUCT), vec!["Linen Kurta", "Cotton Dupatta"]);
        resolver.select(PRODUCT, 12).unwrap();

        resolver.select(TYPE, VendorType::Designer.code()).unwrap();
        assert_eq!(resolver.selected(VENDOR), None);
        assert_eq!(resolver.selected(PRODUCT), None);
    }

    #[test]
    fn test_edit_finds_vendor_by_name() {
        let mut resolver = loaded();
        let report = resolver.hydrate(&hydration_record("Shop", "Kiran Textiles", Some(11)));
        assert!(report.is_complete());

        let selection = deal_selection(&resolver).unwrap();
        assert_eq!(
            selection,
            DealSelection {
                kind: VendorType::Shop,
                vendor_id: 2,
                vendor_name: "Kiran Textiles".into(),
                product_id: 11,
            }
        );
        assert_eq!(selection.type_label(), "Shop");
    }

    #[test]
    fn test_ambiguous_vendor_name_stays_unset() {
        let mut resolver = loaded();
        let report = resolver.hydrate(&hydration_record("Shop", "Meera", Some(13)));

        assert_eq!(resolver.selected(TYPE), Some(&OptionId::from("1")));
        assert_eq!(resolver.selected(VENDOR), None);
        assert_eq!(resolver.selected(PRODUCT), None);
        assert!(report.missed(VENDOR));
        assert!(report.missed(PRODUCT));
    }

    #[test]
    fn test_type_stored_as_code() {
        let mut resolver = loaded();
        resolver.hydrate(&hydration_record("2", "asha", Some(10)));
        assert_eq!(resolver.selected_label(PRODUCT), Some("Silk Saree"));
    }

    #[test]
    fn test_missing_tiers_are_field_errors() {
        let mut resolver = loaded();
        resolver.select(TYPE, "1").unwrap();
        let errors = deal_selection(&resolver).unwrap_err();
        assert_eq!(errors.first("type"), None);
        assert_eq!(errors.first("name"), Some("The name field is required."));
        assert_eq!(errors.first("product_id"), Some("The product field is required."));
    }
}
