use crate::domain::common::Resource;
use crate::enums::VendorType;
use crate::shared::local_patch::HasId;
use crate::shared::serde_utils::{lenient_i64, lenient_opt_i64, lenient_string};
use serde::{Deserialize, Serialize};

/// Текущая сделка: товар продавца в блоке на главной
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentDeal {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,

    /// "Designer" или "Shop"
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub deal_type: String,

    /// Имя продавца (логин дизайнера или название магазина)
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub product_id: Option<i64>,
}

impl CurrentDeal {
    pub fn vendor_type(&self) -> Option<VendorType> {
        VendorType::from_label(&self.deal_type).or_else(|| VendorType::from_code(&self.deal_type))
    }
}

impl HasId for CurrentDeal {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for CurrentDeal {
    fn entity_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "current-deals"
    }

    fn element_name() -> &'static str {
        "Current Deal"
    }

    fn list_name() -> &'static str {
        "Current Deals"
    }

    fn saved_key() -> &'static str {
        "deal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::HttpMethod;
    use serde_json::json;

    #[test]
    fn test_deal_record_and_routes() {
        let deal: CurrentDeal = serde_json::from_value(json!({
            "id": 5, "type": "Designer", "name": "asha", "product_id": "10"
        }))
        .unwrap();
        assert_eq!(deal.vendor_type(), Some(VendorType::Designer));
        assert_eq!(deal.product_id, Some(10));

        let update = CurrentDeal::update_route(5);
        assert_eq!(update.method, HttpMethod::Put);
        assert_eq!(update.path, "/current-deals/5");
        assert_eq!(update.method_override, None);
    }
}
