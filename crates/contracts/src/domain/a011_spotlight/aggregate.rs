use crate::domain::a005_vendor::Vendor;
use crate::domain::common::{BodyEncoding, Resource};
use crate::shared::local_patch::HasId;
use crate::shared::serde_utils::{lenient_i64, lenient_opt_i64, lenient_opt_string, lenient_string, null_as_default};
use serde::{Deserialize, Serialize};

/// Баннер магазина на главной: фон, логотип, заголовок и цена «от»
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spotlight {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,

    /// Id продавца
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub shop_id: Option<i64>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub shop_name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub price: String,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub background_image: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub brand_logo: Option<String>,
}

impl HasId for Spotlight {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Spotlight {
    fn entity_index() -> &'static str {
        "a011"
    }

    fn collection_name() -> &'static str {
        "spotlights"
    }

    fn element_name() -> &'static str {
        "Spotlight"
    }

    fn list_name() -> &'static str {
        "Spotlights"
    }

    fn saved_key() -> &'static str {
        "spotlight"
    }

    fn body_encoding() -> BodyEncoding {
        BodyEncoding::Multipart
    }
}

/// Ответ `/spotlights/meta`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotlightMeta {
    #[serde(default, deserialize_with = "null_as_default")]
    pub vendors: Vec<Vendor>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_price_and_blank_images() {
        let s: Spotlight = serde_json::from_value(json!({
            "id": 2, "shop_id": "8", "shop_name": "Kiran Textiles", "title": "Festive edit",
            "price": 999, "background_image": "/spot/2.jpg", "brand_logo": ""
        }))
        .unwrap();
        assert_eq!(s.shop_id, Some(8));
        assert_eq!(s.price, "999");
        assert_eq!(s.brand_logo, None);

        let meta: SpotlightMeta = serde_json::from_value(json!({"status": true, "vendors": null})).unwrap();
        assert!(meta.vendors.is_empty());
    }
}
