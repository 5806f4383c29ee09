use crate::domain::common::{BodyEncoding, Resource};
use crate::shared::local_patch::HasId;
use crate::shared::serde_utils::{lenient_i64, lenient_opt_i64, lenient_opt_string, lenient_string};
use serde::{Deserialize, Serialize};

/// Баннер "Super Save": сделка с заголовком, ценой и логотипом бренда
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperSaveDeal {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,

    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub deal_type: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub product_id: Option<i64>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,

    /// Цена баннера как её ввели ("999", "1499.50")
    #[serde(default, deserialize_with = "lenient_string")]
    pub price: String,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub brand_logo: Option<String>,
}

impl HasId for SuperSaveDeal {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for SuperSaveDeal {
    fn entity_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "supersaver-deals"
    }

    fn element_name() -> &'static str {
        "Super Save Deal"
    }

    fn list_name() -> &'static str {
        "Super Save Deals"
    }

    fn saved_key() -> &'static str {
        "deal"
    }

    fn body_encoding() -> BodyEncoding {
        BodyEncoding::Multipart
    }
}
