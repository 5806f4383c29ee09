use crate::domain::a005_vendor::Vendor;
use crate::domain::common::{BodyEncoding, Resource};
use crate::shared::local_patch::HasId;
use crate::shared::serde_utils::{lenient_i64, lenient_opt_i64, lenient_opt_string, lenient_string, null_as_default};
use serde::{Deserialize, Serialize};

/// Дизайнер на витрине: привязан к продавцу-дизайнеру
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Designer {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,

    /// Id продавца
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub designer_id: Option<i64>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub designer_name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub designer_title: String,

    /// Рейтинг 0–5, приходит числом или строкой
    #[serde(default, deserialize_with = "lenient_string")]
    pub designer_rating: String,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub designer_image: Option<String>,
}

impl HasId for Designer {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Designer {
    fn entity_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "designers"
    }

    fn element_name() -> &'static str {
        "Designer"
    }

    fn list_name() -> &'static str {
        "Designers"
    }

    fn saved_key() -> &'static str {
        "designer"
    }

    fn body_encoding() -> BodyEncoding {
        BodyEncoding::Multipart
    }
}

/// Ответ `/designers/meta`: продавцы-дизайнеры
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignerMeta {
    #[serde(default, deserialize_with = "null_as_default")]
    pub vendors: Vec<Vendor>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::HttpMethod;
    use serde_json::json;

    #[test]
    fn test_designer_parses_numeric_rating() {
        let d: Designer = serde_json::from_value(json!({
            "id": 3, "designer_id": "7", "designer_name": "asha",
            "designer_title": "Bridal couture", "designer_rating": 4.5,
            "designer_image": ""
        }))
        .unwrap();
        assert_eq!(d.designer_id, Some(7));
        assert_eq!(d.designer_rating, "4.5");
        assert_eq!(d.designer_image, None);
    }

    #[test]
    fn test_update_goes_through_method_override() {
        let route = Designer::update_route(3);
        assert_eq!(route.method, HttpMethod::Post);
        assert_eq!(route.path, "/designers/3");
        assert_eq!(route.method_override, Some(HttpMethod::Put));
        assert_eq!(Designer::meta_path(), "/designers/meta");
    }
}
