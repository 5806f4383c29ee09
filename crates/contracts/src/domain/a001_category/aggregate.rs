use crate::domain::common::{BodyEncoding, HttpMethod, Resource, Route};
use crate::enums::CategoryType;
use crate::shared::dependent_selection::{OptionId, Selectable};
use crate::shared::local_patch::HasId;
use crate::shared::serde_utils::{lenient_i64, lenient_opt_string};
use serde::{Deserialize, Serialize};

/// Категория товаров.
///
/// Разные эндпоинты отдают название то как `name`, то как `category_name`,
/// а тип приходит как `type` или `category_type`; используйте методы доступа.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub category_name: Option<String>,

    #[serde(rename = "type", default, deserialize_with = "lenient_opt_string")]
    pub type_code: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub category_type: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub img_path: Option<String>,
}

impl Category {
    pub fn display_name(&self) -> &str {
        self.category_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    /// Код типа ("1".."4"); у гендерных категорий он совпадает с кодом `Gender`
    pub fn kind_code(&self) -> Option<&str> {
        self.type_code.as_deref().or(self.category_type.as_deref())
    }

    pub fn kind(&self) -> Option<CategoryType> {
        self.kind_code().and_then(CategoryType::from_code)
    }
}

impl HasId for Category {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Selectable for Category {
    fn option_id(&self) -> OptionId {
        OptionId::from(self.id)
    }

    fn option_label(&self) -> String {
        self.display_name().to_string()
    }

    fn relation_value(&self, field: &str) -> Option<OptionId> {
        match field {
            "type" | "category_type" => self.kind_code().and_then(OptionId::parse_input),
            _ => None,
        }
    }
}

impl Resource for Category {
    fn entity_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "categories"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }

    fn saved_key() -> &'static str {
        "category"
    }

    fn body_encoding() -> BodyEncoding {
        BodyEncoding::Multipart
    }

    /// Бэкенд категорий принимает обновление обычным POST, без `_method`
    fn update_route(id: i64) -> Route {
        Route::new(HttpMethod::Post, format!("/categories/{}", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_both_field_spellings() {
        let a: Category = serde_json::from_value(json!({"id": 1, "name": "Shirts", "type": 1})).unwrap();
        let b: Category =
            serde_json::from_value(json!({"id": "2", "category_name": "Kurtis", "category_type": "2", "type": null}))
                .unwrap();

        assert_eq!(a.display_name(), "Shirts");
        assert_eq!(a.relation_value("type"), Some(OptionId::from("1")));
        assert_eq!(b.display_name(), "Kurtis");
        assert_eq!(b.kind(), Some(CategoryType::WomenWear));
        assert_eq!(b.relation_value("type"), Some(OptionId::from("2")));
    }

    #[test]
    fn test_update_is_plain_post() {
        let route = Category::update_route(4);
        assert_eq!(route.method, HttpMethod::Post);
        assert_eq!(route.path, "/categories/4");
        assert_eq!(route.method_override, None);
        assert_eq!(Category::delete_route(4).path, "/categories/4");
    }
}
