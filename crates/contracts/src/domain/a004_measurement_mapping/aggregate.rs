use crate::domain::a001_category::Category;
use crate::domain::common::{HttpMethod, Resource, Route};
use crate::enums::Gender;
use crate::shared::local_patch::HasId;
use crate::shared::serde_utils::{lenient_i64, lenient_opt_i64, lenient_opt_string, lenient_string, null_as_default};
use serde::{Deserialize, Serialize};

/// Ссылка на связанную запись: нужен только id, название нужно для отображения
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub name: Option<String>,
}

/// Привязка набора мерок к подкатегориям одной категории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementMapping {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub category_id: Option<i64>,

    /// Код гендера ("1".."5")
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub gender: Option<String>,

    #[serde(default)]
    pub category: Option<Category>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub subcategories: Vec<IdRef>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub measurements: Vec<IdRef>,
}

impl MeasurementMapping {
    pub fn gender_label(&self) -> &'static str {
        Gender::label_for(self.gender.as_deref().unwrap_or_default())
    }

    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(Category::display_name).unwrap_or("N/A")
    }

    pub fn subcategory_ids(&self) -> Vec<i64> {
        self.subcategories.iter().map(|s| s.id).collect()
    }

    pub fn measurement_ids(&self) -> Vec<i64> {
        self.measurements.iter().map(|m| m.id).collect()
    }
}

impl HasId for MeasurementMapping {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for MeasurementMapping {
    fn entity_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "measurement-mappings"
    }

    fn element_name() -> &'static str {
        "Mapping"
    }

    fn list_name() -> &'static str {
        "Measurement Mappings"
    }

    fn saved_key() -> &'static str {
        "mapping"
    }

    fn create_route() -> Route {
        Route::new(HttpMethod::Post, "/measurement-mappings/store")
    }

    fn update_route(id: i64) -> Route {
        Route::new(HttpMethod::Post, format!("/measurement-mappings/update/{}", id))
    }

    fn delete_route(id: i64) -> Route {
        Route::new(HttpMethod::Delete, format!("/measurement-mappings/delete/{}", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_relations_may_be_null() {
        let m: MeasurementMapping = serde_json::from_value(json!({
            "id": 5, "name": "Mens Casual Top Wear", "category_id": "1", "gender": 1,
            "subcategories": [{"id": 10, "name": "Formal"}, {"id": "11"}],
            "measurements": null
        }))
        .unwrap();
        assert_eq!(m.subcategory_ids(), vec![10, 11]);
        assert!(m.measurement_ids().is_empty());
        assert_eq!(m.gender_label(), "Men");
        assert_eq!(m.category_name(), "N/A");
    }

    #[test]
    fn test_routes() {
        assert_eq!(MeasurementMapping::create_route().path, "/measurement-mappings/store");
        assert_eq!(MeasurementMapping::update_route(7).method, HttpMethod::Post);
        assert_eq!(MeasurementMapping::delete_route(7).path, "/measurement-mappings/delete/7");
        assert_eq!(MeasurementMapping::list_path(), "/measurement-mappings");
    }
}
