use crate::domain::common::{BodyEncoding, HttpMethod, Resource, Route};
use crate::enums::Gender;
use crate::shared::dependent_selection::{OptionId, Selectable};
use crate::shared::local_patch::HasId;
use crate::shared::serde_utils::{lenient_i64, lenient_opt_string};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Мерка (обхват груди, длина рукава...), привязанная к гендеру
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub name: Option<String>,

    /// Старые записи хранят название здесь
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub part_name: Option<String>,

    /// Код гендера ("1".."5")
    #[serde(rename = "type", default, deserialize_with = "lenient_opt_string")]
    pub gender: Option<String>,

    /// Подпись гендера, если бэкенд её прислал
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub type_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub image: Option<String>,

    /// Значения по размерам: объект, JSON-строка или `[]`
    #[serde(default)]
    pub size_values: Option<Value>,

    /// Старое имя `size_values`
    #[serde(default)]
    pub size_details: Option<Value>,
}

impl Measurement {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.part_name.as_deref())
            .unwrap_or("N/A")
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender.as_deref().and_then(Gender::from_code)
    }

    pub fn gender_label(&self) -> &str {
        match (self.type_name.as_deref(), self.gender()) {
            (Some(name), _) => name,
            (None, Some(g)) => g.display_name(),
            (None, None) => "N/A",
        }
    }

    /// Значения по именам размеров; непонятный формат даёт пустую карту
    pub fn size_values(&self) -> BTreeMap<String, String> {
        let raw = self
            .size_values
            .as_ref()
            .filter(|v| !v.is_null())
            .or(self.size_details.as_ref());
        let parsed = match raw {
            Some(Value::String(text)) => serde_json::from_str(text).unwrap_or(Value::Null),
            Some(other) => other.clone(),
            None => Value::Null,
        };
        let Value::Object(map) = parsed else {
            return BTreeMap::new();
        };
        map.into_iter()
            .filter_map(|(size, value)| {
                let value = match value {
                    Value::String(s) => s,
                    Value::Number(n) => n.to_string(),
                    _ => return None,
                };
                Some((size, value))
            })
            .collect()
    }
}

impl HasId for Measurement {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Selectable for Measurement {
    fn option_id(&self) -> OptionId {
        OptionId::from(self.id)
    }

    fn option_label(&self) -> String {
        self.display_name().to_string()
    }

    fn relation_value(&self, field: &str) -> Option<OptionId> {
        match field {
            "type" | "gender" => self.gender.as_deref().and_then(OptionId::parse_input),
            _ => None,
        }
    }
}

impl Resource for Measurement {
    fn entity_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "measurements"
    }

    fn element_name() -> &'static str {
        "Measurement"
    }

    fn list_name() -> &'static str {
        "Measurements"
    }

    fn saved_key() -> &'static str {
        "measurement"
    }

    fn body_encoding() -> BodyEncoding {
        BodyEncoding::Multipart
    }

    fn create_route() -> Route {
        Route::new(HttpMethod::Post, "/measurements/add")
    }

    fn update_route(id: i64) -> Route {
        Route::new(HttpMethod::Post, format!("/measurements/update/{}", id))
    }

    fn delete_route(id: i64) -> Route {
        Route::new(HttpMethod::Delete, format!("/measurements/delete/{}", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_label_falls_back_to_part_name() {
        let m: Measurement =
            serde_json::from_value(json!({"id": 3, "name": null, "part_name": "Chest", "type": 1})).unwrap();
        assert_eq!(m.option_label(), "Chest");
        assert_eq!(m.gender(), Some(Gender::Men));
        assert_eq!(m.relation_value("type"), Some(OptionId::from("1")));
    }

    #[test]
    fn test_size_values_in_any_shape() {
        let as_string: Measurement = serde_json::from_value(json!({
            "id": 1, "name": "Chest", "type": "1", "size_values": "{\"S\": \"36\", \"M\": 38}"
        }))
        .unwrap();
        let values = as_string.size_values();
        assert_eq!(values.get("S").map(String::as_str), Some("36"));
        assert_eq!(values.get("M").map(String::as_str), Some("38"));

        let legacy: Measurement =
            serde_json::from_value(json!({"id": 2, "size_values": null, "size_details": {"L": "40"}})).unwrap();
        assert_eq!(legacy.size_values().len(), 1);

        let empty: Measurement = serde_json::from_value(json!({"id": 3, "size_values": []})).unwrap();
        assert!(empty.size_values().is_empty());
        let broken: Measurement = serde_json::from_value(json!({"id": 4, "size_values": "{oops"})).unwrap();
        assert!(broken.size_values().is_empty());
    }

    #[test]
    fn test_routes_and_type_label() {
        assert_eq!(Measurement::list_path(), "/measurements");
        assert_eq!(Measurement::update_route(8).path, "/measurements/update/8");
        assert_eq!(Measurement::update_route(8).method_override, None);
        assert_eq!(Measurement::delete_route(8).path, "/measurements/delete/8");

        let m: Measurement = serde_json::from_value(json!({"id": 5, "type": 2})).unwrap();
        assert_eq!(m.gender_label(), "Women");
        let m: Measurement = serde_json::from_value(json!({"id": 6, "type": 2, "type_name": "Ladies"})).unwrap();
        assert_eq!(m.gender_label(), "Ladies");
    }
}
