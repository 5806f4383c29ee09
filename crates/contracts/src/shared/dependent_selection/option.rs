//! Selectable options of a single tier

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Normalised option identifier.
///
/// The backend sends ids both as numbers and as numeric strings (`1`, `"1"`,
/// sometimes `1.0`), so every id is kept as a trimmed string and compared as such.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OptionId(String);

impl OptionId {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.len() == value.len() {
            Self(value)
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Parse the value of an HTML control: the empty placeholder means "nothing selected"
    pub fn parse_input(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Extract an id from an arbitrary JSON value (number or non-empty string)
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self(i.to_string()))
                } else if let Some(u) = n.as_u64() {
                    Some(Self(u.to_string()))
                } else {
                    let f = n.as_f64()?;
                    if f.fract() == 0.0 && f.abs() < 9.0e15 {
                        Some(Self((f as i64).to_string()))
                    } else {
                        Some(Self(f.to_string()))
                    }
                }
            }
            Value::String(s) => Self::parse_input(s),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse::<i64>().ok()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OptionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for OptionId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&String> for OptionId {
    fn from(value: &String) -> Self {
        Self::new(value.as_str())
    }
}

impl From<i64> for OptionId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<i32> for OptionId {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

impl From<u32> for OptionId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for OptionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OptionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        OptionId::from_json(&value)
            .ok_or_else(|| D::Error::custom(format!("invalid option id: {}", value)))
    }
}

/// One selectable item of a tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: OptionId,
    pub label: String,
    /// Value of the tier's relation field; compared with the parent tier selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_key: Option<OptionId>,
}

impl SelectOption {
    pub fn new(id: impl Into<OptionId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            parent_key: None,
        }
    }

    pub fn with_parent(mut self, parent_key: impl Into<OptionId>) -> Self {
        self.parent_key = Some(parent_key.into());
        self
    }

    /// Build an option from a typed record, reading `relation_field` as the parent key
    pub fn from_record<R: Selectable + ?Sized>(record: &R, relation_field: Option<&str>) -> Self {
        Self {
            id: record.option_id(),
            label: record.option_label(),
            parent_key: relation_field.and_then(|field| record.relation_value(field)),
        }
    }

    /// Build an option from a raw JSON record.
    ///
    /// `label_fields` are tried in order, the first non-empty string wins
    /// (e.g. `["name", "part_name"]` for measurements).
    pub fn from_json(
        record: &Value,
        id_field: &str,
        label_fields: &[&str],
        relation_field: Option<&str>,
    ) -> Option<Self> {
        let id = OptionId::from_json(record.get(id_field)?)?;
        let label = label_fields
            .iter()
            .filter_map(|field| record.get(*field))
            .find_map(|value| match value {
                Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .unwrap_or_default();
        let parent_key = relation_field
            .and_then(|field| record.get(field))
            .and_then(OptionId::from_json);
        Some(Self {
            id,
            label,
            parent_key,
        })
    }
}

/// Records that can feed a tier of a dependent selection
pub trait Selectable {
    fn option_id(&self) -> OptionId;

    fn option_label(&self) -> String;

    /// Value of a declared relation field (`vendor_type`, `category_id`, `type`...)
    fn relation_value(&self, field: &str) -> Option<OptionId>;
}

/// Convert a fetched list into options for a tier
pub fn options_from<R: Selectable>(records: &[R], relation_field: Option<&str>) -> Vec<SelectOption> {
    records
        .iter()
        .map(|r| SelectOption::from_record(r, relation_field))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_option_id_normalises_numbers_and_strings() {
        assert_eq!(OptionId::from_json(&json!(1)), Some(OptionId::from("1")));
        assert_eq!(OptionId::from_json(&json!("1")), Some(OptionId::from(1i64)));
        assert_eq!(OptionId::from_json(&json!(2.0)), Some(OptionId::from("2")));
        assert_eq!(OptionId::from_json(&json!(" 7 ")), Some(OptionId::from("7")));
        assert_eq!(OptionId::from_json(&json!("")), None);
        assert_eq!(OptionId::from_json(&json!(null)), None);
    }

    #[test]
    fn test_option_id_deserializes_from_number() {
        let id: OptionId = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.as_i64(), Some(42));
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("42"));
    }

    #[test]
    fn test_parse_input_treats_placeholder_as_none() {
        assert_eq!(OptionId::parse_input(""), None);
        assert_eq!(OptionId::parse_input("  "), None);
        assert_eq!(OptionId::parse_input("3"), Some(OptionId::from("3")));
    }

    #[test]
    fn test_option_from_json_uses_first_label_field() {
        let record = json!({"id": 5, "name": null, "part_name": "Chest", "type": "1"});
        let option = SelectOption::from_json(&record, "id", &["name", "part_name"], Some("type")).unwrap();
        assert_eq!(option.id.as_str(), "5");
        assert_eq!(option.label, "Chest");
        assert_eq!(option.parent_key, Some(OptionId::from("1")));

        assert!(SelectOption::from_json(&json!({"name": "x"}), "id", &["name"], None).is_none());
    }
}
