//! Tolerant deserializers for backend records.
//!
//! The backend is inconsistent about numbers: ids, foreign keys and type codes
//! arrive as `1`, `"1"` or `null` depending on the endpoint.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "1".to_string() } else { "0".to_string() }),
        _ => None,
    }
}

/// `1` / `"1"` → `1`
pub fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    value_to_i64(&value).ok_or_else(|| D::Error::custom(format!("expected integer, got {}", value)))
}

/// `null`, `""` and garbage → `None`
pub fn lenient_opt_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_i64))
}

/// Numbers become their decimal representation, `null` → empty string
pub fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_string).unwrap_or_default())
}

/// Like [`lenient_string`], but `null` and blank strings → `None`
pub fn lenient_opt_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_to_string)
        .filter(|s| !s.trim().is_empty()))
}

/// Counters of the paginator; `null` → 0
pub fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_to_i64)
        .map(|n| n.clamp(0, u32::MAX as i64) as u32)
        .unwrap_or(0))
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Prices and ratings: `"1499.00"` / `1499` → `1499.0`, `null` → `0.0`
pub fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64).unwrap_or(0.0))
}

pub fn lenient_opt_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64))
}

/// `1`, `"1"`, `true` → `true`
pub fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => b,
        Some(ref v) => value_to_i64(v).map(|n| n != 0).unwrap_or(false),
        None => false,
    })
}

/// `null` → `T::default()` (relations that come back as `null` instead of `[]`)
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "lenient_i64")]
        id: i64,
        #[serde(default, deserialize_with = "lenient_opt_i64")]
        parent: Option<i64>,
        #[serde(default, deserialize_with = "lenient_string")]
        code: String,
        #[serde(default, deserialize_with = "lenient_bool")]
        flag: bool,
        #[serde(default, deserialize_with = "lenient_opt_f64")]
        price: Option<f64>,
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        let row: Row = serde_json::from_value(json!({"id": "12", "parent": 3, "code": 2, "flag": "1", "price": "1499.50"})).unwrap();
        assert_eq!(row.price, Some(1499.5));
        assert_eq!(row.id, 12);
        assert_eq!(row.parent, Some(3));
        assert_eq!(row.code, "2");
        assert!(row.flag);

        let row: Row = serde_json::from_value(json!({"id": 5, "parent": null, "code": null})).unwrap();
        assert_eq!(row.parent, None);
        assert_eq!(row.code, "");
        assert!(!row.flag);
        assert_eq!(row.price, None);

        assert!(serde_json::from_value::<Row>(json!({"id": "x"})).is_err());
    }
}
