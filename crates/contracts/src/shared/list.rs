//! Paginated lists and response envelopes.
//!
//! The backend wraps every answer in `{ status, message, ... }`. List payloads
//! come in two shapes:
//!
//! - Laravel paginator: `{ data: { data: [...], current_page, last_page, ... } }`
//! - flat: `{ data: [...], pagination: { current_page, ... } }`
//!
//! [`Page::from_body`] accepts both.

use super::serde_utils::{lenient_bool, lenient_u32};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

pub const DEFAULT_PER_PAGE: u32 = 10;
/// Page size used to pull a whole lookup table in one request
pub const META_PER_PAGE: u32 = 1000;

// ============================================================================
// Query
// ============================================================================

/// Query parameters of a list request (`?page=1&search=&per_page=10`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u32,
    pub search: String,
    pub per_page: u32,
    /// Screen-specific filters sent as extra parameters (`vendor_type=2`)
    #[serde(flatten, default)]
    pub filters: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            per_page: DEFAULT_PER_PAGE,
            filters: BTreeMap::new(),
        }
    }
}

impl ListQuery {
    /// Whole table for dropdown sources
    pub fn meta() -> Self {
        Self {
            per_page: META_PER_PAGE,
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// A new search term always starts from the first page
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self.page = 1;
        self
    }

    /// Replace the filters; blank values are not sent
    pub fn with_filters(mut self, filters: BTreeMap<String, String>) -> Self {
        self.filters = filters
            .into_iter()
            .map(|(k, v)| (k, v.trim().to_string()))
            .filter(|(_, v)| !v.is_empty())
            .collect();
        self.page = 1;
        self
    }
}

// ============================================================================
// Pagination
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default = "one", deserialize_with = "lenient_page")]
    pub current_page: u32,
    #[serde(default = "one", deserialize_with = "lenient_page")]
    pub last_page: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub total: u32,
    #[serde(default = "default_per_page", deserialize_with = "lenient_per_page")]
    pub per_page: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub from: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub to: u32,
}

fn one() -> u32 {
    1
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn lenient_page<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    lenient_u32(deserializer).map(|n| n.max(1))
}

fn lenient_per_page<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    lenient_u32(deserializer).map(|n| if n == 0 { DEFAULT_PER_PAGE } else { n })
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
            total: 0,
            per_page: DEFAULT_PER_PAGE,
            from: 0,
            to: 0,
        }
    }
}

impl Pagination {
    /// Number shown in the `#` column for the row at `index` on this page
    pub fn row_number(&self, index: usize) -> u32 {
        self.from.max(1) + index as u32
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    pub(crate) fn record_inserted(&mut self) {
        self.total += 1;
    }

    pub(crate) fn record_removed(&mut self) {
        self.total = self.total.saturating_sub(1);
    }
}

// ============================================================================
// Envelopes
// ============================================================================

#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// `status: false` from the backend
    #[error("{0}")]
    Rejected(String),
    #[error("response has no '{0}' payload")]
    Missing(String),
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// `{ status, message, data }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "status_ok", deserialize_with = "lenient_bool")]
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

fn status_ok() -> bool {
    true
}

impl<T> ApiEnvelope<T> {
    pub fn into_data(self) -> Result<T, EnvelopeError> {
        if !self.status {
            return Err(EnvelopeError::Rejected(
                self.message.unwrap_or_else(|| "Request failed".to_string()),
            ));
        }
        self.data.ok_or_else(|| EnvelopeError::Missing("data".to_string()))
    }
}

/// Fail with the backend message when the body carries `status: false`
pub fn ensure_status(body: &Value) -> Result<(), EnvelopeError> {
    let ok = match body.get("status") {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64().map_or(false, |n| n != 0),
        Some(Value::String(s)) => matches!(s.as_str(), "1" | "true" | "success"),
        Some(_) => false,
    };
    if ok {
        Ok(())
    } else {
        Err(EnvelopeError::Rejected(message_of(body).unwrap_or_else(|| "Request failed".to_string())))
    }
}

pub fn message_of(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}

/// Top-level array of a meta response (`{ status, vendors: [...], products: [...] }`)
pub fn list_field<T: DeserializeOwned>(body: &Value, key: &str) -> Result<Vec<T>, EnvelopeError> {
    ensure_status(body)?;
    match body.get(key) {
        Some(Value::Array(items)) => Ok(serde_json::from_value(Value::Array(items.clone()))?),
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(_) => Err(EnvelopeError::Missing(key.to_string())),
    }
}

/// Record returned by a create/update call, under `key` or `data`
pub fn saved_record<T: DeserializeOwned>(body: &Value, key: &str) -> Result<Option<T>, EnvelopeError> {
    ensure_status(body)?;
    let record = body
        .get(key)
        .filter(|v| v.is_object())
        .or_else(|| body.get("data").filter(|v| v.is_object()));
    match record {
        Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
        None => Ok(None),
    }
}

// ============================================================================
// Page
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::default(),
        }
    }
}

impl<T: DeserializeOwned> Page<T> {
    pub fn from_body(body: &Value) -> Result<Self, EnvelopeError> {
        ensure_status(body)?;
        match body.get("data") {
            Some(Value::Array(items)) => {
                let items: Vec<T> = serde_json::from_value(Value::Array(items.clone()))?;
                let pagination = match body.get("pagination") {
                    Some(p) if p.is_object() => serde_json::from_value(p.clone())?,
                    _ => Pagination {
                        total: items.len() as u32,
                        from: if items.is_empty() { 0 } else { 1 },
                        to: items.len() as u32,
                        ..Pagination::default()
                    },
                };
                Ok(Self { items, pagination })
            }
            Some(paginator @ Value::Object(fields)) => {
                let items = match fields.get("data") {
                    Some(Value::Array(items)) => serde_json::from_value(Value::Array(items.clone()))?,
                    _ => Vec::new(),
                };
                let pagination = serde_json::from_value(paginator.clone())?;
                Ok(Self { items, pagination })
            }
            _ => Err(EnvelopeError::Missing("data".to_string())),
        }
    }
}

// ============================================================================
// Validation errors
// ============================================================================

/// Field errors of a 422 response: `{ "errors": { "name": ["The name field is required."] } }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_body(body: &Value) -> Self {
        body.get("errors")
            .and_then(|errors| serde_json::from_value(errors.clone()).ok())
            .unwrap_or_default()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    /// First message of a field, as shown under the control
    pub fn first(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(|m| m.first()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
        name: String,
    }

    #[test]
    fn test_laravel_paginator_shape() {
        let body = json!({
            "status": true,
            "data": {
                "data": [{"id": 1, "name": "Formal"}, {"id": 2, "name": "Casual"}],
                "current_page": 2, "last_page": "3", "total": 22, "per_page": 10, "from": 11, "to": 20
            }
        });
        let page: Page<Row> = Page::from_body(&body).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.pagination.current_page, 2);
        assert_eq!(page.pagination.last_page, 3);
        assert_eq!(page.pagination.row_number(1), 12);
        assert!(page.pagination.has_prev());
        assert!(page.pagination.has_next());
    }

    #[test]
    fn test_flat_shape_and_defaults() {
        let body = json!({
            "status": 1,
            "data": [{"id": 5, "name": "Mens Top"}],
            "pagination": {"total": 1, "from": null}
        });
        let page: Page<Row> = Page::from_body(&body).unwrap();
        assert_eq!(page.items, vec![Row { id: 5, name: "Mens Top".into() }]);
        assert_eq!(
            page.pagination,
            Pagination {
                total: 1,
                ..Pagination::default()
            }
        );

        let bare = json!({"data": []});
        let page: Page<Row> = Page::from_body(&bare).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.pagination, Pagination::default());
    }

    #[test]
    fn test_rejected_status_carries_message() {
        let body = json!({"status": false, "message": "Unauthorized"});
        let err = Page::<Row>::from_body(&body).unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized");
        assert!(list_field::<Row>(&body, "vendors").is_err());
    }

    #[test]
    fn test_saved_record_prefers_named_key() {
        let body = json!({"status": true, "message": "Saved", "deal": {"id": 9, "name": "Asha"}});
        let row: Option<Row> = saved_record(&body, "deal").unwrap();
        assert_eq!(row, Some(Row { id: 9, name: "Asha".into() }));

        let body = json!({"status": true, "data": {"id": 3, "name": "Kiran"}});
        let row: Option<Row> = saved_record(&body, "designer").unwrap();
        assert_eq!(row.map(|r| r.id), Some(3));

        let body = json!({"status": true});
        assert_eq!(saved_record::<Row>(&body, "deal").unwrap(), None);
    }

    #[test]
    fn test_validation_errors_first_message() {
        let body = json!({"message": "invalid", "errors": {"name": ["Required", "Too short"], "price": ["Numeric"]}});
        let errors = ValidationErrors::from_body(&body);
        assert_eq!(errors.first("name"), Some("Required"));
        assert_eq!(errors.first("title"), None);
        assert!(ValidationErrors::from_body(&json!({})).is_empty());
    }

    #[test]
    fn test_list_query_search_resets_page() {
        let query = ListQuery::default().with_page(4).with_search("gown");
        assert_eq!(query.page, 1);
        assert_eq!(query.search, "gown");
        assert_eq!(ListQuery::meta().per_page, META_PER_PAGE);
    }

    #[test]
    fn test_list_query_filters_flatten_and_drop_blanks() {
        let filters = BTreeMap::from([
            ("vendor_type".to_string(), "2".to_string()),
            ("approval_status".to_string(), " ".to_string()),
        ]);
        let query = ListQuery::default().with_page(3).with_filters(filters);
        assert_eq!(query.page, 1);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"page": 1, "search": "", "per_page": DEFAULT_PER_PAGE, "vendor_type": "2"})
        );
    }
}
