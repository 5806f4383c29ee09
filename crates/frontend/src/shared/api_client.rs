//! HTTP client for the admin REST API.
//!
//! Every call returns the decoded JSON body after the `status` flag of the
//! envelope has been checked. 422 answers become [`ApiError::Validation`] so
//! forms can show the messages under their fields.

use super::api_utils::api_url;
use super::config::config;
use super::session::auth_header;
use contracts::domain::common::{HttpMethod, Resource, Route};
use contracts::shared::list::{ensure_status, ApiEnvelope, EnvelopeError, ListQuery, Page, ValidationErrors};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use web_sys::{File, FormData};

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: HTTP {0}")]
    Http(u16),
    #[error("Please correct the highlighted fields")]
    Validation(ValidationErrors),
    #[error("Unexpected response: {0}")]
    Parse(String),
    #[error("{0}")]
    Rejected(String),
}

impl From<EnvelopeError> for ApiError {
    fn from(e: EnvelopeError) -> Self {
        match e {
            EnvelopeError::Rejected(message) => ApiError::Rejected(message),
            other => ApiError::Parse(other.to_string()),
        }
    }
}

impl ApiError {
    /// Field errors of a 422 answer
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            ApiError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Image sent together with the text fields of a multipart form
pub struct Upload<'a> {
    pub field: &'a str,
    pub file: &'a File,
}

fn builder(method: HttpMethod, path: &str) -> RequestBuilder {
    let url = api_url(path);
    let builder = match method {
        HttpMethod::Get => Request::get(&url),
        HttpMethod::Post => Request::post(&url),
        HttpMethod::Put => Request::put(&url),
        HttpMethod::Delete => Request::delete(&url),
    };
    let builder = builder.header("Accept", "application/json");
    match auth_header() {
        Some(token) => builder.header("Authorization", &token),
        None => builder,
    }
}

async fn read_body(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body: Value = if text.trim().is_empty() {
        Value::Null
    } else {
        match serde_json::from_str(&text) {
            Ok(v) => v,
            Err(e) if (200..300).contains(&status) => return Err(ApiError::Parse(e.to_string())),
            Err(_) => Value::Null,
        }
    };

    if status == 422 {
        return Err(ApiError::Validation(ValidationErrors::from_body(&body)));
    }
    if !(200..300).contains(&status) {
        log::warn!("HTTP {}: {}", status, text.chars().take(200).collect::<String>());
        return Err(ApiError::Http(status));
    }
    ensure_status(&body)?;
    Ok(body)
}

async fn send(request: Result<Request, gloo_net::Error>) -> Result<Value, ApiError> {
    let request = request.map_err(|e| ApiError::Parse(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_body(response).await
}

pub async fn get_json(path: &str) -> Result<Value, ApiError> {
    send(builder(HttpMethod::Get, path).build()).await
}

/// Dropdown sources sent as top-level fields next to `status`
pub async fn get_meta<M: DeserializeOwned>(path: &str) -> Result<M, ApiError> {
    let body = get_json(path).await?;
    serde_json::from_value(body).map_err(|e| ApiError::Parse(e.to_string()))
}

fn data_of<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    let envelope: ApiEnvelope<T> = serde_json::from_value(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(envelope.into_data()?)
}

/// Payload of a `{ status, message, data }` answer
pub async fn get_data<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    data_of(get_json(path).await?)
}

pub async fn get_data_with_query<T: DeserializeOwned, Q: Serialize>(path: &str, query: &Q) -> Result<T, ApiError> {
    data_of(get_with_query(path, query).await?)
}

/// `GET path?page=&search=&per_page=`
pub async fn get_with_query<Q: Serialize>(path: &str, query: &Q) -> Result<Value, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Parse(e.to_string()))?;
    get_json(&format!("{}?{}", path, qs)).await
}

pub async fn send_json<B: Serialize>(route: &Route, body: &B) -> Result<Value, ApiError> {
    log::debug!("{} {}", route.method.as_str(), route.path);
    send(builder(route.method, &route.path).json(body)).await
}

/// Multipart body; update routes carry `_method` because files only travel through POST.
///
/// `uploads` is anything iterable, so a single `Option<Upload>` works too.
pub async fn send_multipart<'a>(
    route: &Route,
    fields: &[(String, String)],
    uploads: impl IntoIterator<Item = Upload<'a>>,
) -> Result<Value, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Parse(format!("{:?}", e)))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|e| ApiError::Parse(format!("{:?}", e)))?;
    }
    for upload in uploads {
        form.append_with_blob_and_filename(upload.field, upload.file, &upload.file.name())
            .map_err(|e| ApiError::Parse(format!("{:?}", e)))?;
    }
    if let Some(method) = route.method_override {
        form.append_with_str("_method", method.as_str())
            .map_err(|e| ApiError::Parse(format!("{:?}", e)))?;
    }
    log::debug!("{} {} (multipart)", route.method.as_str(), route.path);
    send(builder(route.method, &route.path).body(form)).await
}

pub async fn delete(route: &Route) -> Result<Value, ApiError> {
    send(builder(route.method, &route.path).build()).await
}

// ============================================================================
// Resource helpers
// ============================================================================

pub async fn fetch_page<T: Resource>(query: &ListQuery) -> Result<Page<T>, ApiError> {
    let body = get_with_query(&T::list_path(), query).await?;
    Ok(Page::from_body(&body)?)
}

/// Whole lookup table in one request
pub async fn fetch_all<T: Resource>() -> Result<Vec<T>, ApiError> {
    let query = ListQuery {
        per_page: config().lists.meta_per_page,
        ..ListQuery::meta()
    };
    Ok(fetch_page::<T>(&query).await?.items)
}

pub async fn delete_record<T: Resource>(id: i64) -> Result<(), ApiError> {
    delete(&T::delete_route(id)).await.map(|_| ())
}

/// Route for create (`editing_id == None`) or update
pub fn save_route<T: Resource>(editing_id: Option<i64>) -> Route {
    match editing_id {
        Some(id) => T::update_route(id),
        None => T::create_route(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_errors_only_for_validation() {
        let body = json!({"errors": {"name": ["The name field is required."]}});
        let err = ApiError::Validation(ValidationErrors::from_body(&body));
        assert_eq!(
            err.field_errors().and_then(|e| e.first("name")),
            Some("The name field is required.")
        );

        assert!(ApiError::Http(500).field_errors().is_none());
        assert!(ApiError::Rejected("Vendor is banned".into()).field_errors().is_none());
    }

    #[test]
    fn test_rejected_envelope_keeps_backend_message() {
        let err = ApiError::from(EnvelopeError::Rejected("Deal already exists".into()));
        assert_eq!(err.to_string(), "Deal already exists");

        let err = ApiError::from(EnvelopeError::Missing("data".into()));
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
