//! Subcategory Details - Model Layer

use crate::shared::api_client::{get_json, save_route, send_multipart, ApiError, Upload};
use contracts::domain::a001_category::Category;
use contracts::domain::a002_subcategory::form::IMAGE_FIELD;
use contracts::domain::a002_subcategory::Subcategory;
use contracts::domain::common::Resource;
use contracts::shared::list::{list_field, saved_record};
use web_sys::File;

/// Categories for the category dropdown (`{ status, categories: [...] }`)
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    let body = get_json(&Subcategory::meta_path()).await?;
    Ok(list_field(&body, "categories")?)
}

/// Create or update; `None` when the backend answers without the record
pub async fn save_subcategory(
    editing_id: Option<i64>,
    fields: Vec<(String, String)>,
    image: Option<File>,
) -> Result<Option<Subcategory>, ApiError> {
    let upload = image.as_ref().map(|file| Upload {
        field: IMAGE_FIELD,
        file,
    });
    let body = send_multipart(&save_route::<Subcategory>(editing_id), &fields, upload).await?;
    Ok(saved_record(&body, Subcategory::saved_key())?)
}
