//! Category Details - Model Layer

use crate::shared::api_client::{save_route, send_multipart, ApiError, Upload};
use contracts::domain::a001_category::form::IMAGE_FIELD;
use contracts::domain::a001_category::Category;
use contracts::domain::common::Resource;
use contracts::shared::list::saved_record;
use web_sys::File;

pub async fn save_category(
    editing_id: Option<i64>,
    fields: Vec<(String, String)>,
    image: Option<File>,
) -> Result<Option<Category>, ApiError> {
    let upload = image.as_ref().map(|file| Upload {
        field: IMAGE_FIELD,
        file,
    });
    let body = send_multipart(&save_route::<Category>(editing_id), &fields, upload).await?;
    Ok(saved_record(&body, Category::saved_key())?)
}
