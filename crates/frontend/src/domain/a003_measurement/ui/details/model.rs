//! Measurement Details - Model Layer

use crate::shared::api_client::{fetch_all, save_route, send_multipart, ApiError, Upload};
use contracts::domain::a003_measurement::form::IMAGE_FIELD;
use contracts::domain::a003_measurement::Measurement;
use contracts::domain::a010_size::Size;
use contracts::domain::common::Resource;
use contracts::shared::list::saved_record;
use web_sys::File;

/// Every size gets a value column in the form
pub async fn fetch_sizes() -> Result<Vec<Size>, ApiError> {
    fetch_all::<Size>().await
}

pub async fn save_measurement(
    editing_id: Option<i64>,
    fields: Vec<(String, String)>,
    image: Option<File>,
) -> Result<Option<Measurement>, ApiError> {
    let upload = image.as_ref().map(|file| Upload {
        field: IMAGE_FIELD,
        file,
    });
    let body = send_multipart(&save_route::<Measurement>(editing_id), &fields, upload).await?;
    Ok(saved_record(&body, Measurement::saved_key())?)
}
