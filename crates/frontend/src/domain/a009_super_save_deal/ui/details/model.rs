//! Super Save Deal Details - Model Layer

use crate::shared::api_client::{get_meta, save_route, send_multipart, ApiError, Upload};
use contracts::domain::a009_super_save_deal::form::IMAGE_FIELD;
use contracts::domain::a009_super_save_deal::SuperSaveDeal;
use contracts::domain::common::vendor_product::DealMeta;
use contracts::domain::common::Resource;
use contracts::shared::list::saved_record;
use web_sys::File;

pub async fn fetch_meta() -> Result<DealMeta, ApiError> {
    get_meta(&SuperSaveDeal::meta_path()).await
}

pub async fn save_deal(
    editing_id: Option<i64>,
    fields: Vec<(String, String)>,
    logo: Option<File>,
) -> Result<Option<SuperSaveDeal>, ApiError> {
    let upload = logo.as_ref().map(|file| Upload {
        field: IMAGE_FIELD,
        file,
    });
    let body = send_multipart(&save_route::<SuperSaveDeal>(editing_id), &fields, upload).await?;
    Ok(saved_record(&body, SuperSaveDeal::saved_key())?)
}
