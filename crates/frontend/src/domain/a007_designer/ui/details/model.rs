//! Designer Details - Model Layer

use crate::shared::api_client::{get_meta, save_route, send_multipart, ApiError, Upload};
use contracts::domain::a005_vendor::Vendor;
use contracts::domain::a007_designer::form::IMAGE_FIELD;
use contracts::domain::a007_designer::{Designer, DesignerMeta};
use contracts::domain::common::Resource;
use contracts::shared::list::saved_record;
use web_sys::File;

/// Designer vendors for the name dropdown
pub async fn fetch_vendors() -> Result<Vec<Vendor>, ApiError> {
    let meta: DesignerMeta = get_meta(&Designer::meta_path()).await?;
    Ok(meta.vendors)
}

pub async fn save_designer(
    editing_id: Option<i64>,
    fields: Vec<(String, String)>,
    image: Option<File>,
) -> Result<Option<Designer>, ApiError> {
    let upload = image.as_ref().map(|file| Upload {
        field: IMAGE_FIELD,
        file,
    });
    let body = send_multipart(&save_route::<Designer>(editing_id), &fields, upload).await?;
    Ok(saved_record(&body, Designer::saved_key())?)
}
