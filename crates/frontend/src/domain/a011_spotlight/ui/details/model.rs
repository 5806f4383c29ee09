//! Spotlight Details - Model Layer

use crate::shared::api_client::{get_meta, save_route, send_multipart, ApiError, Upload};
use contracts::domain::a011_spotlight::form::{BACKGROUND_FIELD, LOGO_FIELD};
use contracts::domain::a011_spotlight::{Spotlight, SpotlightMeta};
use contracts::domain::common::Resource;
use contracts::shared::list::saved_record;
use web_sys::File;

pub async fn fetch_meta() -> Result<SpotlightMeta, ApiError> {
    get_meta(&Spotlight::meta_path()).await
}

pub async fn save_spotlight(
    editing_id: Option<i64>,
    fields: Vec<(String, String)>,
    background: Option<File>,
    logo: Option<File>,
) -> Result<Option<Spotlight>, ApiError> {
    let uploads = [(BACKGROUND_FIELD, background.as_ref()), (LOGO_FIELD, logo.as_ref())]
        .into_iter()
        .filter_map(|(field, file)| file.map(|file| Upload { field, file }));
    let body = send_multipart(&save_route::<Spotlight>(editing_id), &fields, uploads).await?;
    Ok(saved_record(&body, Spotlight::saved_key())?)
}
