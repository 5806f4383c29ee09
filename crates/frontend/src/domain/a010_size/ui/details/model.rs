//! Size Details - Model Layer

use crate::shared::api_client::{save_route, send_json, ApiError};
use contracts::domain::a010_size::{Size, SizeDto};
use contracts::domain::common::Resource;
use contracts::shared::list::saved_record;

pub async fn save_size(editing_id: Option<i64>, dto: SizeDto) -> Result<Option<Size>, ApiError> {
    let body = send_json(&save_route::<Size>(editing_id), &dto).await?;
    Ok(saved_record(&body, Size::saved_key())?)
}
