//! Current Deal Details - Model Layer

use crate::shared::api_client::{get_meta, save_route, send_json, ApiError};
use contracts::domain::a008_current_deal::{CurrentDeal, CurrentDealDto};
use contracts::domain::common::vendor_product::DealMeta;
use contracts::domain::common::Resource;
use contracts::shared::list::saved_record;

/// Vendors and products behind the type → vendor → product chain
pub async fn fetch_meta() -> Result<DealMeta, ApiError> {
    get_meta(&CurrentDeal::meta_path()).await
}

pub async fn save_deal(editing_id: Option<i64>, dto: &CurrentDealDto) -> Result<Option<CurrentDeal>, ApiError> {
    let body = send_json(&save_route::<CurrentDeal>(editing_id), dto).await?;
    Ok(saved_record(&body, CurrentDeal::saved_key())?)
}
