//! Measurement Mapping Details - Model Layer

use crate::shared::api_client::{fetch_all, save_route, send_json, ApiError};
use contracts::domain::a001_category::Category;
use contracts::domain::a002_subcategory::Subcategory;
use contracts::domain::a003_measurement::Measurement;
use contracts::domain::a004_measurement_mapping::form::MeasurementMappingDto;
use contracts::domain::a004_measurement_mapping::MeasurementMapping;

/// The three lookup tables the form filters
pub struct MappingSources {
    pub categories: Vec<Category>,
    pub subcategories: Vec<Subcategory>,
    pub measurements: Vec<Measurement>,
}

pub async fn fetch_sources() -> Result<MappingSources, ApiError> {
    let categories = fetch_all::<Category>().await?;
    let subcategories = fetch_all::<Subcategory>().await?;
    let measurements = fetch_all::<Measurement>().await?;
    Ok(MappingSources {
        categories,
        subcategories,
        measurements,
    })
}

/// The answer carries no relations, so the list reloads instead of patching
pub async fn save_mapping(editing_id: Option<i64>, dto: &MeasurementMappingDto) -> Result<(), ApiError> {
    send_json(&save_route::<MeasurementMapping>(editing_id), dto)
        .await
        .map(|_| ())
}
