use crate::shared::api_client::{get_data, ApiError};
use contracts::domain::a006_product::{MeasureGuide, SizeChart, SizeChartRow};

pub async fn fetch_size_chart(product_id: i64) -> Result<SizeChart, ApiError> {
    let rows: Vec<SizeChartRow> = get_data(&format!("/product-size-details/{}", product_id)).await?;
    Ok(SizeChart::from_rows(rows))
}

pub async fn fetch_measure_guides(product_id: i64) -> Result<Vec<MeasureGuide>, ApiError> {
    get_data(&format!("/product-measurements/{}", product_id)).await
}
