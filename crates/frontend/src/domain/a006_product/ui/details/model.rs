//! Product Details - Model Layer

use crate::shared::api_client::{get_data, get_data_with_query, ApiError};
use contracts::domain::a006_product::{PriceQuery, PriceQuote, ProductDetail};

pub async fn fetch_product(id: i64) -> Result<ProductDetail, ApiError> {
    get_data(&format!("/show/product/{}", id)).await
}

pub async fn fetch_price(query: &PriceQuery) -> Result<PriceQuote, ApiError> {
    get_data_with_query("/get-product-price", query).await
}
