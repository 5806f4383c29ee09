use crate::shared::serde_utils::{lenient_bool, lenient_f64, lenient_opt_f64, lenient_opt_i64};
use serde::{Deserialize, Serialize};

/// Параметры `/get-product-price`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuery {
    pub product_id: i64,
    pub material_id: i64,
    pub size: String,
}

/// Ответ `/get-product-price`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub actual_price: f64,

    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub discount_price: Option<f64>,

    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub qty: Option<i64>,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_out_stock: bool,
}

/// Что показывает карточка после выбора варианта
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceDetails {
    pub price: f64,
    /// Зачёркнутая цена, если есть скидка
    pub old_price: Option<f64>,
    pub qty: i64,
    pub out_of_stock: bool,
}

impl From<PriceQuote> for PriceDetails {
    fn from(quote: PriceQuote) -> Self {
        let discount = quote.discount_price.filter(|d| *d > 0.0);
        let qty = quote.qty.unwrap_or(0);
        Self {
            price: discount.unwrap_or(quote.actual_price),
            old_price: discount.map(|_| quote.actual_price),
            qty,
            out_of_stock: quote.is_out_stock || qty <= 0,
        }
    }
}

/// Цена в рупиях без лишних нулей: 1499 → "₹1499", 1499.5 → "₹1499.50"
pub fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("₹{}", value as i64)
    } else {
        format!("₹{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn quote(value: serde_json::Value) -> PriceDetails {
        serde_json::from_value::<PriceQuote>(value).unwrap().into()
    }

    #[test]
    fn test_discount_becomes_price() {
        let d = quote(json!({"actual_price": "2499", "discount_price": "1999", "qty": 4, "is_out_stock": "0"}));
        assert_eq!(d.price, 1999.0);
        assert_eq!(d.old_price, Some(2499.0));
        assert!(!d.out_of_stock);

        let d = quote(json!({"actual_price": 2499, "discount_price": null, "qty": "3"}));
        assert_eq!(d.price, 2499.0);
        assert_eq!(d.old_price, None);
        assert_eq!(d.qty, 3);
    }

    #[test]
    fn test_out_of_stock_by_flag_or_quantity() {
        assert!(quote(json!({"actual_price": 10, "qty": 5, "is_out_stock": "1"})).out_of_stock);
        assert!(quote(json!({"actual_price": 10, "qty": 0, "is_out_stock": 0})).out_of_stock);
        assert!(quote(json!({"actual_price": 10})).out_of_stock);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1499.0), "₹1499");
        assert_eq!(format_price(1499.5), "₹1499.50");
    }
}
