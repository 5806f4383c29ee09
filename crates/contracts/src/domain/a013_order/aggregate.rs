use crate::domain::common::Resource;
use crate::shared::local_patch::HasId;
use crate::shared::serde_utils::{lenient_f64, lenient_i64, lenient_opt_string, lenient_string, lenient_u32, null_as_default};
use serde::{Deserialize, Serialize};

/// Покупатель в строке заказа
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderCustomer {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub avatar: Option<String>,
}

/// Заказ; в бэк-офисе только просматривается
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub customer: OrderCustomer,

    /// Способ или статус доставки
    #[serde(default, deserialize_with = "lenient_string")]
    pub delivery: String,

    /// Количество позиций
    #[serde(default, deserialize_with = "lenient_u32")]
    pub items: u32,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub total: f64,

    #[serde(rename = "paymentStatus", alias = "payment_status", default, deserialize_with = "lenient_string")]
    pub payment_status: String,
}

impl Order {
    pub fn is_paid(&self) -> bool {
        self.payment_status.eq_ignore_ascii_case("success")
    }

    /// Сумма с двумя знаками
    pub fn total_label(&self) -> String {
        format!("{:.2}", self.total)
    }
}

impl HasId for Order {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Order {
    fn entity_index() -> &'static str {
        "a013"
    }

    fn collection_name() -> &'static str {
        "orders"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }

    fn saved_key() -> &'static str {
        "order"
    }

    fn list_path() -> String {
        "/orders/list".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_row_in_both_spellings() {
        let camel: Order = serde_json::from_value(json!({
            "id": 1001, "date": "2026-02-14", "customer": {"name": "Priya", "avatar": null},
            "delivery": "Courier", "items": "3", "total": "2599.5", "paymentStatus": "Success"
        }))
        .unwrap();
        assert!(camel.is_paid());
        assert_eq!(camel.items, 3);
        assert_eq!(camel.total_label(), "2599.50");

        let snake: Order = serde_json::from_value(json!({
            "id": 1002, "customer": null, "payment_status": "Pending"
        }))
        .unwrap();
        assert!(!snake.is_paid());
        assert_eq!(snake.customer, OrderCustomer::default());
        assert_eq!(Order::list_path(), "/orders/list");
    }
}
