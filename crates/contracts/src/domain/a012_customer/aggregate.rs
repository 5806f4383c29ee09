use crate::domain::common::Resource;
use crate::shared::local_patch::HasId;
use crate::shared::serde_utils::{lenient_bool, lenient_i64, lenient_opt_string, lenient_string};
use serde::{Deserialize, Serialize};

/// Покупатель; в бэк-офисе только просматривается
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient_string")]
    pub username: String,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub mobile: Option<String>,

    /// Относительный путь или полный URL (аватар из соцсети)
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub img_path: Option<String>,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_banned: bool,
}

impl Customer {
    pub fn initials(&self) -> String {
        self.username.chars().take(2).collect::<String>().to_uppercase()
    }
}

impl HasId for Customer {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Customer {
    fn entity_index() -> &'static str {
        "a012"
    }

    fn collection_name() -> &'static str {
        "user"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }

    fn saved_key() -> &'static str {
        "user"
    }

    fn list_path() -> String {
        "/user/list".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_row() {
        let c: Customer = serde_json::from_value(json!({
            "id": "31", "username": "priya", "email": "p@example.com", "mobile": 9000000001u64,
            "img_path": null, "is_banned": "0"
        }))
        .unwrap();
        assert_eq!(c.id, 31);
        assert_eq!(c.mobile.as_deref(), Some("9000000001"));
        assert!(!c.is_banned);
        assert_eq!(c.initials(), "PR");
        assert_eq!(Customer::list_path(), "/user/list");
    }
}
