use crate::domain::common::Resource;
use crate::enums::{ApprovalStatus, VendorType};
use crate::shared::dependent_selection::{OptionId, Selectable};
use crate::shared::local_patch::HasId;
use crate::shared::serde_utils::{lenient_bool, lenient_i64, lenient_opt_string};
use serde::{Deserialize, Serialize};

/// Продавец: магазин или дизайнер
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub shop_name: Option<String>,

    /// "1": магазин, "2": дизайнер
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub vendor_type: Option<String>,

    // Поля ниже приходят только в списке `/vendor/list`
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub img_path: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub mobile_no: Option<String>,

    /// "0": на модерации, "1": одобрен, "2": отклонён
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub approval_status: Option<String>,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_banned: bool,
}

impl Vendor {
    pub fn kind(&self) -> Option<VendorType> {
        self.vendor_type.as_deref().and_then(VendorType::from_code)
    }

    /// Имя, под которым продавец показывается и сохраняется в сделках:
    /// логин у дизайнера, название магазина у магазина
    pub fn display_name(&self) -> &str {
        let name = match self.kind() {
            Some(VendorType::Designer) => self.username.as_deref(),
            _ => self.shop_name.as_deref(),
        };
        name.unwrap_or_default()
    }

    /// Без статуса или с неизвестным кодом продавец считается ожидающим модерации
    pub fn approval(&self) -> ApprovalStatus {
        self.approval_status
            .as_deref()
            .and_then(ApprovalStatus::from_code)
            .unwrap_or(ApprovalStatus::Pending)
    }

    /// Две буквы для аватара без картинки
    pub fn initials(&self) -> String {
        self.shop_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or_default()
            .chars()
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

impl HasId for Vendor {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Selectable for Vendor {
    fn option_id(&self) -> OptionId {
        OptionId::from(self.id)
    }

    fn option_label(&self) -> String {
        self.display_name().to_string()
    }

    fn relation_value(&self, field: &str) -> Option<OptionId> {
        match field {
            "vendor_type" => self.vendor_type.as_deref().and_then(OptionId::parse_input),
            _ => None,
        }
    }
}

impl Resource for Vendor {
    fn entity_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "vendor"
    }

    fn element_name() -> &'static str {
        "Vendor"
    }

    fn list_name() -> &'static str {
        "Vendors"
    }

    fn saved_key() -> &'static str {
        "vendor"
    }

    fn list_path() -> String {
        "/vendor/list".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_name_depends_on_type() {
        let designer: Vendor = serde_json::from_value(json!({
            "id": 7, "username": "asha", "shop_name": "Asha Studio", "vendor_type": 2
        }))
        .unwrap();
        let shop: Vendor = serde_json::from_value(json!({
            "id": 8, "username": "kiran01", "shop_name": "Kiran Textiles", "vendor_type": "1"
        }))
        .unwrap();

        assert_eq!(designer.display_name(), "asha");
        assert_eq!(shop.display_name(), "Kiran Textiles");
        assert_eq!(designer.relation_value("vendor_type"), Some(OptionId::from("2")));
    }

    #[test]
    fn test_console_fields() {
        let v: Vendor = serde_json::from_value(json!({
            "id": 11, "username": "meera", "shop_name": "meera looms", "vendor_type": 1,
            "mobile_no": 9876543210u64, "approval_status": 1, "is_banned": "1"
        }))
        .unwrap();
        assert_eq!(v.approval(), ApprovalStatus::Approved);
        assert_eq!(v.mobile_no.as_deref(), Some("9876543210"));
        assert!(v.is_banned);
        assert_eq!(v.initials(), "ME");

        let bare: Vendor = serde_json::from_value(json!({"id": 12})).unwrap();
        assert_eq!(bare.approval(), ApprovalStatus::Pending);
        assert!(!bare.is_banned);
        assert_eq!(Vendor::list_path(), "/vendor/list");
    }
}
