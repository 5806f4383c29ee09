use crate::shared::dependent_selection::{OptionId, Selectable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Тип продавца: магазин или дизайнер
///
/// Записи сделок хранят тип по названию ("Shop" / "Designer"),
/// а продавцы числовым кодом `vendor_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VendorType {
    Shop,
    Designer,
}

impl VendorType {
    pub fn code(&self) -> &'static str {
        match self {
            VendorType::Shop => "1",
            VendorType::Designer => "2",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VendorType::Shop => "Shop",
            VendorType::Designer => "Designer",
        }
    }

    /// Порядок в выпадающем списке
    pub fn all() -> Vec<VendorType> {
        vec![VendorType::Designer, VendorType::Shop]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code.trim())
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|t| t.display_name().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for VendorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Selectable for VendorType {
    fn option_id(&self) -> OptionId {
        OptionId::from(self.code())
    }

    fn option_label(&self) -> String {
        self.display_name().to_string()
    }

    fn relation_value(&self, _field: &str) -> Option<OptionId> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_code_lookups() {
        assert_eq!(VendorType::from_label("Designer"), Some(VendorType::Designer));
        assert_eq!(VendorType::from_label(" shop "), Some(VendorType::Shop));
        assert_eq!(VendorType::from_code("2"), Some(VendorType::Designer));
        assert_eq!(VendorType::from_label("Brand"), None);
    }
}
