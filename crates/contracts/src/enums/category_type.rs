use crate::shared::dependent_selection::{OptionId, Selectable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Тип категории (линейка одежды)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryType {
    MensWear,
    WomenWear,
    KidsWear,
    UnisexWear,
}

impl CategoryType {
    pub fn code(&self) -> &'static str {
        match self {
            CategoryType::MensWear => "1",
            CategoryType::WomenWear => "2",
            CategoryType::KidsWear => "3",
            CategoryType::UnisexWear => "4",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryType::MensWear => "Mens Wear",
            CategoryType::WomenWear => "Women Wear",
            CategoryType::KidsWear => "Kids Wear",
            CategoryType::UnisexWear => "Unisex Wear",
        }
    }

    pub fn all() -> Vec<CategoryType> {
        vec![
            CategoryType::MensWear,
            CategoryType::WomenWear,
            CategoryType::KidsWear,
            CategoryType::UnisexWear,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code.trim())
    }

    pub fn label_for(code: &str) -> &'static str {
        Self::from_code(code).map(|t| t.display_name()).unwrap_or("N/A")
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Selectable for CategoryType {
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
