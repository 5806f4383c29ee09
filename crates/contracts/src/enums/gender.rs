use crate::shared::dependent_selection::{OptionId, Selectable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Целевая аудитория размерной сетки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Men,
    Women,
    Kids,
    Unisex,
    Others,
}

impl Gender {
    /// Код, который хранит бэкенд ("1".."5")
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Men => "1",
            Gender::Women => "2",
            Gender::Kids => "3",
            Gender::Unisex => "4",
            Gender::Others => "5",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Men => "Men",
            Gender::Women => "Women",
            Gender::Kids => "Kids",
            Gender::Unisex => "Unisex",
            Gender::Others => "Others",
        }
    }

    pub fn all() -> Vec<Gender> {
        vec![
            Gender::Men,
            Gender::Women,
            Gender::Kids,
            Gender::Unisex,
            Gender::Others,
        ]
    }

    /// Парсинг из кода (`"1"`, `" 2 "`)
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|g| g.code() == code.trim())
    }

    /// Подпись для таблицы; неизвестный код → "Unknown"
    pub fn label_for(code: &str) -> &'static str {
        Self::from_code(code).map(|g| g.display_name()).unwrap_or("Unknown")
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Selectable for Gender {
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
    fn test_codes_round_trip() {
        for g in Gender::all() {
            assert_eq!(Gender::from_code(g.code()), Some(g));
        }
        assert_eq!(Gender::from_code("9"), None);
        assert_eq!(Gender::label_for("5"), "Others");
        assert_eq!(Gender::label_for(""), "Unknown");
    }
}
