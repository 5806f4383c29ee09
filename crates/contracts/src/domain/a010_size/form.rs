//! Форма размера: одно текстовое поле, без зависимого выбора

use super::aggregate::Size;
use crate::shared::list::ValidationErrors;
use crate::shared::validation::{FieldChecks, ValidationRules};
use serde::{Deserialize, Serialize};

/// JSON-тело create/update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeDto {
    pub name: String,
}

pub fn dto_from_name(name: &str) -> Result<SizeDto, ValidationErrors> {
    FieldChecks::new()
        .text("name", "name", name, ValidationRules::required().max_length(50))
        .finish()?;
    Ok(SizeDto {
        name: name.trim().to_string(),
    })
}

/// Есть ли уже размер с таким именем без учёта регистра; редактируемая строка не считается
pub fn is_duplicate(name: &str, sizes: &[Size], editing_id: Option<i64>) -> bool {
    let name = name.trim();
    sizes
        .iter()
        .filter(|s| Some(s.id) != editing_id)
        .any(|s| s.name.trim().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_is_required_and_trimmed() {
        let errors = dto_from_name("   ").unwrap_err();
        assert_eq!(errors.first("name"), Some("The name field is required."));
        assert_eq!(
            serde_json::to_value(dto_from_name(" xl ").unwrap()).unwrap(),
            json!({"name": "xl"})
        );
    }

    #[test]
    fn test_duplicate_ignores_the_edited_row() {
        let sizes: Vec<Size> = serde_json::from_value(json!([{"id": 1, "name": "XL"}, {"id": "2", "name": "M"}])).unwrap();
        assert!(is_duplicate("xl", &sizes, None));
        assert!(!is_duplicate("XL", &sizes, Some(1)));
        assert!(!is_duplicate("S", &sizes, None));
    }
}
