//! Client-side validation rules for form fields
//!
//! The backend validates again and answers 422 with its own messages; these
//! rules only catch what can be caught before a round trip.

use super::dependent_selection::DependentSelectionResolver;
use super::list::ValidationErrors;

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
            max_length: None,
        }
    }

    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub const fn at_least(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("The {} field is required.", field_label));
        }

        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return Err(format!("The {} may not be greater than {} characters.", field_label, max));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("The {} must be at least {}.", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("The {} may not be greater than {}.", field_label, max));
            }
        }

        Ok(())
    }

    /// Text input holding a number; empty is allowed unless required
    pub fn validate_numeric_input(&self, value: &str, field_label: &str) -> Result<(), String> {
        self.validate_string(value, field_label)?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        let number: f64 = trimmed
            .parse()
            .map_err(|_| format!("The {} must be a number.", field_label))?;
        self.validate_number(number, field_label)
    }
}

/// Collects field errors in the same shape the backend returns
#[derive(Debug, Default)]
pub struct FieldChecks {
    errors: ValidationErrors,
}

impl FieldChecks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, field: &str, label: &str, value: &str, rules: ValidationRules) -> &mut Self {
        if let Err(message) = rules.validate_string(value, label) {
            self.errors.insert(field, message);
        }
        self
    }

    pub fn number(&mut self, field: &str, label: &str, value: &str, rules: ValidationRules) -> &mut Self {
        if let Err(message) = rules.validate_numeric_input(value, label) {
            self.errors.insert(field, message);
        }
        self
    }

    /// Required resolver tiers as `(tier, field, label)`; unset ones get a field error
    pub fn tiers(&mut self, resolver: &DependentSelectionResolver, required: &[(&str, &str, &str)]) -> &mut Self {
        let names: Vec<&str> = required.iter().map(|(tier, _, _)| *tier).collect();
        let missing = resolver.missing_required(&names);
        for (tier, field, label) in required {
            if missing.contains(tier) {
                self.errors.insert(field, format!("The {} field is required.", label));
            }
        }
        self
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.errors.insert(field, message);
        self
    }

    pub fn finish(&mut self) -> Result<(), ValidationErrors> {
        let errors = std::mem::take(&mut self.errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dependent_selection::{Hierarchy, SelectOption, TierSpec};

    #[test]
    fn test_required_and_range() {
        let rating = ValidationRules::required().range(0.0, 5.0);
        assert!(rating.validate_numeric_input("4.5", "rating").is_ok());
        assert_eq!(
            rating.validate_numeric_input("", "rating"),
            Err("The rating field is required.".to_string())
        );
        assert_eq!(
            rating.validate_numeric_input("abc", "rating"),
            Err("The rating must be a number.".to_string())
        );
        assert!(rating.validate_numeric_input("5.1", "rating").is_err());
        assert!(ValidationRules::none().validate_numeric_input("", "price").is_ok());
    }

    #[test]
    fn test_field_checks_collect_errors() {
        let hierarchy = Hierarchy::new(vec![
            TierSpec::root("gender"),
            TierSpec::child("category", "gender", "type"),
        ])
        .unwrap();
        let mut resolver = DependentSelectionResolver::new(hierarchy)
            .with_options("gender", vec![SelectOption::new(1, "Men")])
            .unwrap()
            .with_options("category", vec![SelectOption::new(5, "Shirts").with_parent(1)])
            .unwrap();
        resolver.select("gender", "1").unwrap();

        let mut checks = FieldChecks::new();
        let result = checks
            .text("name", "name", " ", ValidationRules::required())
            .tiers(&resolver, &[("gender", "gender", "gender"), ("category", "category_id", "category")])
            .number("price", "price", "99", ValidationRules::required().at_least(0.0))
            .finish();
        let errors = result.unwrap_err();
        assert_eq!(errors.first("name"), Some("The name field is required."));
        assert_eq!(errors.first("category_id"), Some("The category field is required."));
        assert_eq!(errors.first("gender"), None);
        assert_eq!(errors.first("price"), None);
    }
}
