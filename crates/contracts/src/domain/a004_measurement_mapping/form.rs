//! Форма привязки мерок.
//!
//! Гендер фильтрует категории и мерки, категория фильтрует подкатегории.
//! Подкатегории и мерки выбираются флажками.

use super::aggregate::MeasurementMapping;
use crate::domain::a001_category::Category;
use crate::domain::a002_subcategory::Subcategory;
use crate::domain::a003_measurement::Measurement;
use crate::enums::Gender;
use crate::shared::dependent_selection::{
    options_from, DependentSelectionResolver, Hierarchy, HydrationRecord, HydrationReport, OptionId,
    SelectionError, TierSpec,
};
use crate::shared::form_draft::FormDraft;
use crate::shared::list::ValidationErrors;
use crate::shared::validation::{FieldChecks, ValidationRules};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GENDER: &str = "gender";
pub const CATEGORY: &str = "category";
pub const SUBCATEGORIES: &str = "subcategories";
pub const MEASUREMENTS: &str = "measurements";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingFields {
    pub name: String,
}

pub type MappingForm = FormDraft<MappingFields>;

/// Тело запроса `/measurement-mappings/store` и `/update/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementMappingDto {
    pub name: String,
    pub category_id: i64,
    pub subcategory_ids: Vec<i64>,
    pub gender: String,
    pub measurement_ids: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingFormError {
    #[error("Please fill in the required fields")]
    Fields(ValidationErrors),
    #[error("Please select at least one subcategory and one measurement")]
    EmptySelection,
}

pub fn hierarchy() -> Hierarchy {
    Hierarchy::new(vec![
        TierSpec::root(GENDER),
        TierSpec::child(CATEGORY, GENDER, "type").payload_key("category_id"),
        TierSpec::child(SUBCATEGORIES, CATEGORY, "category_id")
            .multi()
            .payload_key("subcategory_ids"),
        TierSpec::child(MEASUREMENTS, GENDER, "type")
            .multi()
            .payload_key("measurement_ids"),
    ])
    .expect("measurement mapping hierarchy is static")
}

pub fn new_form() -> MappingForm {
    let resolver = DependentSelectionResolver::new(hierarchy())
        .with_options(GENDER, options_from(&Gender::all(), None))
        .expect("gender is a declared tier");
    FormDraft::new(resolver)
}

/// Полные списки справочников (загружаются с `per_page=1000`)
pub fn load_sources(
    form: &mut MappingForm,
    categories: &[Category],
    subcategories: &[Subcategory],
    measurements: &[Measurement],
) -> Result<(), SelectionError> {
    form.resolver.load_options(CATEGORY, options_from(categories, Some("type")))?;
    form.resolver
        .load_options(SUBCATEGORIES, options_from(subcategories, Some("category_id")))?;
    form.resolver
        .load_options(MEASUREMENTS, options_from(measurements, Some("type")))?;
    form.resume_hydration();
    Ok(())
}

pub fn hydration_record(item: &MeasurementMapping) -> HydrationRecord {
    HydrationRecord::new()
        .with_optional_id(GENDER, item.gender.as_deref())
        .with_optional_id(CATEGORY, item.category_id)
        .with_ids(SUBCATEGORIES, item.subcategory_ids())
        .with_ids(MEASUREMENTS, item.measurement_ids())
}

pub fn begin_edit(form: &mut MappingForm, item: &MeasurementMapping) -> HydrationReport {
    let fields = MappingFields {
        name: item.name.clone(),
    };
    form.begin_edit(item.id, fields, &hydration_record(item), None)
}

fn ids(list: Vec<OptionId>) -> Vec<i64> {
    list.iter().filter_map(OptionId::as_i64).collect()
}

pub fn dto_from_draft(form: &MappingForm) -> Result<MeasurementMappingDto, MappingFormError> {
    let resolver = &form.resolver;
    FieldChecks::new()
        .text("name", "name", &form.fields.name, ValidationRules::required().max_length(255))
        .tiers(resolver, &[(GENDER, "gender", "gender"), (CATEGORY, "category_id", "category")])
        .finish()
        .map_err(MappingFormError::Fields)?;

    let subcategory_ids = ids(resolver.selected_ids(SUBCATEGORIES));
    let measurement_ids = ids(resolver.selected_ids(MEASUREMENTS));
    if subcategory_ids.is_empty() || measurement_ids.is_empty() {
        return Err(MappingFormError::EmptySelection);
    }

    let category_id = resolver.selected(CATEGORY).and_then(OptionId::as_i64).ok_or_else(|| {
        let mut errors = ValidationErrors::new();
        errors.insert("category_id", "The category field is required.");
        MappingFormError::Fields(errors)
    })?;

    Ok(MeasurementMappingDto {
        name: form.fields.name.trim().to_string(),
        category_id,
        subcategory_ids,
        gender: resolver.selected(GENDER).map(ToString::to_string).unwrap_or_default(),
        measurement_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loaded_form() -> MappingForm {
        let categories: Vec<Category> = serde_json::from_value(json!([
            {"id": 1, "name": "Shirts", "type": "1"},
            {"id": 2, "name": "Dresses", "type": "2"}
        ]))
        .unwrap();
        let subcategories: Vec<Subcategory> = serde_json::from_value(json!([
            {"id": 10, "name": "Formal", "category_id": 1},
            {"id": 11, "name": "Casual", "category_id": 1},
            {"id": 12, "name": "Gown", "category_id": 2}
        ]))
        .unwrap();
        let measurements: Vec<Measurement> = serde_json::from_value(json!([
            {"id": 100, "name": "Chest", "type": 1},
            {"id": 101, "name": "Waist", "type": "1"},
            {"id": 102, "part_name": "Bust", "type": 2}
        ]))
        .unwrap();
        let mut form = new_form();
        load_sources(&mut form, &categories, &subcategories, &measurements).unwrap();
        form
    }

    fn labels(form: &MappingForm, tier: &str) -> Vec<String> {
        form.resolver.get_options(tier).iter().map(|o| o.label.clone()).collect()
    }

    #[test]
    fn test_gender_drives_categories_and_measurements() {
        let mut form = loaded_form();
        form.resolver.select(GENDER, "1").unwrap();
        assert_eq!(labels(&form, CATEGORY), vec!["Shirts"]);
        assert_eq!(labels(&form, MEASUREMENTS), vec!["Chest", "Waist"]);
        assert!(labels(&form, SUBCATEGORIES).is_empty());

        form.resolver.select(CATEGORY, 1).unwrap();
        form.resolver.toggle_multi_select(SUBCATEGORIES, 10).unwrap();
        form.resolver.toggle_multi_select(MEASUREMENTS, 101).unwrap();

        form.resolver.select(GENDER, "2").unwrap();
        assert!(form.resolver.selected(CATEGORY).is_none());
        assert!(form.resolver.selected_ids(SUBCATEGORIES).is_empty());
        assert!(form.resolver.selected_ids(MEASUREMENTS).is_empty());
        assert_eq!(labels(&form, MEASUREMENTS), vec!["Bust"]);
    }

    #[test]
    fn test_measurement_toggle_keeps_subcategories() {
        let mut form = loaded_form();
        form.resolver.select(GENDER, "1").unwrap();
        form.resolver.select(CATEGORY, 1).unwrap();
        form.resolver.toggle_multi_select(SUBCATEGORIES, 11).unwrap();

        assert!(form.resolver.toggle_multi_select(MEASUREMENTS, 100).unwrap());
        assert!(!form.resolver.toggle_multi_select(MEASUREMENTS, 100).unwrap());
        assert_eq!(form.resolver.selected_ids(SUBCATEGORIES), vec![OptionId::from(11)]);
    }

    #[test]
    fn test_dto_requires_both_multi_selections() {
        let mut form = loaded_form();
        form.fields.name = "Mens Casual Top Wear".into();
        form.resolver.select(GENDER, "1").unwrap();
        form.resolver.select(CATEGORY, 1).unwrap();
        form.resolver.toggle_multi_select(SUBCATEGORIES, 11).unwrap();
        form.resolver.toggle_multi_select(SUBCATEGORIES, 10).unwrap();

        let err = dto_from_draft(&form).unwrap_err();
        assert_eq!(err.to_string(), "Please select at least one subcategory and one measurement");

        form.resolver.toggle_multi_select(MEASUREMENTS, 100).unwrap();
        let dto = dto_from_draft(&form).unwrap();
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "name": "Mens Casual Top Wear",
                "category_id": 1,
                "subcategory_ids": [10, 11],
                "gender": "1",
                "measurement_ids": [100]
            })
        );
    }

    #[test]
    fn test_dto_reports_missing_fields() {
        let form = loaded_form();
        match dto_from_draft(&form) {
            Err(MappingFormError::Fields(errors)) => {
                assert!(errors.first("name").is_some());
                assert!(errors.first("gender").is_some());
                assert!(errors.first("category_id").is_some());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_edit_restores_full_selection() {
        let mut form = loaded_form();
        let item: MeasurementMapping = serde_json::from_value(json!({
            "id": 8, "name": "Mens Shirts", "category_id": 1, "gender": "1",
            "subcategories": [{"id": 10}, {"id": 11}],
            "measurements": [{"id": 100}, {"id": 102}]
        }))
        .unwrap();

        let report = begin_edit(&mut form, &item);
        assert_eq!(form.fields.name, "Mens Shirts");
        assert_eq!(form.resolver.selected_ids(SUBCATEGORIES).len(), 2);
        // "Bust" belongs to another gender
        assert_eq!(form.resolver.selected_ids(MEASUREMENTS), vec![OptionId::from(100)]);
        assert!(report.missed(MEASUREMENTS));
        assert!(!report.missed(SUBCATEGORIES));
    }
}
