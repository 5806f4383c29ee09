//! Форма подкатегории: тип категории → категория

use super::aggregate::Subcategory;
use crate::domain::a001_category::Category;
use crate::enums::CategoryType;
use crate::shared::attachment::ImageRules;
use crate::shared::dependent_selection::{
    options_from, DependentSelectionResolver, Hierarchy, HydrationRecord, SelectionError, TierSpec,
};
use crate::shared::form_draft::FormDraft;
use crate::shared::list::ValidationErrors;
use crate::shared::validation::{FieldChecks, ValidationRules};

pub const CATEGORY_TYPE: &str = "category_type";
pub const CATEGORY: &str = "category";

/// Поле multipart-формы с файлом
pub const IMAGE_FIELD: &str = "img_path";
pub const IMAGE_RULES: ImageRules = ImageRules::SUBCATEGORY;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubcategoryFields {
    pub name: String,
}

pub type SubcategoryForm = FormDraft<SubcategoryFields>;

pub fn hierarchy() -> Hierarchy {
    Hierarchy::new(vec![
        TierSpec::root(CATEGORY_TYPE),
        TierSpec::child(CATEGORY, CATEGORY_TYPE, "type").payload_key("category_id"),
    ])
    .expect("subcategory hierarchy is static")
}

pub fn new_form() -> SubcategoryForm {
    let resolver = DependentSelectionResolver::new(hierarchy())
        .with_options(CATEGORY_TYPE, options_from(&CategoryType::all(), None))
        .expect("category_type is a declared tier");
    FormDraft::new(resolver)
}

/// Список категорий из `/subcategories/meta`
pub fn load_categories(form: &mut SubcategoryForm, categories: &[Category]) -> Result<(), SelectionError> {
    form.resolver
        .load_options(CATEGORY, options_from(categories, Some("type")))?;
    form.resume_hydration();
    Ok(())
}

pub fn hydration_record(item: &Subcategory) -> HydrationRecord {
    HydrationRecord::new()
        .with_optional_id(CATEGORY_TYPE, item.category_type_code())
        .with_optional_id(CATEGORY, item.category_id)
}

pub fn begin_edit(form: &mut SubcategoryForm, item: &Subcategory) {
    let fields = SubcategoryFields {
        name: item.name.clone(),
    };
    let report = form.begin_edit(item.id, fields, &hydration_record(item), item.img_path.clone());
    if !report.is_complete() {
        log::warn!("subcategory {}: selection restored partially", item.id);
    }
}

/// Текстовые поля multipart-запроса; файл добавляет вызывающий код
pub fn form_fields(form: &SubcategoryForm) -> Result<Vec<(String, String)>, ValidationErrors> {
    let resolver = &form.resolver;
    FieldChecks::new()
        .tiers(resolver, &[(CATEGORY_TYPE, "category_type", "category type"), (CATEGORY, "category_id", "category")])
        .text("name", "name", &form.fields.name, ValidationRules::required().max_length(255))
        .finish()?;

    let selected = |tier: &str| resolver.selected(tier).map(ToString::to_string).unwrap_or_default();
    Ok(vec![
        ("category_type".to_string(), selected(CATEGORY_TYPE)),
        ("category_id".to_string(), selected(CATEGORY)),
        ("name".to_string(), form.fields.name.trim().to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dependent_selection::OptionId;
    use serde_json::json;

    fn categories() -> Vec<Category> {
        serde_json::from_value(json!([
            {"id": 1, "name": "Shirts", "type": 1},
            {"id": 2, "category_name": "Kurtis", "category_type": "2"},
            {"id": 3, "name": "Kids Tees", "type": "3"}
        ]))
        .unwrap()
    }

    #[test]
    fn test_category_type_filters_categories() {
        let mut form = new_form();
        load_categories(&mut form, &categories()).unwrap();
        assert!(form.resolver.is_locked(CATEGORY));

        form.resolver.select_input(CATEGORY_TYPE, "2").unwrap();
        let names: Vec<&str> = form.resolver.get_options(CATEGORY).iter().map(|o| o.label.as_str()).collect();
        assert_eq!(names, vec!["Kurtis"]);

        form.resolver.select(CATEGORY, 2).unwrap();
        form.resolver.select_input(CATEGORY_TYPE, "1").unwrap();
        assert_eq!(form.resolver.selected(CATEGORY), None);
    }

    #[test]
    fn test_edit_restores_type_from_category_relation() {
        let mut form = new_form();
        load_categories(&mut form, &categories()).unwrap();
        let item: Subcategory = serde_json::from_value(json!({
            "id": 40, "name": "Anarkali", "category_id": "2", "category_type": null,
            "img_path": "/sub/40.png",
            "category": {"id": 2, "category_name": "Kurtis", "category_type": 2}
        }))
        .unwrap();

        begin_edit(&mut form, &item);
        assert_eq!(form.editing_id, Some(40));
        assert_eq!(form.resolver.selected(CATEGORY_TYPE), Some(&OptionId::from("2")));
        assert_eq!(form.resolver.selected(CATEGORY), Some(&OptionId::from(2)));

        let fields = form_fields(&form).unwrap();
        assert_eq!(
            fields,
            vec![
                ("category_type".to_string(), "2".to_string()),
                ("category_id".to_string(), "2".to_string()),
                ("name".to_string(), "Anarkali".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_selection_is_a_field_error() {
        let form = new_form();
        let errors = form_fields(&form).unwrap_err();
        assert_eq!(errors.first("category_type"), Some("The category type field is required."));
        assert_eq!(errors.first("category_id"), Some("The category field is required."));
        assert_eq!(errors.first("name"), Some("The name field is required."));
    }

    #[test]
    fn test_saved_record_gets_local_category() {
        let saved: Subcategory =
            serde_json::from_value(json!({"id": 41, "name": "Straight", "category_id": 2})).unwrap();
        let saved = saved.with_category_from(&categories());
        assert_eq!(saved.category_name(), "Kurtis");
        assert_eq!(saved.category_type_code(), Some("2"));
    }
}
