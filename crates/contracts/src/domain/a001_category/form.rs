//! Форма категории: тип категории, название и обложка 720x851

use super::aggregate::Category;
use crate::enums::CategoryType;
use crate::shared::attachment::ImageRules;
use crate::shared::dependent_selection::{options_from, DependentSelectionResolver, Hierarchy, HydrationRecord, TierSpec};
use crate::shared::form_draft::FormDraft;
use crate::shared::list::ValidationErrors;
use crate::shared::validation::{FieldChecks, ValidationRules};

pub const CATEGORY_TYPE: &str = "category_type";

pub const IMAGE_FIELD: &str = "img_path";
pub const IMAGE_RULES: ImageRules = ImageRules::CATEGORY;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFields {
    pub name: String,
}

pub type CategoryForm = FormDraft<CategoryFields>;

pub fn hierarchy() -> Hierarchy {
    Hierarchy::new(vec![TierSpec::root(CATEGORY_TYPE)]).expect("category hierarchy is static")
}

pub fn new_form() -> CategoryForm {
    let resolver = DependentSelectionResolver::new(hierarchy())
        .with_options(CATEGORY_TYPE, options_from(&CategoryType::all(), None))
        .expect("category_type is a declared tier");
    FormDraft::new(resolver)
}

/// Тип берётся из `category_type`, а если его нет, из `type`
pub fn begin_edit(form: &mut CategoryForm, item: &Category) {
    let fields = CategoryFields {
        name: item.display_name().to_string(),
    };
    let record = HydrationRecord::new().with_optional_id(CATEGORY_TYPE, item.category_type.as_deref().or(item.kind_code()));
    let report = form.begin_edit(item.id, fields, &record, item.img_path.clone());
    if !report.is_complete() {
        log::warn!("category {}: unknown type {:?}", item.id, item.kind_code());
    }
}

/// Текстовые поля multipart-запроса; файл добавляет вызывающий код
pub fn form_fields(form: &CategoryForm) -> Result<Vec<(String, String)>, ValidationErrors> {
    let mut checks = FieldChecks::new();
    checks
        .tiers(&form.resolver, &[(CATEGORY_TYPE, "category_type", "category type")])
        .text("category_name", "category name", &form.fields.name, ValidationRules::required().max_length(255));
    if !form.is_edit_mode() && form.attachment.is_none() {
        checks.push(IMAGE_FIELD, "Please upload a category image");
    }
    checks.finish()?;

    Ok(vec![
        (
            "category_type".to_string(),
            form.resolver.selected(CATEGORY_TYPE).map(ToString::to_string).unwrap_or_default(),
        ),
        ("category_name".to_string(), form.fields.name.trim().to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::attachment::AttachmentDraft;
    use crate::shared::dependent_selection::OptionId;
    use serde_json::json;

    #[test]
    fn test_edit_reads_either_type_field() {
        let mut form = new_form();
        let item: Category = serde_json::from_value(json!({
            "id": 5, "category_name": "Sarees", "type": "2", "img_path": "/cat/5.jpg"
        }))
        .unwrap();
        begin_edit(&mut form, &item);
        assert_eq!(form.resolver.selected(CATEGORY_TYPE), Some(&OptionId::from("2")));
        assert_eq!(form.fields.name, "Sarees");
        assert_eq!(form.existing_image.as_deref(), Some("/cat/5.jpg"));
        assert!(form.pending_hydration.is_none());

        assert_eq!(
            form_fields(&form).unwrap(),
            vec![
                ("category_type".to_string(), "2".to_string()),
                ("category_name".to_string(), "Sarees".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let mut form = new_form();
        let errors = form_fields(&form).unwrap_err();
        assert_eq!(errors.first("category_type"), Some("The category type field is required."));
        assert_eq!(errors.first("category_name"), Some("The category name field is required."));
        assert_eq!(errors.first(IMAGE_FIELD), Some("Please upload a category image"));

        form.resolver.select_input(CATEGORY_TYPE, "9").unwrap_err();
        form.resolver.select_input(CATEGORY_TYPE, "4").unwrap();
        form.fields.name = "  Basics ".into();
        let cover = AttachmentDraft::new("basics.png", "image/png", 120_000).with_dimensions(720, 851);
        form.set_attachment(cover, &IMAGE_RULES).unwrap();
        assert_eq!(form_fields(&form).unwrap()[1].1, "Basics");
    }
}
