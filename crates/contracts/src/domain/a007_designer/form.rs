//! Форма дизайнера: один уровень выбора (продавец), имя подставляется из логина

use super::aggregate::Designer;
use crate::domain::a005_vendor::Vendor;
use crate::shared::attachment::ImageRules;
use crate::shared::dependent_selection::{
    DependentSelectionResolver, Hierarchy, HydrationRecord, OptionId, SelectOption, SelectionError, TierSpec,
};
use crate::shared::form_draft::FormDraft;
use crate::shared::list::ValidationErrors;
use crate::shared::validation::{FieldChecks, ValidationRules};

pub const VENDOR: &str = "vendor";

pub const IMAGE_FIELD: &str = "img_path";
pub const IMAGE_RULES: ImageRules = ImageRules::DESIGNER;

const RATING_RULES: ValidationRules = ValidationRules::required().range(0.0, 5.0);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignerFields {
    /// Заполняется при выборе продавца
    pub name: String,
    pub title: String,
    pub rating: String,
}

pub type DesignerForm = FormDraft<DesignerFields>;

pub fn hierarchy() -> Hierarchy {
    Hierarchy::new(vec![TierSpec::root(VENDOR).payload_key("designer_id")])
        .expect("designer hierarchy is static")
}

pub fn new_form() -> DesignerForm {
    FormDraft::new(DependentSelectionResolver::new(hierarchy()))
}

/// Продавцы показываются по логину
pub fn load_vendors(form: &mut DesignerForm, vendors: &[Vendor]) -> Result<(), SelectionError> {
    let options = vendors
        .iter()
        .map(|v| SelectOption::new(v.id, v.username.clone().unwrap_or_default()))
        .collect();
    form.resolver.load_options(VENDOR, options)?;
    form.resume_hydration();
    Ok(())
}

/// Выбор продавца из выпадающего списка; имя дизайнера следует за выбором
pub fn select_vendor(form: &mut DesignerForm, raw: &str) -> Result<(), SelectionError> {
    form.resolver.select_input(VENDOR, raw)?;
    form.fields.name = form.resolver.selected_label(VENDOR).unwrap_or_default().to_string();
    Ok(())
}

pub fn begin_edit(form: &mut DesignerForm, item: &Designer) {
    let fields = DesignerFields {
        name: item.designer_name.clone(),
        title: item.designer_title.clone(),
        rating: item.designer_rating.clone(),
    };
    let record = HydrationRecord::new().with_optional_id(VENDOR, item.designer_id);
    let report = form.begin_edit(item.id, fields, &record, item.designer_image.clone());
    if !report.is_complete() {
        log::warn!("designer {}: vendor {:?} is not in the list", item.id, item.designer_id);
    }
}

/// Текстовые поля multipart-запроса в порядке формы
pub fn form_fields(form: &DesignerForm) -> Result<Vec<(String, String)>, ValidationErrors> {
    let vendor = form.resolver.selected(VENDOR);
    FieldChecks::new()
        .tiers(&form.resolver, &[(VENDOR, "designer_id", "designer name")])
        .text("designer_title", "designer title", &form.fields.title, ValidationRules::required().max_length(255))
        .number("designer_rating", "designer rating", &form.fields.rating, RATING_RULES)
        .finish()?;

    Ok(vec![
        ("designer_id".to_string(), vendor.map(OptionId::to_string).unwrap_or_default()),
        ("designer_name".to_string(), form.fields.name.clone()),
        ("designer_title".to_string(), form.fields.title.trim().to_string()),
        ("designer_rating".to_string(), form.fields.rating.trim().to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_designer::DesignerMeta;
    use serde_json::json;

    fn loaded() -> DesignerForm {
        let meta: DesignerMeta = serde_json::from_value(json!({
            "vendors": [
                {"id": 7, "username": "asha", "shop_name": "Asha Studio", "vendor_type": 2},
                {"id": 9, "username": "rohan", "vendor_type": 2}
            ]
        }))
        .unwrap();
        let mut form = new_form();
        load_vendors(&mut form, &meta.vendors).unwrap();
        form
    }

    #[test]
    fn test_vendor_choice_fills_name() {
        let mut form = loaded();
        select_vendor(&mut form, "9").unwrap();
        assert_eq!(form.fields.name, "rohan");

        select_vendor(&mut form, "").unwrap();
        assert_eq!(form.fields.name, "");
        assert!(select_vendor(&mut form, "42").is_err());
    }

    #[test]
    fn test_form_fields_validate_rating() {
        let mut form = loaded();
        select_vendor(&mut form, "7").unwrap();
        form.fields.title = "Bridal couture".into();
        form.fields.rating = "5.5".into();
        let errors = form_fields(&form).unwrap_err();
        assert_eq!(
            errors.first("designer_rating"),
            Some("The designer rating may not be greater than 5.")
        );

        form.fields.rating = "4.5".into();
        let fields = form_fields(&form).unwrap();
        assert_eq!(fields[0], ("designer_id".to_string(), "7".to_string()));
        assert_eq!(fields[1], ("designer_name".to_string(), "asha".to_string()));
    }

    #[test]
    fn test_edit_keeps_stored_name() {
        let mut form = loaded();
        let item: Designer = serde_json::from_value(json!({
            "id": 1, "designer_id": 7, "designer_name": "Asha K",
            "designer_title": "Bridal", "designer_rating": "4",
            "designer_image": "/designers/1.png"
        }))
        .unwrap();
        begin_edit(&mut form, &item);
        assert_eq!(form.resolver.selected_label(VENDOR), Some("asha"));
        assert_eq!(form.fields.name, "Asha K");
        assert_eq!(form.existing_image.as_deref(), Some("/designers/1.png"));
    }
}
