//! Форма спотлайта: продавец (имя магазина следует за выбором), текст, цена и два изображения

use super::aggregate::Spotlight;
use crate::domain::a005_vendor::Vendor;
use crate::shared::attachment::{AttachmentDraft, AttachmentError, ImageRules, ImageSlot};
use crate::shared::dependent_selection::{
    DependentSelectionResolver, Hierarchy, HydrationRecord, SelectOption, SelectionError, TierSpec,
};
use crate::shared::form_draft::FormDraft;
use crate::shared::list::ValidationErrors;
use crate::shared::validation::{FieldChecks, ValidationRules};

pub const VENDOR: &str = "vendor";

/// Фон хранится в `FormDraft::attachment`, логотип в `SpotlightFields::logo`
pub const BACKGROUND_FIELD: &str = "img_path";
pub const LOGO_FIELD: &str = "brand_logo";
pub const IMAGE_RULES: ImageRules = ImageRules::SPOTLIGHT;

const PRICE_RULES: ValidationRules = ValidationRules::required().at_least(0.0);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpotlightFields {
    pub shop_name: String,
    pub title: String,
    pub price: String,
    pub logo: ImageSlot,
}

pub type SpotlightForm = FormDraft<SpotlightFields>;

pub fn hierarchy() -> Hierarchy {
    Hierarchy::new(vec![TierSpec::root(VENDOR).payload_key("shop_id")]).expect("spotlight hierarchy is static")
}

pub fn new_form() -> SpotlightForm {
    FormDraft::new(DependentSelectionResolver::new(hierarchy()))
}

/// Продавцы показываются по названию магазина
pub fn load_vendors(form: &mut SpotlightForm, vendors: &[Vendor]) -> Result<(), SelectionError> {
    let options = vendors
        .iter()
        .map(|v| SelectOption::new(v.id, v.shop_name.clone().unwrap_or_default()))
        .collect();
    form.resolver.load_options(VENDOR, options)?;
    form.resume_hydration();
    Ok(())
}

pub fn select_vendor(form: &mut SpotlightForm, raw: &str) -> Result<(), SelectionError> {
    form.resolver.select_input(VENDOR, raw)?;
    form.fields.shop_name = form.resolver.selected_label(VENDOR).unwrap_or_default().to_string();
    Ok(())
}

pub fn begin_edit(form: &mut SpotlightForm, item: &Spotlight) {
    let fields = SpotlightFields {
        shop_name: item.shop_name.clone(),
        title: item.title.clone(),
        price: item.price.clone(),
        logo: ImageSlot::stored(item.brand_logo.clone()),
    };
    let record = HydrationRecord::new().with_optional_id(VENDOR, item.shop_id);
    let report = form.begin_edit(item.id, fields, &record, item.background_image.clone());
    if !report.is_complete() {
        log::warn!("spotlight {}: shop {:?} is not in the list", item.id, item.shop_id);
    }
}

pub fn set_logo(form: &mut SpotlightForm, draft: AttachmentDraft) -> Result<(), AttachmentError> {
    form.fields.logo.set(draft, &IMAGE_RULES)
}

pub fn reject_logo(form: &mut SpotlightForm, err: &AttachmentError) {
    form.fields.logo.reject(err);
}

/// Текстовые поля multipart-запроса в порядке формы
pub fn form_fields(form: &SpotlightForm) -> Result<Vec<(String, String)>, ValidationErrors> {
    FieldChecks::new()
        .tiers(&form.resolver, &[(VENDOR, "shop_id", "shop")])
        .text("title", "title", &form.fields.title, ValidationRules::required().max_length(255))
        .number("price", "price", &form.fields.price, PRICE_RULES)
        .finish()?;

    Ok(vec![
        (
            "shop_id".to_string(),
            form.resolver.selected(VENDOR).map(ToString::to_string).unwrap_or_default(),
        ),
        ("shop_name".to_string(), form.fields.shop_name.clone()),
        ("price".to_string(), form.fields.price.trim().to_string()),
        ("title".to_string(), form.fields.title.trim().to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a011_spotlight::SpotlightMeta;
    use serde_json::json;

    fn meta() -> SpotlightMeta {
        serde_json::from_value(json!({
            "vendors": [
                {"id": 8, "username": "kiran01", "shop_name": "Kiran Textiles", "vendor_type": 1},
                {"id": 9, "username": "zoya", "shop_name": "Zoya House", "vendor_type": 1}
            ]
        }))
        .unwrap()
    }

    fn item() -> Spotlight {
        serde_json::from_value(json!({
            "id": 4, "shop_id": 9, "shop_name": "Zoya House", "title": "Wedding season",
            "price": "1499", "background_image": "/spot/4.jpg", "brand_logo": "/logo/9.svg"
        }))
        .unwrap()
    }

    #[test]
    fn test_vendor_choice_fills_shop_name() {
        let mut form = new_form();
        load_vendors(&mut form, &meta().vendors).unwrap();
        select_vendor(&mut form, "8").unwrap();
        form.fields.title = "Handloom week".into();
        form.fields.price = "-1".into();
        let errors = form_fields(&form).unwrap_err();
        assert_eq!(errors.first("price"), Some("The price must be at least 0."));

        form.fields.price = "799".into();
        let fields = form_fields(&form).unwrap();
        assert_eq!(fields[0], ("shop_id".to_string(), "8".to_string()));
        assert_eq!(fields[1], ("shop_name".to_string(), "Kiran Textiles".to_string()));
    }

    #[test]
    fn test_edit_before_vendors_load() {
        let mut form = new_form();
        begin_edit(&mut form, &item());
        assert_eq!(form.resolver.selected(VENDOR), None);
        assert_eq!(form.existing_image.as_deref(), Some("/spot/4.jpg"));
        assert_eq!(form.fields.logo.existing.as_deref(), Some("/logo/9.svg"));

        load_vendors(&mut form, &meta().vendors).unwrap();
        assert_eq!(form.resolver.selected_label(VENDOR), Some("Zoya House"));
        assert_eq!(form_fields(&form).unwrap()[0].1, "9");
    }

    #[test]
    fn test_logo_rules_and_reset() {
        let mut form = new_form();
        begin_edit(&mut form, &item());
        let err = set_logo(&mut form, AttachmentDraft::new("logo.gif", "image/gif", 100)).unwrap_err();
        assert_eq!(form.fields.logo.error, Some(err.to_string()));
        set_logo(&mut form, AttachmentDraft::new("logo.png", "image/png", 100)).unwrap();
        assert!(form.fields.logo.draft.is_some());

        form.reset();
        assert_eq!(form.fields.logo, ImageSlot::default());
    }
}
