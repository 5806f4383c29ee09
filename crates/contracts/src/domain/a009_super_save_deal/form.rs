//! Форма Super Save: цепочка сделки плюс заголовок, цена и логотип 1118×629

use super::aggregate::SuperSaveDeal;
use crate::domain::common::vendor_product::{self, DealMeta};
use crate::shared::attachment::ImageRules;
use crate::shared::dependent_selection::SelectionError;
use crate::shared::form_draft::FormDraft;
use crate::shared::list::ValidationErrors;
use crate::shared::validation::{FieldChecks, ValidationRules};

pub const IMAGE_FIELD: &str = "brand_logo";
pub const IMAGE_RULES: ImageRules = ImageRules::SUPER_SAVE_BRAND_LOGO;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuperSaveFields {
    pub title: String,
    pub price: String,
}

pub type SuperSaveForm = FormDraft<SuperSaveFields>;

pub fn new_form() -> SuperSaveForm {
    FormDraft::new(vendor_product::new_resolver())
}

/// Списки продавцов и товаров; отложенное редактирование восстанавливается после загрузки
pub fn load_meta(form: &mut SuperSaveForm, meta: &DealMeta) -> Result<(), SelectionError> {
    vendor_product::load_meta(&mut form.resolver, meta)?;
    form.resume_hydration();
    Ok(())
}

pub fn begin_edit(form: &mut SuperSaveForm, item: &SuperSaveDeal) {
    let fields = SuperSaveFields {
        title: item.title.clone(),
        price: item.price.clone(),
    };
    let record = vendor_product::hydration_record(&item.deal_type, &item.name, item.product_id);
    let report = form.begin_edit(item.id, fields, &record, item.brand_logo.clone());
    if !report.is_complete() {
        log::warn!("super save deal {}: vendor '{}' not restored", item.id, item.name);
    }
}

/// Текстовые поля multipart-запроса; логотип добавляет вызывающий код
pub fn form_fields(form: &SuperSaveForm) -> Result<Vec<(String, String)>, ValidationErrors> {
    let selection = vendor_product::deal_selection(&form.resolver);
    let mut checks = FieldChecks::new();
    if let Err(errors) = &selection {
        for (field, messages) in errors.iter() {
            for message in messages {
                checks.push(field, message.clone());
            }
        }
    }
    checks
        .text("title", "title", &form.fields.title, ValidationRules::required().max_length(255))
        .number("price", "price", &form.fields.price, ValidationRules::required().at_least(0.0))
        .finish()?;

    let selection = selection?;
    Ok(vec![
        ("type".to_string(), selection.type_label().to_string()),
        ("name".to_string(), selection.vendor_name),
        ("vendor_id".to_string(), selection.vendor_id.to_string()),
        ("product_id".to_string(), selection.product_id.to_string()),
        ("title".to_string(), form.fields.title.trim().to_string()),
        ("price".to_string(), form.fields.price.trim().to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::vendor_product::{PRODUCT, TYPE, VENDOR};
    use crate::domain::common::{HttpMethod, Resource};
    use crate::shared::attachment::AttachmentDraft;
    use serde_json::json;

    fn loaded() -> SuperSaveForm {
        let meta: DealMeta = serde_json::from_value(json!({
            "vendors": [{"id": 2, "username": "kiran01", "shop_name": "Kiran Textiles", "vendor_type": 1}],
            "products": [{"id": 11, "product_name": "Linen Kurta", "vendor_id": 2}]
        }))
        .unwrap();
        let mut form = new_form();
        load_meta(&mut form, &meta).unwrap();
        form
    }

    #[test]
    fn test_all_errors_reported_together() {
        let form = loaded();
        let errors = form_fields(&form).unwrap_err();
        assert!(errors.first("type").is_some());
        assert!(errors.first("title").is_some());
        assert_eq!(errors.first("price"), Some("The price field is required."));
    }

    #[test]
    fn test_fields_in_form_order() {
        let mut form = loaded();
        form.resolver.select_input(TYPE, "1").unwrap();
        form.resolver.select_input(VENDOR, "2").unwrap();
        form.resolver.select_input(PRODUCT, "11").unwrap();
        form.fields.title = "Festive Sale".into();
        form.fields.price = "999".into();

        let names: Vec<String> = form_fields(&form).unwrap().into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["type", "name", "vendor_id", "product_id", "title", "price"]);
        assert_eq!(SuperSaveDeal::update_route(4).method_override, Some(HttpMethod::Put));
    }

    #[test]
    fn test_edit_restores_and_logo_rules_apply() {
        let mut form = loaded();
        let item: SuperSaveDeal = serde_json::from_value(json!({
            "id": 4, "type": "Shop", "name": "Kiran Textiles", "product_id": 11,
            "title": "Festive Sale", "price": 999, "brand_logo": "/deals/4.png"
        }))
        .unwrap();
        begin_edit(&mut form, &item);
        assert_eq!(form.fields.price, "999");
        assert_eq!(form.resolver.selected_label(PRODUCT), Some("Linen Kurta"));

        let logo = AttachmentDraft::new("logo.png", "image/png", 50_000).with_dimensions(449, 449);
        let err = form.set_attachment(logo, &IMAGE_RULES).unwrap_err();
        assert_eq!(err.to_string(), "Dimensions must be exactly 1118x629");
        assert_eq!(form.existing_image.as_deref(), Some("/deals/4.png"));
    }
}
