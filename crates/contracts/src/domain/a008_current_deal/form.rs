//! Форма текущей сделки: только цепочка тип → продавец → товар

use super::aggregate::CurrentDeal;
use crate::domain::common::vendor_product::{self, DealMeta};
use crate::shared::dependent_selection::{HydrationReport, SelectionError};
use crate::shared::form_draft::FormDraft;
use crate::shared::list::ValidationErrors;
use serde::{Deserialize, Serialize};

pub type CurrentDealForm = FormDraft<()>;

/// JSON-тело create/update; `vendor_id` дублирует имя надёжным ключом
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentDealDto {
    #[serde(rename = "type")]
    pub deal_type: String,
    pub name: String,
    pub vendor_id: i64,
    pub product_id: i64,
}

pub fn new_form() -> CurrentDealForm {
    FormDraft::new(vendor_product::new_resolver())
}

/// Списки продавцов и товаров; отложенное редактирование восстанавливается после загрузки
pub fn load_meta(form: &mut CurrentDealForm, meta: &DealMeta) -> Result<(), SelectionError> {
    vendor_product::load_meta(&mut form.resolver, meta)?;
    form.resume_hydration();
    Ok(())
}

pub fn begin_edit(form: &mut CurrentDealForm, item: &CurrentDeal) -> HydrationReport {
    let record = vendor_product::hydration_record(&item.deal_type, &item.name, item.product_id);
    let report = form.begin_edit(item.id, (), &record, None);
    if !report.is_complete() {
        log::warn!("current deal {}: vendor '{}' not restored", item.id, item.name);
    }
    report
}

pub fn dto_from_draft(form: &CurrentDealForm) -> Result<CurrentDealDto, ValidationErrors> {
    let selection = vendor_product::deal_selection(&form.resolver)?;
    Ok(CurrentDealDto {
        deal_type: selection.type_label().to_string(),
        name: selection.vendor_name,
        vendor_id: selection.vendor_id,
        product_id: selection.product_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::vendor_product::{PRODUCT, TYPE, VENDOR};
    use serde_json::json;

    fn meta() -> DealMeta {
        serde_json::from_value(json!({
            "vendors": [
                {"id": 1, "username": "asha", "shop_name": "Asha Studio", "vendor_type": 2},
                {"id": 2, "username": "kiran01", "shop_name": "Kiran Textiles", "vendor_type": 1}
            ],
            "products": [
                {"id": 10, "product_name": "Silk Saree", "vendor_id": 1},
                {"id": 11, "product_name": "Linen Kurta", "vendor_id": 2}
            ]
        }))
        .unwrap()
    }

    fn loaded() -> CurrentDealForm {
        let mut form = new_form();
        load_meta(&mut form, &meta()).unwrap();
        form
    }

    #[test]
    fn test_create_body_uses_names() {
        let mut form = loaded();
        form.resolver.select_input(TYPE, "2").unwrap();
        form.resolver.select_input(VENDOR, "1").unwrap();
        form.resolver.select_input(PRODUCT, "10").unwrap();

        let dto = dto_from_draft(&form).unwrap();
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"type": "Designer", "name": "asha", "vendor_id": 1, "product_id": 10})
        );
    }

    #[test]
    fn test_edit_then_change_type_clears_vendor() {
        let mut form = loaded();
        let deal: CurrentDeal = serde_json::from_value(json!({
            "id": 3, "type": "Shop", "name": "Kiran Textiles", "product_id": 11
        }))
        .unwrap();
        assert!(begin_edit(&mut form, &deal).is_complete());
        assert_eq!(dto_from_draft(&form).unwrap().vendor_id, 2);

        form.resolver.select_input(TYPE, "2").unwrap();
        let errors = dto_from_draft(&form).unwrap_err();
        assert!(errors.first("name").is_some());
        assert!(errors.first("product_id").is_some());
    }

    #[test]
    fn test_edit_before_meta_restores_after_load() {
        let mut form = new_form();
        let deal: CurrentDeal = serde_json::from_value(json!({
            "id": 4, "type": "Designer", "name": "asha", "product_id": 10
        }))
        .unwrap();
        assert!(!begin_edit(&mut form, &deal).is_complete());
        assert_eq!(form.resolver.selected(VENDOR), None);

        load_meta(&mut form, &meta()).unwrap();
        assert_eq!(form.resolver.selected_label(VENDOR), Some("asha"));
        assert_eq!(form.resolver.selected_label(PRODUCT), Some("Silk Saree"));
        assert!(form.pending_hydration.is_none());
        assert_eq!(dto_from_draft(&form).unwrap().product_id, 10);
    }
}
