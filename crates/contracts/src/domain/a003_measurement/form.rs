//! Форма мерки: гендер, название, значение для каждого размера и иллюстрация

use super::aggregate::Measurement;
use crate::domain::a010_size::Size;
use crate::enums::Gender;
use crate::shared::attachment::ImageRules;
use crate::shared::dependent_selection::{options_from, DependentSelectionResolver, Hierarchy, HydrationRecord, TierSpec};
use crate::shared::form_draft::FormDraft;
use crate::shared::list::ValidationErrors;
use crate::shared::validation::{FieldChecks, ValidationRules};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const GENDER: &str = "gender";

pub const IMAGE_FIELD: &str = "image";
pub const IMAGE_RULES: ImageRules = ImageRules::MEASUREMENT;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurementFields {
    pub name: String,
    /// Имя размера → значение, как введено
    pub size_values: BTreeMap<String, String>,
}

pub type MeasurementForm = FormDraft<MeasurementFields>;

pub fn hierarchy() -> Hierarchy {
    Hierarchy::new(vec![TierSpec::root(GENDER).payload_key("type")]).expect("measurement hierarchy is static")
}

pub fn new_form() -> MeasurementForm {
    let resolver = DependentSelectionResolver::new(hierarchy())
        .with_options(GENDER, options_from(&Gender::all(), None))
        .expect("gender is a declared tier");
    FormDraft::new(resolver)
}

pub fn begin_edit(form: &mut MeasurementForm, item: &Measurement) {
    let fields = MeasurementFields {
        name: item.name.clone().unwrap_or_default(),
        size_values: item.size_values(),
    };
    let record = HydrationRecord::new().with_optional_id(GENDER, item.gender.as_deref());
    let report = form.begin_edit(item.id, fields, &record, item.image.clone());
    if !report.is_complete() {
        log::warn!("measurement {}: unknown type {:?}", item.id, item.gender);
    }
}

pub fn set_size_value(form: &mut MeasurementForm, size: &str, value: String) {
    form.fields.size_values.insert(size.to_string(), value);
}

/// Размеры без значения, в порядке справочника
pub fn missing_sizes<'a>(form: &MeasurementForm, sizes: &'a [Size]) -> Vec<&'a str> {
    sizes
        .iter()
        .map(|s| s.name.as_str())
        .filter(|name| {
            form.fields
                .size_values
                .get(*name)
                .map_or(true, |v| v.trim().is_empty())
        })
        .collect()
}

/// Текстовые поля multipart-запроса; `size_values` уходит JSON-строкой
pub fn form_fields(form: &MeasurementForm, sizes: &[Size]) -> Result<Vec<(String, String)>, ValidationErrors> {
    let mut checks = FieldChecks::new();
    checks
        .tiers(&form.resolver, &[(GENDER, "type", "type")])
        .text("name", "name", &form.fields.name, ValidationRules::required().max_length(255));

    let missing = missing_sizes(form, sizes);
    if !missing.is_empty() {
        checks.push("size_values", format!("Please provide values for: {}", missing.join(", ")));
    }
    if !form.is_edit_mode() && form.attachment.is_none() {
        checks.push(IMAGE_FIELD, "Please upload an image for the measurement part");
    }
    checks.finish()?;

    let values: Map<String, Value> = form
        .fields
        .size_values
        .iter()
        .map(|(size, value)| (size.clone(), value.trim()))
        .filter(|(_, value)| !value.is_empty())
        .map(|(size, value)| (size, Value::String(value.to_string())))
        .collect();

    Ok(vec![
        ("name".to_string(), form.fields.name.trim().to_string()),
        (
            "type".to_string(),
            form.resolver.selected(GENDER).map(ToString::to_string).unwrap_or_default(),
        ),
        ("size_values".to_string(), Value::Object(values).to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::attachment::AttachmentDraft;
    use serde_json::json;

    fn sizes() -> Vec<Size> {
        serde_json::from_value(json!([{"id": 1, "name": "S"}, {"id": 2, "name": "M"}, {"id": 3, "name": "L"}])).unwrap()
    }

    #[test]
    fn test_create_needs_every_size_and_an_image() {
        let mut form = new_form();
        form.resolver.select_input(GENDER, "1").unwrap();
        form.fields.name = "Chest".into();
        set_size_value(&mut form, "S", "36".into());
        set_size_value(&mut form, "L", " ".into());

        let errors = form_fields(&form, &sizes()).unwrap_err();
        assert_eq!(errors.first("size_values"), Some("Please provide values for: M, L"));
        assert_eq!(errors.first(IMAGE_FIELD), Some("Please upload an image for the measurement part"));

        set_size_value(&mut form, "M", "38".into());
        set_size_value(&mut form, "L", "40".into());
        form.set_attachment(AttachmentDraft::new("chest.png", "image/png", 2048), &IMAGE_RULES)
            .unwrap();
        let fields = form_fields(&form, &sizes()).unwrap();
        assert_eq!(fields[1], ("type".to_string(), "1".to_string()));
        let sent: Value = serde_json::from_str(&fields[2].1).unwrap();
        assert_eq!(sent, json!({"S": "36", "M": "38", "L": "40"}));
    }

    #[test]
    fn test_edit_keeps_stored_image_and_values() {
        let item: Measurement = serde_json::from_value(json!({
            "id": 12, "name": "Waist", "type": "2", "image": "/m/12.png",
            "size_values": "{\"S\":\"26\",\"M\":\"28\",\"L\":\"30\"}"
        }))
        .unwrap();
        let mut form = new_form();
        begin_edit(&mut form, &item);

        assert_eq!(form.resolver.selected_label(GENDER), Some("Women"));
        assert!(missing_sizes(&form, &sizes()).is_empty());
        let fields = form_fields(&form, &sizes()).unwrap();
        assert_eq!(fields[0].1, "Waist");

        form.reset();
        assert!(form.fields.size_values.is_empty());
        assert_eq!(form.resolver.selected(GENDER), None);
    }
}
