//! State of an entity form between "open" and "saved".
//!
//! One value holds everything the form edits: free fields, the dependent
//! selection, the picked image and the backend's field errors. All operations
//! are plain methods, so a form can be exercised without any UI.

use super::attachment::{preview_url, AttachmentDraft, AttachmentError, ImageRules};
use super::dependent_selection::{DependentSelectionResolver, HydrationRecord, HydrationReport};
use super::list::ValidationErrors;

#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft<F> {
    /// `Some` while an existing record is edited
    pub editing_id: Option<i64>,
    pub fields: F,
    pub resolver: DependentSelectionResolver,
    /// Newly picked image
    pub attachment: Option<AttachmentDraft>,
    /// Path of the image stored on the backend, shown until replaced
    pub existing_image: Option<String>,
    pub attachment_error: Option<String>,
    pub errors: ValidationErrors,
    /// Edit record whose selection could not be fully restored yet
    pub pending_hydration: Option<HydrationRecord>,
}

impl<F: Default> FormDraft<F> {
    pub fn new(resolver: DependentSelectionResolver) -> Self {
        Self {
            editing_id: None,
            fields: F::default(),
            resolver,
            attachment: None,
            existing_image: None,
            attachment_error: None,
            errors: ValidationErrors::new(),
            pending_hydration: None,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Load a persisted record into the form.
    ///
    /// Tiers that can not be restored stay empty and are listed in the report.
    /// An incomplete record is kept until [`FormDraft::resume_hydration`] runs,
    /// so editing before the option lists arrive does not lose the selection.
    pub fn begin_edit(
        &mut self,
        id: i64,
        fields: F,
        record: &HydrationRecord,
        existing_image: Option<String>,
    ) -> HydrationReport {
        self.reset();
        self.editing_id = Some(id);
        self.fields = fields;
        self.existing_image = existing_image.filter(|p| !p.trim().is_empty());
        let report = self.resolver.hydrate(record);
        if !report.is_complete() {
            self.pending_hydration = Some(record.clone());
        }
        report
    }

    /// Back to an empty "create" form; loaded option lists are kept
    pub fn reset(&mut self) {
        self.editing_id = None;
        self.fields = F::default();
        self.resolver.reset();
        self.attachment = None;
        self.existing_image = None;
        self.attachment_error = None;
        self.errors.clear();
        self.pending_hydration = None;
    }
}

impl<F> FormDraft<F> {
    /// Retry a pending edit hydration after option lists were loaded.
    ///
    /// Runs once per `begin_edit`; `None` when nothing was pending.
    pub fn resume_hydration(&mut self) -> Option<HydrationReport> {
        let record = self.pending_hydration.take()?;
        Some(self.resolver.hydrate(&record))
    }

    pub fn set_errors(&mut self, errors: ValidationErrors) {
        self.errors = errors;
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.first(field)
    }

    /// Accept or reject a picked image; a rejected image clears the previous pick
    pub fn set_attachment(&mut self, draft: AttachmentDraft, rules: &ImageRules) -> Result<(), AttachmentError> {
        match rules.validate(&draft) {
            Ok(()) => {
                self.attachment = Some(draft);
                self.attachment_error = None;
                Ok(())
            }
            Err(err) => {
                self.attachment = None;
                self.attachment_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn reject_attachment(&mut self, err: &AttachmentError) {
        self.attachment = None;
        self.attachment_error = Some(err.to_string());
    }

    /// Preview for the image slot: the new pick, else the stored image under `image_base_url`
    pub fn image_preview(&self, image_base_url: &str) -> Option<String> {
        preview_url(self.attachment.as_ref(), self.existing_image.as_deref(), image_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dependent_selection::{Hierarchy, SelectOption, TierSpec};

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Fields {
        name: String,
    }

    fn draft() -> FormDraft<Fields> {
        let hierarchy = Hierarchy::new(vec![
            TierSpec::root("category_type"),
            TierSpec::child("category", "category_type", "type").payload_key("category_id"),
        ])
        .unwrap();
        let resolver = DependentSelectionResolver::new(hierarchy)
            .with_options("category_type", vec![SelectOption::new(1, "Mens Wear"), SelectOption::new(2, "Women Wear")])
            .unwrap()
            .with_options(
                "category",
                vec![
                    SelectOption::new(7, "Shirts").with_parent(1),
                    SelectOption::new(8, "Kurtis").with_parent(2),
                ],
            )
            .unwrap();
        FormDraft::new(resolver)
    }

    #[test]
    fn test_begin_edit_then_reset() {
        let mut d = draft();
        let record = HydrationRecord::new().with_id("category_type", 2).with_id("category", 8);
        let report = d.begin_edit(
            31,
            Fields { name: "Anarkali".into() },
            &record,
            Some("/uploads/sub/31.png".into()),
        );
        assert!(report.is_complete());
        assert!(d.is_edit_mode());
        assert_eq!(d.resolver.selected_label("category"), Some("Kurtis"));
        assert_eq!(
            d.image_preview("https://cdn.example"),
            Some("https://cdn.example/uploads/sub/31.png".to_string())
        );

        d.reset();
        assert!(!d.is_edit_mode());
        assert_eq!(d.fields, Fields::default());
        assert!(d.resolver.selection().is_empty());
        assert_eq!(d.resolver.all_options("category").len(), 2);
        assert_eq!(d.image_preview("https://cdn.example"), None);
    }

    #[test]
    fn test_edit_before_options_arrive() {
        let hierarchy = Hierarchy::new(vec![
            TierSpec::root("category_type"),
            TierSpec::child("category", "category_type", "type"),
        ])
        .unwrap();
        let mut d: FormDraft<Fields> = FormDraft::new(DependentSelectionResolver::new(hierarchy));
        let record = HydrationRecord::new().with_id("category_type", 2).with_id("category", 8);

        let report = d.begin_edit(31, Fields { name: "Anarkali".into() }, &record, None);
        assert!(!report.is_complete());
        assert!(d.pending_hydration.is_some());

        d.resolver
            .load_options("category_type", vec![SelectOption::new(1, "Mens Wear"), SelectOption::new(2, "Women Wear")])
            .unwrap();
        d.resolver
            .load_options("category", vec![SelectOption::new(8, "Kurtis").with_parent(2)])
            .unwrap();
        let report = d.resume_hydration().unwrap();

        assert!(report.is_complete());
        assert_eq!(d.resolver.selected_label("category"), Some("Kurtis"));
        assert_eq!(d.fields.name, "Anarkali");
        assert!(d.resume_hydration().is_none());
    }

    #[test]
    fn test_reset_drops_pending_hydration() {
        let mut d = draft();
        let record = HydrationRecord::new().with_id("category_type", 2).with_id("category", 99);
        d.begin_edit(31, Fields::default(), &record, None);
        assert!(d.pending_hydration.is_some());
        d.reset();
        assert!(d.pending_hydration.is_none());
        assert!(d.resume_hydration().is_none());
    }

    #[test]
    fn test_rejected_attachment_clears_previous() {
        let mut d = draft();
        let good = AttachmentDraft::new("a.png", "image/png", 10).with_preview("data:image/png;base64,AA");
        d.set_attachment(good, &ImageRules::SUBCATEGORY).unwrap();
        assert_eq!(d.image_preview(""), Some("data:image/png;base64,AA".to_string()));

        let bad = AttachmentDraft::new("a.gif", "image/gif", 10);
        assert!(d.set_attachment(bad, &ImageRules::SUBCATEGORY).is_err());
        assert!(d.attachment.is_none());
        assert_eq!(d.attachment_error.as_deref(), Some("Format must be JPEG or PNG"));
    }

    #[test]
    fn test_field_errors() {
        let mut d = draft();
        let mut errors = ValidationErrors::new();
        errors.insert("name", "The name field is required.");
        d.set_errors(errors);
        assert_eq!(d.field_error("name"), Some("The name field is required."));
        d.reset();
        assert_eq!(d.field_error("name"), None);
    }
}
