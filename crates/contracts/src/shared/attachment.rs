//! Image attachment rules for upload fields

use serde::{Deserialize, Serialize};
use thiserror::Error;

const MB: u64 = 1024 * 1024;

/// Constraints for an image field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRules {
    /// Accepted MIME types
    pub allowed_types: &'static [&'static str],
    /// Message shown when the type is not accepted
    pub format_message: &'static str,
    pub max_bytes: u64,
    /// Exact `(width, height)` in pixels, when the layout requires it
    pub exact_dimensions: Option<(u32, u32)>,
}

const JPEG_PNG: &[&str] = &["image/jpeg", "image/png", "image/jpg"];
const JPEG_PNG_SVG: &[&str] = &["image/jpeg", "image/png", "image/jpg", "image/svg+xml"];

impl ImageRules {
    /// Designer portrait
    pub const DESIGNER: ImageRules = ImageRules::new(JPEG_PNG_SVG, "Format must be JPEG, PNG or SVG", 2 * MB)
        .with_dimensions(449, 449);

    /// Brand logo of a super-save deal banner
    pub const SUPER_SAVE_BRAND_LOGO: ImageRules =
        ImageRules::new(JPEG_PNG_SVG, "Format must be JPEG, PNG or SVG", 2 * MB).with_dimensions(1118, 629);

    /// Subcategory thumbnail, any size
    pub const SUBCATEGORY: ImageRules = ImageRules::new(JPEG_PNG, "Format must be JPEG or PNG", 2 * MB);

    /// Category cover card
    pub const CATEGORY: ImageRules =
        ImageRules::new(JPEG_PNG, "Format must be JPEG or PNG", 2 * MB).with_dimensions(720, 851);

    /// Illustration of a measurement part
    pub const MEASUREMENT: ImageRules = ImageRules::new(JPEG_PNG_SVG, "Format must be JPEG, PNG or SVG", 2 * MB);

    /// Spotlight background and brand logo
    pub const SPOTLIGHT: ImageRules = ImageRules::new(JPEG_PNG_SVG, "Format must be JPEG, PNG or SVG", 2 * MB);

    pub const fn new(allowed_types: &'static [&'static str], format_message: &'static str, max_bytes: u64) -> Self {
        Self {
            allowed_types,
            format_message,
            max_bytes,
            exact_dimensions: None,
        }
    }

    pub const fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.exact_dimensions = Some((width, height));
        self
    }

    /// Whether the image must be decoded before it can be accepted
    pub const fn needs_dimensions(&self) -> bool {
        self.exact_dimensions.is_some()
    }

    /// Value for the `accept` attribute of the file input
    pub fn accept(&self) -> String {
        self.allowed_types.join(",")
    }

    /// Checks that need only the file metadata
    pub fn check_file(&self, mime_type: &str, size_bytes: u64) -> Result<(), AttachmentError> {
        if !self.allowed_types.iter().any(|t| t.eq_ignore_ascii_case(mime_type.trim())) {
            return Err(AttachmentError::Format(self.format_message));
        }
        if size_bytes > self.max_bytes {
            return Err(AttachmentError::TooLarge { max_bytes: self.max_bytes });
        }
        Ok(())
    }

    pub fn check_dimensions(&self, width: u32, height: u32) -> Result<(), AttachmentError> {
        match self.exact_dimensions {
            Some((w, h)) if (w, h) != (width, height) => Err(AttachmentError::Dimensions {
                width: w,
                height: h,
                actual: (width, height),
            }),
            _ => Ok(()),
        }
    }

    /// Full check of a decoded attachment
    pub fn validate(&self, draft: &AttachmentDraft) -> Result<(), AttachmentError> {
        self.check_file(&draft.mime_type, draft.size_bytes)?;
        match (self.exact_dimensions, draft.dimensions) {
            (Some(_), None) => Err(AttachmentError::Undecoded),
            (_, Some((width, height))) => self.check_dimensions(width, height),
            (None, None) => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    #[error("{0}")]
    Format(&'static str),
    #[error("File size must be under {}MB", .max_bytes / MB)]
    TooLarge { max_bytes: u64 },
    #[error("Dimensions must be exactly {width}x{height}")]
    Dimensions {
        width: u32,
        height: u32,
        actual: (u32, u32),
    },
    #[error("Image could not be read")]
    Undecoded,
}

/// Image picked in the form, not yet uploaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentDraft {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    /// Pixel size, known once the browser has decoded the image
    pub dimensions: Option<(u32, u32)>,
    /// Data/object URL for the preview
    pub preview_url: Option<String>,
}

impl AttachmentDraft {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size_bytes,
            dimensions: None,
            preview_url: None,
        }
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.dimensions = Some((width, height));
        self
    }

    pub fn with_preview(mut self, url: impl Into<String>) -> Self {
        self.preview_url = Some(url.into());
        self
    }
}

/// Preview for an image field: the new pick, else the stored path under `image_base_url`
pub fn preview_url(draft: Option<&AttachmentDraft>, existing: Option<&str>, image_base_url: &str) -> Option<String> {
    if let Some(url) = draft.and_then(|a| a.preview_url.clone()) {
        return Some(url);
    }
    existing.map(|path| {
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
            path.to_string()
        } else {
            format!("{}{}", image_base_url, path)
        }
    })
}

/// Extra image field of a form that already keeps one image in `FormDraft`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSlot {
    pub draft: Option<AttachmentDraft>,
    /// Path stored on the backend
    pub existing: Option<String>,
    pub error: Option<String>,
}

impl ImageSlot {
    pub fn stored(path: Option<String>) -> Self {
        Self {
            existing: path.filter(|p| !p.trim().is_empty()),
            ..Self::default()
        }
    }

    pub fn set(&mut self, draft: AttachmentDraft, rules: &ImageRules) -> Result<(), AttachmentError> {
        match rules.validate(&draft) {
            Ok(()) => {
                self.draft = Some(draft);
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.reject(&err);
                Err(err)
            }
        }
    }

    pub fn reject(&mut self, err: &AttachmentError) {
        self.draft = None;
        self.error = Some(err.to_string());
    }

    pub fn preview(&self, image_base_url: &str) -> Option<String> {
        preview_url(self.draft.as_ref(), self.existing.as_deref(), image_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_designer_image_requires_exact_square() {
        let rules = ImageRules::DESIGNER;
        let ok = AttachmentDraft::new("a.png", "image/png", 300_000).with_dimensions(449, 449);
        assert_eq!(rules.validate(&ok), Ok(()));

        let wrong = AttachmentDraft::new("a.png", "image/png", 300_000).with_dimensions(450, 449);
        let err = rules.validate(&wrong).unwrap_err();
        assert_eq!(err.to_string(), "Dimensions must be exactly 449x449");

        let undecoded = AttachmentDraft::new("a.png", "image/png", 300_000);
        assert_eq!(rules.validate(&undecoded), Err(AttachmentError::Undecoded));
    }

    #[test]
    fn test_format_and_size_messages() {
        let err = ImageRules::SUPER_SAVE_BRAND_LOGO.check_file("image/gif", 10).unwrap_err();
        assert_eq!(err.to_string(), "Format must be JPEG, PNG or SVG");

        let err = ImageRules::SUBCATEGORY.check_file("image/svg+xml", 10).unwrap_err();
        assert_eq!(err.to_string(), "Format must be JPEG or PNG");

        let err = ImageRules::SUBCATEGORY.check_file("image/jpeg", 2 * MB + 1).unwrap_err();
        assert_eq!(err.to_string(), "File size must be under 2MB");
        assert_eq!(ImageRules::SUBCATEGORY.check_file("image/jpeg", 2 * MB), Ok(()));
    }

    #[test]
    fn test_subcategory_ignores_dimensions() {
        let any = AttachmentDraft::new("x.jpg", "image/jpeg", 1024).with_dimensions(13, 7);
        assert_eq!(ImageRules::SUBCATEGORY.validate(&any), Ok(()));
        assert!(!ImageRules::SUBCATEGORY.needs_dimensions());
        assert_eq!(
            ImageRules::SUPER_SAVE_BRAND_LOGO.check_dimensions(1118, 629),
            Ok(())
        );
    }

    #[test]
    fn test_category_cover_is_fixed_size() {
        let cover = AttachmentDraft::new("c.jpg", "image/jpeg", 500_000).with_dimensions(720, 851);
        assert_eq!(ImageRules::CATEGORY.validate(&cover), Ok(()));

        let err = ImageRules::CATEGORY.check_dimensions(851, 720).unwrap_err();
        assert_eq!(err.to_string(), "Dimensions must be exactly 720x851");
    }

    #[test]
    fn test_image_slot_keeps_stored_path_until_replaced() {
        let mut slot = ImageSlot::stored(Some("/logos/1.png".into()));
        assert_eq!(slot.preview("https://cdn.test"), Some("https://cdn.test/logos/1.png".into()));

        let err = slot
            .set(AttachmentDraft::new("l.gif", "image/gif", 10), &ImageRules::SPOTLIGHT)
            .unwrap_err();
        assert_eq!(slot.error.as_deref(), Some(err.to_string().as_str()));
        assert_eq!(slot.draft, None);

        let logo = AttachmentDraft::new("l.svg", "image/svg+xml", 10).with_preview("blob:logo");
        slot.set(logo, &ImageRules::SPOTLIGHT).unwrap();
        assert_eq!(slot.error, None);
        assert_eq!(slot.preview("https://cdn.test"), Some("blob:logo".into()));
        assert_eq!(ImageSlot::stored(Some("  ".into())).existing, None);
    }
}
