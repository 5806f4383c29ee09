//! Root wrapper for every screen opened in a tab.
//!
//! The root element carries `id="{screen}--{category}"` (e.g. `"a007_designer--list"`)
//! and `data-page-category`, so a screen found in the DOM inspector can be traced
//! back to its `domain/` directory.

use leptos::prelude::*;

/// Paged table with an inline create/edit form.
pub const PAGE_CAT_LIST: &str = "list";

/// Read-only view of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Free-form page without the header/content split.
pub const PAGE_CAT_CUSTOM: &str = "custom";

fn frame_class(category: &str, extra: &str) -> String {
    let base = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_CUSTOM => "page page--custom",
        _ => "page",
    };
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

/// `true` when the id has a non-empty screen part and category part.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((screen, category)) if !screen.is_empty() && !category.is_empty())
}

#[component]
pub fn PageFrame(
    /// `{screen}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("page id '{}' does not follow '{{screen}}--{{category}}'", page_id);
    }

    view! {
        <div id=page_id class=frame_class(category, class) data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_class_by_category() {
        assert_eq!(frame_class(PAGE_CAT_LIST, ""), "page");
        assert_eq!(frame_class(PAGE_CAT_DETAIL, ""), "page page--detail");
        assert_eq!(frame_class(PAGE_CAT_CUSTOM, "lookup"), "page page--custom lookup");
        assert_eq!(frame_class("unknown", ""), "page");
    }

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a006_product--detail"));
        assert!(!is_valid_page_id("a006_product"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a006_product--"));
    }
}
