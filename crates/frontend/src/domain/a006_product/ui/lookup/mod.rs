use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::tab_labels::PRODUCT_DETAIL_PREFIX;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use leptos::prelude::*;
use thaw::*;

/// Tab key of the storefront card of one product
pub fn product_tab_key(id: i64) -> String {
    format!("{}{}", PRODUCT_DETAIL_PREFIX, id)
}

/// Products have no list endpoint; the card is opened by id
#[component]
#[allow(non_snake_case)]
pub fn ProductLookup() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let raw_id = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let open = move || {
        let input = raw_id.get_untracked();
        match input.trim().parse::<i64>() {
            Ok(id) if id > 0 => {
                error.set(None);
                ctx.open_tab(&product_tab_key(id), &detail_tab_label("Product", &id.to_string()));
            }
            _ => error.set(Some("Enter a numeric product id".to_string())),
        }
    };

    view! {
        <PageFrame page_id="a006_product--lookup" category="custom">
            <PageHeader title="Product Preview" />

            <div class="page__content">
                <div class="details-container product-lookup">
                    <div class="details-form">
                        <Input
                            label="Product ID"
                            id="product-lookup-id"
                            input_type="number"
                            placeholder="e.g. 55"
                            value=raw_id
                            error=error
                            on_input=Callback::new(move |v| raw_id.set(v))
                        />
                    </div>
                    <div class="details-actions">
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| open()>
                            {icon("search")}
                            " Open"
                        </Button>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_tab_key_carries_id() {
        assert_eq!(product_tab_key(55), "a006_product_detail_55");
    }
}
