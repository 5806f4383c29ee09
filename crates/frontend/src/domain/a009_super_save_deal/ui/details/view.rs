use super::view_model::SuperSaveDetailsVm;
use crate::shared::api_utils::image_base;
use crate::shared::components::dependent_select::{field_error, tier_options, tier_value, DependentSelect};
use crate::shared::components::image_picker::ImagePicker;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::list_state::Saved;
use contracts::domain::a009_super_save_deal::form::{IMAGE_FIELD, IMAGE_RULES};
use contracts::domain::a009_super_save_deal::SuperSaveDeal;
use contracts::domain::common::vendor_product::{PRODUCT, TYPE, VENDOR};
use leptos::prelude::*;
use thaw::*;

/// Banner deal: the vendor chain plus title, price and brand logo
#[component]
#[allow(non_snake_case)]
pub fn SuperSaveDetails(vm: SuperSaveDetailsVm, on_saved: Callback<Saved<SuperSaveDeal>>) -> impl IntoView {
    vm.load_if_needed();
    let form = vm.form;
    let is_edit = vm.is_edit_mode();

    let preview = Signal::derive(move || form.with(|f| f.image_preview(&image_base())));
    let logo_error = Signal::derive(move || {
        form.with(|f| {
            f.attachment_error
                .clone()
                .or_else(|| f.field_error(IMAGE_FIELD).map(str::to_string))
        })
    });

    view! {
        <div class="details-container deal-details">
            <div class="details-header">
                <h3>{move || if is_edit.get() { "Edit Super Save Deal" } else { "Add Super Save Deal" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <DependentSelect
                    label="Type"
                    id="super-save-type"
                    options=tier_options(form, TYPE)
                    value=tier_value(form, TYPE)
                    error=field_error(form, "type")
                    on_change=Callback::new(move |raw| vm.select(TYPE, raw))
                />
                <DependentSelect
                    label="Vendor Name"
                    id="super-save-vendor"
                    options=tier_options(form, VENDOR)
                    value=tier_value(form, VENDOR)
                    error=field_error(form, "name")
                    on_change=Callback::new(move |raw| vm.select(VENDOR, raw))
                />
                <DependentSelect
                    label="Product"
                    id="super-save-product"
                    options=tier_options(form, PRODUCT)
                    value=tier_value(form, PRODUCT)
                    error=field_error(form, "product_id")
                    on_change=Callback::new(move |raw| vm.select(PRODUCT, raw))
                />
                <Input
                    label="Title"
                    id="super-save-title"
                    placeholder="e.g. Flat 40% off"
                    value=Signal::derive(move || form.with(|f| f.fields.title.clone()))
                    error=field_error(form, "title")
                    on_input=Callback::new(move |v| vm.set_title(v))
                />
                <Input
                    label="Price"
                    id="super-save-price"
                    input_type="number"
                    step="0.01"
                    value=Signal::derive(move || form.with(|f| f.fields.price.clone()))
                    error=field_error(form, "price")
                    on_input=Callback::new(move |v| vm.set_price(v))
                />
                <ImagePicker
                    label="Brand Logo"
                    id="super-save-logo"
                    rules=IMAGE_RULES
                    preview=preview
                    error=logo_error
                    on_pick=Callback::new(move |picked| vm.pick_image(picked))
                    on_reject=Callback::new(move |err| vm.reject_image(err))
                />
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.is_saving.get())
                    on_click=move |_| vm.save_command(on_saved)
                >
                    {icon("save")}
                    {move || match (vm.is_saving.get(), is_edit.get()) {
                        (true, _) => " Saving...",
                        (false, true) => " Update",
                        (false, false) => " Save",
                    }}
                </Button>
                <Show when=move || is_edit.get()>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.cancel()>
                        {icon("cancel")}
                        " Cancel"
                    </Button>
                </Show>
            </div>
        </div>
    }
}
