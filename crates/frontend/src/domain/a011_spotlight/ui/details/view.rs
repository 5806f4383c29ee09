use super::view_model::SpotlightDetailsVm;
use crate::shared::api_utils::image_base;
use crate::shared::components::dependent_select::{field_error, tier_options, tier_value, DependentSelect};
use crate::shared::components::image_picker::ImagePicker;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::list_state::Saved;
use contracts::domain::a011_spotlight::form::{BACKGROUND_FIELD, IMAGE_RULES, LOGO_FIELD, VENDOR};
use contracts::domain::a011_spotlight::Spotlight;
use leptos::prelude::*;
use thaw::*;

/// Inline create/edit form above the spotlight table
#[component]
#[allow(non_snake_case)]
pub fn SpotlightDetails(vm: SpotlightDetailsVm, on_saved: Callback<Saved<Spotlight>>) -> impl IntoView {
    let form = vm.form;
    let is_edit = vm.is_edit_mode();

    let background_preview = Signal::derive(move || form.with(|f| f.image_preview(&image_base())));
    let background_error = Signal::derive(move || {
        form.with(|f| {
            f.attachment_error
                .clone()
                .or_else(|| f.field_error(BACKGROUND_FIELD).map(str::to_string))
        })
    });
    let logo_preview = Signal::derive(move || form.with(|f| f.fields.logo.preview(&image_base())));
    let logo_error = Signal::derive(move || {
        form.with(|f| {
            f.fields
                .logo
                .error
                .clone()
                .or_else(|| f.field_error(LOGO_FIELD).map(str::to_string))
        })
    });

    view! {
        <div class="details-container spotlight-details">
            <div class="details-header">
                <h3>{move || if is_edit.get() { "Edit Spotlight" } else { "Add Spotlight" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <DependentSelect
                    label="Vendor"
                    id="spotlight-vendor"
                    options=tier_options(form, VENDOR)
                    value=tier_value(form, VENDOR)
                    error=field_error(form, "shop_id")
                    on_change=Callback::new(move |raw| vm.select_vendor(raw))
                />
                <Input
                    label="Shop Name"
                    id="spotlight-shop-name"
                    value=Signal::derive(move || form.with(|f| f.fields.shop_name.clone()))
                    readonly=true
                />
                <Input
                    label="Title"
                    id="spotlight-title"
                    placeholder="Enter title"
                    value=Signal::derive(move || form.with(|f| f.fields.title.clone()))
                    error=field_error(form, "title")
                    on_input=Callback::new(move |v| vm.set_title(v))
                />
                <Input
                    label="Price"
                    id="spotlight-price"
                    input_type="number"
                    step="0.01"
                    placeholder="0.00"
                    value=Signal::derive(move || form.with(|f| f.fields.price.clone()))
                    error=field_error(form, "price")
                    on_input=Callback::new(move |v| vm.set_price(v))
                />
                <ImagePicker
                    label="Background Image"
                    id="spotlight-background"
                    rules=IMAGE_RULES
                    preview=background_preview
                    error=background_error
                    on_pick=Callback::new(move |picked| vm.pick_background(picked))
                    on_reject=Callback::new(move |err| vm.reject_background(err))
                />
                <ImagePicker
                    label="Brand Logo"
                    id="spotlight-logo"
                    rules=IMAGE_RULES
                    preview=logo_preview
                    error=logo_error
                    on_pick=Callback::new(move |picked| vm.pick_logo(picked))
                    on_reject=Callback::new(move |err| vm.reject_logo(err))
                />
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.is_saving.get() || !vm.is_loaded.get())
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
