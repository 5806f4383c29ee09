use super::view_model::SubcategoryDetailsVm;
use crate::shared::api_utils::image_base;
use crate::shared::components::dependent_select::{field_error, tier_options, tier_value, DependentSelect};
use crate::shared::components::image_picker::ImagePicker;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::list_state::Saved;
use contracts::domain::a002_subcategory::form::{CATEGORY, CATEGORY_TYPE, IMAGE_FIELD, IMAGE_RULES};
use contracts::domain::a002_subcategory::Subcategory;
use leptos::prelude::*;
use thaw::*;

/// Inline create/edit form above the subcategory table
#[component]
#[allow(non_snake_case)]
pub fn SubcategoryDetails(vm: SubcategoryDetailsVm, on_saved: Callback<Saved<Subcategory>>) -> impl IntoView {
    vm.load_if_needed();
    let form = vm.form;
    let is_edit = vm.is_edit_mode();

    let preview = Signal::derive(move || form.with(|f| f.image_preview(&image_base())));
    let image_error = Signal::derive(move || {
        form.with(|f| {
            f.attachment_error
                .clone()
                .or_else(|| f.field_error(IMAGE_FIELD).map(str::to_string))
        })
    });

    view! {
        <div class="details-container subcategory-details">
            <div class="details-header">
                <h3>{move || if is_edit.get() { "Edit Subcategory" } else { "Add Subcategory" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <DependentSelect
                    label="Category Type"
                    id="subcategory-category-type"
                    options=tier_options(form, CATEGORY_TYPE)
                    value=tier_value(form, CATEGORY_TYPE)
                    error=field_error(form, "category_type")
                    on_change=Callback::new(move |raw| vm.select(CATEGORY_TYPE, raw))
                />
                <DependentSelect
                    label="Category"
                    id="subcategory-category"
                    options=tier_options(form, CATEGORY)
                    value=tier_value(form, CATEGORY)
                    error=field_error(form, "category_id")
                    on_change=Callback::new(move |raw| vm.select(CATEGORY, raw))
                />
                <Input
                    label="Subcategory Name"
                    id="subcategory-name"
                    placeholder="Enter subcategory name"
                    value=Signal::derive(move || form.with(|f| f.fields.name.clone()))
                    error=field_error(form, "name")
                    on_input=Callback::new(move |v| vm.set_name(v))
                />
                <ImagePicker
                    label="Image"
                    id="subcategory-image"
                    rules=IMAGE_RULES
                    preview=preview
                    error=image_error
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
