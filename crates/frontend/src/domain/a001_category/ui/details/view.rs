use super::view_model::CategoryDetailsVm;
use crate::shared::api_utils::image_base;
use crate::shared::components::dependent_select::{field_error, tier_options, tier_value, DependentSelect};
use crate::shared::components::image_picker::ImagePicker;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::list_state::Saved;
use contracts::domain::a001_category::form::{CATEGORY_TYPE, IMAGE_FIELD, IMAGE_RULES};
use contracts::domain::a001_category::Category;
use leptos::prelude::*;
use thaw::*;

/// Inline create/edit form above the category table
#[component]
#[allow(non_snake_case)]
pub fn CategoryDetails(vm: CategoryDetailsVm, on_saved: Callback<Saved<Category>>) -> impl IntoView {
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
        <div class="details-container category-details">
            <div class="details-header">
                <h3>{move || if is_edit.get() { "Edit Category" } else { "Add Category" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <DependentSelect
                    label="Category Type"
                    id="category-type"
                    options=tier_options(form, CATEGORY_TYPE)
                    value=tier_value(form, CATEGORY_TYPE)
                    error=field_error(form, "category_type")
                    on_change=Callback::new(move |raw| vm.select_type(raw))
                />
                <Input
                    label="Category Name"
                    id="category-name"
                    placeholder="Enter category name"
                    value=Signal::derive(move || form.with(|f| f.fields.name.clone()))
                    error=field_error(form, "category_name")
                    on_input=Callback::new(move |v| vm.set_name(v))
                />
                <ImagePicker
                    label="Cover Image"
                    id="category-image"
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
