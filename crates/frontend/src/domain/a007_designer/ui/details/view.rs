use super::view_model::DesignerDetailsVm;
use crate::shared::api_utils::image_base;
use crate::shared::components::dependent_select::{field_error, tier_options, tier_value, DependentSelect};
use crate::shared::components::image_picker::ImagePicker;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::list_state::Saved;
use contracts::domain::a007_designer::form::{IMAGE_FIELD, IMAGE_RULES, VENDOR};
use contracts::domain::a007_designer::Designer;
use leptos::prelude::*;
use thaw::*;

/// Picking a designer vendor fills the display name from its login
#[component]
#[allow(non_snake_case)]
pub fn DesignerDetails(vm: DesignerDetailsVm, on_saved: Callback<Saved<Designer>>) -> impl IntoView {
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
        <div class="details-container designer-details">
            <div class="details-header">
                <h3>{move || if is_edit.get() { "Edit Designer" } else { "Add Designer" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <DependentSelect
                    label="Designer Name"
                    id="designer-vendor"
                    options=tier_options(form, VENDOR)
                    value=tier_value(form, VENDOR)
                    error=field_error(form, "designer_id")
                    on_change=Callback::new(move |raw| vm.select_vendor(raw))
                />
                <Input
                    label="Designer Title"
                    id="designer-title"
                    placeholder="e.g. Bridal couture"
                    value=Signal::derive(move || form.with(|f| f.fields.title.clone()))
                    error=field_error(form, "designer_title")
                    on_input=Callback::new(move |v| vm.set_title(v))
                />
                <Input
                    label="Rating"
                    id="designer-rating"
                    input_type="number"
                    step="0.1"
                    placeholder="0 - 5"
                    value=Signal::derive(move || form.with(|f| f.fields.rating.clone()))
                    error=field_error(form, "designer_rating")
                    on_input=Callback::new(move |v| vm.set_rating(v))
                />
                <ImagePicker
                    label="Designer Image"
                    id="designer-image"
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
