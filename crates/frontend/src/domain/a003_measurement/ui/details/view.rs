use super::view_model::MeasurementDetailsVm;
use crate::shared::api_utils::image_base;
use crate::shared::components::dependent_select::{field_error, tier_options, tier_value, DependentSelect};
use crate::shared::components::image_picker::ImagePicker;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::list_state::Saved;
use contracts::domain::a003_measurement::form::{GENDER, IMAGE_FIELD, IMAGE_RULES};
use contracts::domain::a003_measurement::Measurement;
use leptos::prelude::*;
use thaw::*;

/// Inline create/edit form above the measurement table
#[component]
#[allow(non_snake_case)]
pub fn MeasurementDetails(vm: MeasurementDetailsVm, on_saved: Callback<Saved<Measurement>>) -> impl IntoView {
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
        <div class="details-container measurement-details">
            <div class="details-header">
                <h3>{move || if is_edit.get() { "Edit Measurement" } else { "Add Measurement" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <DependentSelect
                    label="Type"
                    id="measurement-type"
                    options=tier_options(form, GENDER)
                    value=tier_value(form, GENDER)
                    error=field_error(form, "type")
                    on_change=Callback::new(move |raw| vm.select_gender(raw))
                />
                <Input
                    label="Measurement Part"
                    id="measurement-name"
                    placeholder="e.g. Chest"
                    value=Signal::derive(move || form.with(|f| f.fields.name.clone()))
                    error=field_error(form, "name")
                    on_input=Callback::new(move |v| vm.set_name(v))
                />

                <div class="form__group size-values">
                    <span class="form__label">"Size Values"</span>
                    <div class="size-values__grid">
                        {move || vm.sizes.get().into_iter().map(|size| {
                            let name = size.name.clone();
                            let key = size.name.clone();
                            let value = Signal::derive(move || {
                                form.with(|f| f.fields.size_values.get(&key).cloned().unwrap_or_default())
                            });
                            view! {
                                <Input
                                    label=size.name.to_uppercase()
                                    id=format!("measurement-size-{}", size.id)
                                    placeholder="Value"
                                    value=value
                                    on_input=Callback::new(move |v| vm.set_size_value(name.clone(), v))
                                />
                            }
                        }).collect_view()}
                    </div>
                    {move || form.with(|f| f.field_error("size_values").map(str::to_string)).map(|e| view! {
                        <div class="form__error">{e}</div>
                    })}
                </div>

                <ImagePicker
                    label="Illustration"
                    id="measurement-image"
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
