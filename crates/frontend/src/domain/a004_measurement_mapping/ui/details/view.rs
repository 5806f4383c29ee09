use super::view_model::MappingDetailsVm;
use crate::shared::components::dependent_select::{
    field_error, tier_options, tier_selected_ids, tier_value, DependentSelect,
};
use crate::shared::components::multi_select_checklist::MultiSelectChecklist;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::list_state::Saved;
use contracts::domain::a004_measurement_mapping::form::{CATEGORY, GENDER, MEASUREMENTS, SUBCATEGORIES};
use contracts::domain::a004_measurement_mapping::MeasurementMapping;
use leptos::prelude::*;
use thaw::*;

/// Inline form binding a category, its subcategories and the measurements of a gender
#[component]
#[allow(non_snake_case)]
pub fn MappingDetails(vm: MappingDetailsVm, on_saved: Callback<Saved<MeasurementMapping>>) -> impl IntoView {
    vm.load_if_needed();
    let form = vm.form;
    let is_edit = vm.is_edit_mode();

    let subcategory_empty = Signal::derive(move || {
        form.with(|f| {
            if f.resolver.selected(CATEGORY).is_none() {
                "Select a category first"
            } else {
                "No subcategories found"
            }
        })
        .to_string()
    });
    let measurement_empty = Signal::derive(move || {
        form.with(|f| {
            if f.resolver.selected(GENDER).is_none() {
                "Select a gender first"
            } else {
                "No measurements found"
            }
        })
        .to_string()
    });

    view! {
        <div class="details-container mapping-details">
            <div class="details-header">
                <h3>{move || if is_edit.get() { "Edit Mapping" } else { "Create Mapping" }}</h3>
                <Show when=move || vm.is_loading_sources.get()>
                    <Spinner size=SpinnerSize::Tiny />
                </Show>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || vm.warning.get().map(|w| view! { <div class="alert alert--warning">{w}</div> })}

            <div class="details-form">
                <Input
                    label="Mapping Name"
                    id="mapping-name"
                    placeholder="e.g. Mens Casual Top Wear"
                    value=Signal::derive(move || form.with(|f| f.fields.name.clone()))
                    error=field_error(form, "name")
                    on_input=Callback::new(move |v| vm.set_name(v))
                />
                <DependentSelect
                    label="Gender"
                    id="mapping-gender"
                    options=tier_options(form, GENDER)
                    value=tier_value(form, GENDER)
                    error=field_error(form, "gender")
                    on_change=Callback::new(move |raw| vm.select(GENDER, raw))
                />
                <DependentSelect
                    label="Category"
                    id="mapping-category"
                    options=tier_options(form, CATEGORY)
                    value=tier_value(form, CATEGORY)
                    error=field_error(form, "category_id")
                    on_change=Callback::new(move |raw| vm.select(CATEGORY, raw))
                />
                <MultiSelectChecklist
                    label="Subcategories"
                    id_prefix="mapping-subcategory"
                    options=tier_options(form, SUBCATEGORIES)
                    selected=tier_selected_ids(form, SUBCATEGORIES)
                    empty_text=subcategory_empty
                    on_toggle=Callback::new(move |id| vm.toggle(SUBCATEGORIES, id))
                />
                <MultiSelectChecklist
                    label="Measurements"
                    id_prefix="mapping-measurement"
                    options=tier_options(form, MEASUREMENTS)
                    selected=tier_selected_ids(form, MEASUREMENTS)
                    empty_text=measurement_empty
                    on_toggle=Callback::new(move |id| vm.toggle(MEASUREMENTS, id))
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
                        (false, true) => " Update Mapping",
                        (false, false) => " Save Mapping",
                    }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.cancel()>
                    {icon("cancel")}
                    " Reset"
                </Button>
            </div>
        </div>
    }
}
