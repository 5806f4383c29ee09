use super::view_model::CurrentDealDetailsVm;
use crate::shared::components::dependent_select::{field_error, tier_options, tier_value, DependentSelect};
use crate::shared::icons::icon;
use crate::shared::list_state::Saved;
use contracts::domain::a008_current_deal::CurrentDeal;
use contracts::domain::common::vendor_product::{PRODUCT, TYPE, VENDOR};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CurrentDealDetails(vm: CurrentDealDetailsVm, on_saved: Callback<Saved<CurrentDeal>>) -> impl IntoView {
    vm.load_if_needed();
    let form = vm.form;
    let is_edit = vm.is_edit_mode();

    view! {
        <div class="details-container deal-details">
            <div class="details-header">
                <h3>{move || if is_edit.get() { "Edit Current Deal" } else { "Add Current Deal" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <DependentSelect
                    label="Type"
                    id="current-deal-type"
                    options=tier_options(form, TYPE)
                    value=tier_value(form, TYPE)
                    error=field_error(form, "type")
                    on_change=Callback::new(move |raw| vm.select(TYPE, raw))
                />
                <DependentSelect
                    label="Vendor Name"
                    id="current-deal-vendor"
                    options=tier_options(form, VENDOR)
                    value=tier_value(form, VENDOR)
                    error=field_error(form, "name")
                    on_change=Callback::new(move |raw| vm.select(VENDOR, raw))
                />
                <DependentSelect
                    label="Product"
                    id="current-deal-product"
                    options=tier_options(form, PRODUCT)
                    value=tier_value(form, PRODUCT)
                    error=field_error(form, "product_id")
                    on_change=Callback::new(move |raw| vm.select(PRODUCT, raw))
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
