use super::view_model::SizeDetailsVm;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::list_state::Saved;
use contracts::domain::a010_size::Size;
use leptos::prelude::*;
use thaw::*;

/// Inline create/edit form above the size table
#[component]
#[allow(non_snake_case)]
pub fn SizeDetails(
    vm: SizeDetailsVm,
    /// Rows of the visible page
    #[prop(into)]
    loaded: Signal<Vec<Size>>,
    on_saved: Callback<Saved<Size>>,
) -> impl IntoView {
    let is_edit = vm.is_edit_mode();

    view! {
        <div class="details-container size-details">
            <div class="details-header">
                <h3>{move || if is_edit.get() { "Edit Size" } else { "Add Size" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <Input
                    label="Size Name"
                    id="size-name"
                    placeholder="e.g. XL"
                    value=vm.name
                    error=vm.name_error()
                    on_input=Callback::new(move |v| vm.name.set(v))
                />
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.is_saving.get())
                    on_click=move |_| loaded.with_untracked(|rows| vm.save_command(rows, on_saved))
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
