//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "master",
            label: "Master",
            icon: "layers",
            items: vec![
                ("a001_category", tab_label_for_key("a001_category"), "grid"),
                ("a002_subcategory", tab_label_for_key("a002_subcategory"), "folder"),
                ("a003_measurement", tab_label_for_key("a003_measurement"), "ruler"),
                ("a004_measurement_mapping", tab_label_for_key("a004_measurement_mapping"), "ruler"),
                ("a010_size", tab_label_for_key("a010_size"), "tag"),
                ("a007_designer", tab_label_for_key("a007_designer"), "user"),
            ],
        },
        MenuGroup {
            id: "deals",
            label: "Deals",
            icon: "percent",
            items: vec![
                ("a008_current_deal", tab_label_for_key("a008_current_deal"), "tag"),
                ("a009_super_save_deal", tab_label_for_key("a009_super_save_deal"), "percent"),
                ("a011_spotlight", tab_label_for_key("a011_spotlight"), "star"),
            ],
        },
        MenuGroup {
            id: "reports",
            label: "Reports",
            icon: "layers",
            items: vec![
                ("a005_vendor", tab_label_for_key("a005_vendor"), "store"),
                ("a012_customer", tab_label_for_key("a012_customer"), "users"),
                ("a013_order", tab_label_for_key("a013_order"), "cart"),
            ],
        },
        MenuGroup {
            id: "products",
            label: "Product",
            icon: "package",
            items: vec![("a006_product", tab_label_for_key("a006_product"), "search")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["master".to_string(), "deals".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_click = group_id.clone();
                let group_id_for_exp = group_id.clone();
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|g| g.contains(&group_id_for_exp))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|g| g.contains(&group_id))>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || ctx.active.with(|a| a.as_deref() == Some(id))
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(id, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
