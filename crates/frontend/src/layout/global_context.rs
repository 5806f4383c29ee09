use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Open tabs and panel visibility shared by the whole application
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the tab named by `?active=` and keep the query in sync afterwards
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active").cloned() {
            let title = super::tabs::title_for_key(&active_key);
            self.open_tab(&active_key, &title);
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query = serde_qs::to_string(&HashMap::from([("active", active_key)])).unwrap_or_default();
            let new_url = format!("?{}", query);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url)) {
                    log::warn!("cannot update url: {:?}", e);
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}', title='{}'", key, title);
        self.opened.update(|tabs| open_or_keep(tabs, key, title));
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

fn open_or_keep(tabs: &mut Vec<Tab>, key: &str, title: &str) {
    if tabs.iter().any(|tab| tab.key == key) {
        return;
    }
    tabs.push(Tab {
        key: key.to_string(),
        title: title.to_string(),
    });
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_or_keep_does_not_duplicate() {
        let mut tabs = Vec::new();
        open_or_keep(&mut tabs, "a002_subcategory", "Subcategories");
        open_or_keep(&mut tabs, "a002_subcategory", "Other title");
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].title, "Subcategories");
    }
}
