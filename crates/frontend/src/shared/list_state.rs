//! State of a paginated list page.
//!
//! Every entity list keeps the loaded page, the query that produced it and the
//! load status in one signal. Saves and deletes patch the loaded page in place
//! instead of refetching it.

use super::api_client::{delete_record, fetch_page};
use super::config::config;
use contracts::domain::common::Resource;
use contracts::shared::list::{ListQuery, Page};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub page: Page<T>,
    pub query: ListQuery,
    pub loading: bool,
    pub error: Option<String>,
    pub is_loaded: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            page: Page::default(),
            query: ListQuery {
                per_page: config().lists.per_page,
                ..ListQuery::default()
            },
            loading: false,
            error: None,
            is_loaded: false,
        }
    }
}

pub fn create_state<T: Send + Sync + 'static>() -> RwSignal<ListState<T>> {
    RwSignal::new(ListState::default())
}

/// Fetch the page described by the current query
pub fn load_page<T>(state: RwSignal<ListState<T>>)
where
    T: Resource + Send + Sync,
{
    let query = state.with_untracked(|s| s.query.clone());
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });
    spawn_local(async move {
        let result = fetch_page::<T>(&query).await;
        state.update(|s| {
            // a newer query was issued while this one was in flight
            if s.query != query {
                return;
            }
            s.loading = false;
            match result {
                Ok(page) => {
                    s.page = page;
                    s.is_loaded = true;
                }
                Err(e) => {
                    log::error!("failed to load {}: {}", T::full_name(), e);
                    s.error = Some(e.to_string());
                }
            }
        });
    });
}

pub fn load_if_needed<T>(state: RwSignal<ListState<T>>)
where
    T: Resource + Send + Sync,
{
    if !state.with_untracked(|s| s.is_loaded || s.loading) {
        load_page(state);
    }
}

pub fn go_to_page<T>(state: RwSignal<ListState<T>>, page: u32)
where
    T: Resource + Send + Sync,
{
    state.update(|s| s.query = s.query.clone().with_page(page));
    load_page(state);
}

/// New search term; starts over from the first page
pub fn search<T>(state: RwSignal<ListState<T>>, term: String)
where
    T: Resource + Send + Sync,
{
    if state.with_untracked(|s| s.query.search == term) {
        return;
    }
    state.update(|s| s.query = s.query.clone().with_search(term));
    load_page(state);
}

/// New filter values; starts over from the first page
pub fn filter<T>(state: RwSignal<ListState<T>>, filters: BTreeMap<String, String>)
where
    T: Resource + Send + Sync,
{
    state.update(|s| s.query = s.query.clone().with_filters(filters));
    load_page(state);
}

/// What a form hands back to its list after a successful save
#[derive(Clone, Debug)]
pub struct Saved<T> {
    /// Record echoed by the backend, if it sent one
    pub record: Option<T>,
    pub editing_id: Option<i64>,
}

/// Put a created or updated record into the loaded page; reload when the backend sent none
pub fn apply_saved<T>(state: RwSignal<ListState<T>>, saved: Saved<T>)
where
    T: Resource + Send + Sync,
{
    let Some(record) = saved.record else {
        load_page(state);
        return;
    };
    state.update(|s| {
        if !s.page.apply_saved(record, saved.editing_id) {
            log::debug!("{}: saved row {:?} is not on this page", T::full_name(), saved.editing_id);
        }
    });
}

/// Ask for confirmation, delete on the backend and drop the row locally.
///
/// When the last row of a page goes away the previous page is loaded.
pub fn delete_row<T>(state: RwSignal<ListState<T>>, id: i64, confirm_message: &str)
where
    T: Resource + Send + Sync,
{
    if !confirm(confirm_message) {
        return;
    }
    spawn_local(async move {
        match delete_record::<T>(id).await {
            Ok(()) => {
                state.update(|s| {
                    s.page.apply_deleted(id);
                    s.error = None;
                });
                let (emptied, current) =
                    state.with_untracked(|s| (s.page.items.is_empty(), s.page.pagination.current_page));
                if emptied && current > 1 {
                    go_to_page(state, current - 1);
                }
            }
            Err(e) => {
                log::error!("failed to delete {} {}: {}", T::full_name(), id, e);
                state.update(|s| s.error = Some(e.to_string()));
            }
        }
    });
}

/// Browser confirmation dialog; `false` without a window
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
