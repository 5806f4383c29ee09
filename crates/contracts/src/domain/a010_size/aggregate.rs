use crate::domain::common::{HttpMethod, Resource, Route};
use crate::shared::local_patch::HasId;
use crate::shared::serde_utils::{lenient_i64, lenient_string};
use serde::{Deserialize, Serialize};

/// Размер из размерной сетки ("S", "XL", "32")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
}

impl HasId for Size {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Справочник размеров живёт на глагольных маршрутах `/sizes/list`, `/sizes/add`...
impl Resource for Size {
    fn entity_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "sizes"
    }

    fn element_name() -> &'static str {
        "Size"
    }

    fn list_name() -> &'static str {
        "Sizes"
    }

    fn saved_key() -> &'static str {
        "size"
    }

    fn list_path() -> String {
        "/sizes/list".to_string()
    }

    fn create_route() -> Route {
        Route::new(HttpMethod::Post, "/sizes/add")
    }

    fn update_route(id: i64) -> Route {
        Route::new(HttpMethod::Post, format!("/sizes/update/{}", id))
    }

    fn delete_route(id: i64) -> Route {
        Route::new(HttpMethod::Delete, format!("/sizes/delete/{}", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_use_verb_paths() {
        assert_eq!(Size::list_path(), "/sizes/list");
        assert_eq!(Size::create_route(), Route::new(HttpMethod::Post, "/sizes/add"));
        assert_eq!(Size::update_route(3), Route::new(HttpMethod::Post, "/sizes/update/3"));
        assert_eq!(Size::delete_route(3), Route::new(HttpMethod::Delete, "/sizes/delete/3"));
    }
}
