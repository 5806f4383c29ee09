use crate::shared::local_patch::HasId;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Как передаётся тело create/update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    Json,
    /// `multipart/form-data`: бэкенд принимает файлы только так
    Multipart,
}

/// Метод и путь запроса относительно базового URL API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: HttpMethod,
    pub path: String,
    /// Значение поля `_method` для multipart-запросов, отправляемых через POST
    pub method_override: Option<HttpMethod>,
}

impl Route {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            method_override: None,
        }
    }

    pub fn overriding(mut self, method: HttpMethod) -> Self {
        self.method_override = Some(method);
        self
    }
}

/// Трейт для справочника, редактируемого через REST
///
/// Экземпляр описывает строку таблицы; статические методы описывают коллекцию.
pub trait Resource: HasId + DeserializeOwned + Clone + 'static {
    // ============================================================================
    // Метаданные коллекции
    // ============================================================================

    /// Индекс сущности в системе (например, "a002")
    fn entity_index() -> &'static str;

    /// Сегмент URL коллекции (например, "subcategories")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Ключ, под которым ответ на сохранение возвращает запись
    fn saved_key() -> &'static str;

    fn body_encoding() -> BodyEncoding {
        BodyEncoding::Json
    }

    // ============================================================================
    // Маршруты
    // ============================================================================

    fn list_path() -> String {
        format!("/{}", Self::collection_name())
    }

    /// Данные для выпадающих списков формы
    fn meta_path() -> String {
        format!("/{}/meta", Self::collection_name())
    }

    fn create_route() -> Route {
        Route::new(HttpMethod::Post, Self::list_path())
    }

    /// Multipart-обновление идёт через POST с `_method=PUT`
    fn update_route(id: i64) -> Route {
        let path = format!("/{}/{}", Self::collection_name(), id);
        match Self::body_encoding() {
            BodyEncoding::Json => Route::new(HttpMethod::Put, path),
            BodyEncoding::Multipart => Route::new(HttpMethod::Post, path).overriding(HttpMethod::Put),
        }
    }

    fn delete_route(id: i64) -> Route {
        Route::new(HttpMethod::Delete, format!("/{}/{}", Self::collection_name(), id))
    }

    /// Полное имя сущности (например, "a002_subcategories")
    fn full_name() -> String {
        format!("{}_{}", Self::entity_index(), Self::collection_name())
    }
}
