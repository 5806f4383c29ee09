use crate::domain::a001_category::Category;
use crate::domain::common::{BodyEncoding, Resource};
use crate::shared::dependent_selection::{OptionId, Selectable};
use crate::shared::local_patch::HasId;
use crate::shared::serde_utils::{lenient_i64, lenient_opt_i64, lenient_opt_string, lenient_string};
use serde::{Deserialize, Serialize};

/// Подкатегория (например, "Formal" внутри "Shirts")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub category_id: Option<i64>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub category_type: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub img_path: Option<String>,

    /// Связанная категория, если бэкенд её подгрузил
    #[serde(default)]
    pub category: Option<Category>,
}

impl Subcategory {
    /// Тип категории: из связанной категории, иначе из собственного поля
    pub fn category_type_code(&self) -> Option<&str> {
        self.category
            .as_ref()
            .and_then(Category::kind_code)
            .or(self.category_type.as_deref())
    }

    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(Category::display_name).unwrap_or("N/A")
    }

    /// Подставить категорию из загруженного списка, если ответ пришёл без неё
    pub fn with_category_from(mut self, categories: &[Category]) -> Self {
        if self.category.is_none() {
            if let Some(id) = self.category_id {
                self.category = categories.iter().find(|c| c.id == id).cloned();
            }
        }
        self
    }
}

impl HasId for Subcategory {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Selectable for Subcategory {
    fn option_id(&self) -> OptionId {
        OptionId::from(self.id)
    }

    fn option_label(&self) -> String {
        self.name.clone()
    }

    fn relation_value(&self, field: &str) -> Option<OptionId> {
        match field {
            "category_id" => self.category_id.map(OptionId::from),
            _ => None,
        }
    }
}

impl Resource for Subcategory {
    fn entity_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "subcategories"
    }

    fn element_name() -> &'static str {
        "Subcategory"
    }

    fn list_name() -> &'static str {
        "Subcategories"
    }

    fn saved_key() -> &'static str {
        "subcategory"
    }

    fn body_encoding() -> BodyEncoding {
        BodyEncoding::Multipart
    }
}
