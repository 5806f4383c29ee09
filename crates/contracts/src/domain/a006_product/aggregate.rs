use crate::domain::a005_vendor::Vendor;
use crate::shared::dependent_selection::{OptionId, Selectable};
use crate::shared::local_patch::HasId;
use crate::shared::serde_utils::{lenient_f64, lenient_i64, lenient_opt_i64, lenient_opt_string, lenient_string, null_as_default};
use serde::{Deserialize, Serialize};

/// Товар в выпадающих списках сделок (`/…/meta`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient_string")]
    pub product_name: String,

    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub vendor_id: Option<i64>,
}

impl HasId for Product {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Selectable for Product {
    fn option_id(&self) -> OptionId {
        OptionId::from(self.id)
    }

    fn option_label(&self) -> String {
        self.product_name.clone()
    }

    fn relation_value(&self, field: &str) -> Option<OptionId> {
        match field {
            "vendor_id" => self.vendor_id.map(OptionId::from),
            _ => None,
        }
    }
}

/// Название товара по id для колонки таблицы
pub fn product_name(products: &[Product], id: Option<i64>) -> &str {
    id.and_then(|id| products.iter().find(|p| p.id == id))
        .map(|p| p.product_name.as_str())
        .unwrap_or("N/A")
}

// ============================================================================
// Карточка товара (`/show/product/{id}`)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterMaterial {
    #[serde(default, deserialize_with = "lenient_string")]
    pub material_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialPrice {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub actual_price: f64,
}

/// Вариант исполнения товара (ткань)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMaterial {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub img_path: Option<String>,

    #[serde(default)]
    pub master_material: Option<MasterMaterial>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub prices: Vec<MaterialPrice>,
}

impl ProductMaterial {
    pub fn name(&self) -> &str {
        self.master_material
            .as_ref()
            .map(|m| m.material_name.as_str())
            .unwrap_or_default()
    }
}

impl Selectable for ProductMaterial {
    fn option_id(&self) -> OptionId {
        OptionId::from(self.id)
    }

    fn option_label(&self) -> String {
        self.name().to_string()
    }

    fn relation_value(&self, _field: &str) -> Option<OptionId> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSize {
    #[serde(deserialize_with = "lenient_string")]
    pub size: String,
}

/// Размер сам себе идентификатор: цену запрашивают по строке размера
impl Selectable for ProductSize {
    fn option_id(&self) -> OptionId {
        OptionId::from(self.size.as_str())
    }

    fn option_label(&self) -> String {
        self.size.clone()
    }

    fn relation_value(&self, _field: &str) -> Option<OptionId> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,

    #[serde(default, deserialize_with = "lenient_string")]
    pub product_name: String,

    #[serde(default)]
    pub vendor: Option<Vendor>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub all_images: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub product_materials: Vec<ProductMaterial>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub product_sizes: Vec<ProductSize>,
}

impl ProductDetail {
    pub fn shop_name(&self) -> &str {
        self.vendor
            .as_ref()
            .and_then(|v| v.shop_name.as_deref())
            .unwrap_or_default()
    }

    /// Цена до выбора варианта: первая цена первого материала
    pub fn starting_price(&self) -> Option<f64> {
        self.product_materials
            .first()
            .and_then(|m| m.prices.first())
            .map(|p| p.actual_price)
    }

    pub fn first_image(&self) -> Option<&str> {
        self.all_images.first().map(String::as_str)
    }
}
