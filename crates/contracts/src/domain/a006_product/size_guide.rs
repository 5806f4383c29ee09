//! Таблица размеров товара (`/product-size-details/{id}`) и подсказки по
//! снятию мерок (`/product-measurements/{id}`).

use crate::shared::serde_utils::{lenient_opt_string, lenient_string, null_as_default};
use serde::{Deserialize, Serialize};

const CM_PER_INCH: f64 = 2.54;

/// Значения хранятся в дюймах
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Inch,
    Centimetre,
}

impl Unit {
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Inch => "in",
            Unit::Centimetre => "cm",
        }
    }

    pub fn all() -> [Unit; 2] {
        [Unit::Inch, Unit::Centimetre]
    }

    /// Значение ячейки в выбранных единицах; пустое или нечисловое → "-"
    pub fn format(&self, raw: Option<&str>) -> String {
        let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
            return "-".to_string();
        };
        match self {
            Unit::Inch => raw.to_string(),
            Unit::Centimetre => match raw.parse::<f64>() {
                Ok(inches) => format!("{:.1}", inches * CM_PER_INCH),
                Err(_) => "-".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeMeasure {
    #[serde(rename = "measurementName", default, deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub details_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeChartRow {
    /// Подпись строки (например, "38")
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: String,

    /// Буквенный размер (например, "M")
    #[serde(default, deserialize_with = "lenient_string")]
    pub size: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub measurements: Vec<SizeMeasure>,
}

impl SizeChartRow {
    pub fn value_of(&self, header: &str) -> Option<&str> {
        self.measurements
            .iter()
            .find(|m| m.name == header)
            .and_then(|m| m.details_value.as_deref())
    }
}

/// Картинка "как измерить"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureGuide {
    #[serde(rename = "measurementName", default, deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub reference_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeChart {
    /// Заголовки колонок: названия мерок первой строки
    pub headers: Vec<String>,
    pub rows: Vec<SizeChartRow>,
}

impl SizeChart {
    pub fn from_rows(rows: Vec<SizeChartRow>) -> Self {
        let headers = rows
            .first()
            .map(|r| r.measurements.iter().map(|m| m.name.clone()).collect())
            .unwrap_or_default();
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ячейки строки в порядке заголовков
    pub fn cells(&self, row: &SizeChartRow, unit: Unit) -> Vec<String> {
        self.headers
            .iter()
            .map(|h| unit.format(row.value_of(h)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chart() -> SizeChart {
        let rows: Vec<SizeChartRow> = serde_json::from_value(json!([
            {"value": "38", "size": "M", "measurements": [
                {"measurementName": "Chest", "details_value": "40"},
                {"measurementName": "Waist", "details_value": "34.5"}
            ]},
            {"value": "40", "size": "L", "measurements": [
                {"measurementName": "Waist", "details_value": "36"},
                {"measurementName": "Chest", "details_value": ""}
            ]}
        ]))
        .unwrap();
        SizeChart::from_rows(rows)
    }

    #[test]
    fn test_headers_come_from_first_row() {
        let c = chart();
        assert_eq!(c.headers, vec!["Chest", "Waist"]);
        assert_eq!(c.cells(&c.rows[1], Unit::Inch), vec!["-", "36"]);
    }

    #[test]
    fn test_centimetres_have_one_decimal() {
        let c = chart();
        assert_eq!(c.cells(&c.rows[0], Unit::Centimetre), vec!["101.6", "87.6"]);
        assert_eq!(Unit::Centimetre.format(Some("n/a")), "-");
        assert_eq!(Unit::Inch.format(None), "-");
    }

    #[test]
    fn test_empty_chart() {
        let c = SizeChart::from_rows(Vec::new());
        assert!(c.is_empty());
        assert!(c.headers.is_empty());
    }
}
