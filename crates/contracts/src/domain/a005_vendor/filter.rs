//! Фильтры списка продавцов

use std::collections::BTreeMap;

/// Значения панели фильтров; пустая строка значит «все»
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorFilter {
    pub vendor_type: String,
    pub approval_status: String,
    /// "1": заблокированные, "0": активные
    pub is_banned: String,
    /// `YYYY-MM-DD`, как отдаёт `<input type="date">`
    pub from_date: String,
    pub to_date: String,
}

impl VendorFilter {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Параметры запроса списка
    pub fn to_params(&self) -> BTreeMap<String, String> {
        [
            ("vendor_type", &self.vendor_type),
            ("approval_status", &self.approval_status),
            ("is_banned", &self.is_banned),
            ("from_date", &self.from_date),
            ("to_date", &self.to_date),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| (key.to_string(), value.trim().to_string()))
        .collect()
    }

    /// Даты в ISO-формате сравниваются как строки
    pub fn date_range_error(&self) -> Option<&'static str> {
        let (from, to) = (self.from_date.trim(), self.to_date.trim());
        if !from.is_empty() && !to.is_empty() && from > to {
            Some("From date must not be after to date")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_set_filters_are_sent() {
        let filter = VendorFilter {
            vendor_type: "2".into(),
            from_date: "2026-01-01".into(),
            ..VendorFilter::default()
        };
        let params = filter.to_params();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("vendor_type").map(String::as_str), Some("2"));
        assert!(VendorFilter::default().is_empty());
        assert!(VendorFilter::default().to_params().is_empty());
    }

    #[test]
    fn test_reversed_dates_are_rejected() {
        let filter = VendorFilter {
            from_date: "2026-03-10".into(),
            to_date: "2026-03-01".into(),
            ..VendorFilter::default()
        };
        assert_eq!(filter.date_range_error(), Some("From date must not be after to date"));
        let open_ended = VendorFilter {
            from_date: "2026-03-10".into(),
            ..VendorFilter::default()
        };
        assert_eq!(open_ended.date_range_error(), None);
    }
}
