//! Optimistic update of a loaded page after a successful save or delete,
//! so the table reflects the change without refetching.

use super::list::Page;

/// Row with a backend primary key
pub trait HasId {
    fn id(&self) -> i64;
}

impl<T: HasId> Page<T> {
    /// Apply the record returned by a create (`editing_id == None`) or update call.
    ///
    /// A created record is prepended and counted in `total`; an updated one
    /// replaces the row in place. Returns `false` when the updated row is not
    /// on the current page.
    pub fn apply_saved(&mut self, record: T, editing_id: Option<i64>) -> bool {
        match editing_id {
            Some(id) => match self.items.iter_mut().find(|item| item.id() == id) {
                Some(slot) => {
                    *slot = record;
                    true
                }
                None => false,
            },
            None => {
                self.items.insert(0, record);
                self.pagination.record_inserted();
                true
            }
        }
    }

    /// Drop a deleted row; `total` never goes below zero
    pub fn apply_deleted(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        let removed = self.items.len() != before;
        if removed {
            self.pagination.record_removed();
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::Pagination;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(i64, &'static str);

    impl HasId for Row {
        fn id(&self) -> i64 {
            self.0
        }
    }

    fn page() -> Page<Row> {
        Page {
            items: vec![Row(1, "Formal"), Row(2, "Casual")],
            pagination: Pagination {
                total: 2,
                ..Pagination::default()
            },
        }
    }

    #[test]
    fn test_create_prepends_and_counts() {
        let mut p = page();
        assert!(p.apply_saved(Row(3, "Gown"), None));
        assert_eq!(p.items[0], Row(3, "Gown"));
        assert_eq!(p.pagination.total, 3);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut p = page();
        assert!(p.apply_saved(Row(2, "Smart casual"), Some(2)));
        assert_eq!(p.items, vec![Row(1, "Formal"), Row(2, "Smart casual")]);
        assert_eq!(p.pagination.total, 2);

        assert!(!p.apply_saved(Row(9, "Elsewhere"), Some(9)));
        assert_eq!(p.items.len(), 2);
    }

    #[test]
    fn test_delete_removes_and_never_underflows() {
        let mut p = page();
        assert!(p.apply_deleted(1));
        assert!(!p.apply_deleted(1));
        assert_eq!(p.pagination.total, 1);

        let mut empty: Page<Row> = Page::default();
        empty.items.push(Row(4, "Orphan"));
        assert!(empty.apply_deleted(4));
        assert_eq!(empty.pagination.total, 0);
    }
}
