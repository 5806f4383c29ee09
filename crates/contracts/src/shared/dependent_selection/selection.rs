use super::option::OptionId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Value chosen for one tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TierValue {
    Single(OptionId),
    Multi(BTreeSet<OptionId>),
}

/// Current choices, keyed by tier name.
///
/// An empty multi-select set is never stored: removing the last id removes the
/// entry, so two selections with the same choices always compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    values: BTreeMap<String, TierValue>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tier: &str) -> Option<&TierValue> {
        self.values.get(tier)
    }

    pub fn single(&self, tier: &str) -> Option<&OptionId> {
        match self.values.get(tier) {
            Some(TierValue::Single(id)) => Some(id),
            _ => None,
        }
    }

    pub fn multi(&self, tier: &str) -> Option<&BTreeSet<OptionId>> {
        match self.values.get(tier) {
            Some(TierValue::Multi(ids)) => Some(ids),
            _ => None,
        }
    }

    pub fn contains(&self, tier: &str, id: &OptionId) -> bool {
        match self.values.get(tier) {
            Some(TierValue::Single(current)) => current == id,
            Some(TierValue::Multi(ids)) => ids.contains(id),
            None => false,
        }
    }

    pub fn is_set(&self, tier: &str) -> bool {
        self.values.contains_key(tier)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TierValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn set_single(&mut self, tier: &str, id: OptionId) {
        self.values.insert(tier.to_string(), TierValue::Single(id));
    }

    /// Returns `true` if the id was not selected before
    pub(crate) fn insert_multi(&mut self, tier: &str, id: OptionId) -> bool {
        let entry = self
            .values
            .entry(tier.to_string())
            .or_insert_with(|| TierValue::Multi(BTreeSet::new()));
        if let TierValue::Multi(ids) = &mut *entry {
            return ids.insert(id);
        }
        *entry = TierValue::Multi(BTreeSet::from([id]));
        true
    }

    /// Returns `true` if the id was selected before
    pub(crate) fn remove_multi(&mut self, tier: &str, id: &OptionId) -> bool {
        let removed = match self.values.get_mut(tier) {
            Some(TierValue::Multi(ids)) => ids.remove(id),
            _ => false,
        };
        if matches!(self.values.get(tier), Some(TierValue::Multi(ids)) if ids.is_empty()) {
            self.values.remove(tier);
        }
        removed
    }

    /// Keep only the ids accepted by `keep`; returns the dropped ones
    pub(crate) fn retain_multi<F>(&mut self, tier: &str, keep: F) -> Vec<OptionId>
    where
        F: Fn(&OptionId) -> bool,
    {
        let mut dropped = Vec::new();
        if let Some(TierValue::Multi(ids)) = self.values.get_mut(tier) {
            dropped = ids.iter().filter(|id| !keep(id)).cloned().collect();
            ids.retain(|id| keep(id));
            if ids.is_empty() {
                self.values.remove(tier);
            }
        }
        dropped
    }

    pub(crate) fn clear(&mut self, tier: &str) -> bool {
        self.values.remove(tier).is_some()
    }

    pub(crate) fn clear_all(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removing_last_multi_id_unsets_tier() {
        let mut s = Selection::new();
        assert!(s.insert_multi("subcategories", OptionId::from("10")));
        assert!(!s.insert_multi("subcategories", OptionId::from("10")));
        assert!(s.is_set("subcategories"));

        assert!(s.remove_multi("subcategories", &OptionId::from("10")));
        assert!(!s.is_set("subcategories"));
        assert_eq!(s, Selection::new());
    }

    #[test]
    fn test_retain_multi_reports_dropped_ids() {
        let mut s = Selection::new();
        s.insert_multi("m", OptionId::from("1"));
        s.insert_multi("m", OptionId::from("2"));
        let dropped = s.retain_multi("m", |id| id.as_str() == "2");
        assert_eq!(dropped, vec![OptionId::from("1")]);
        assert_eq!(s.multi("m").map(|ids| ids.len()), Some(1));
    }
}
