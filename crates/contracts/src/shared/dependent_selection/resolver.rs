use super::hierarchy::{Hierarchy, TierSpec};
use super::hydration::{HydrateValue, HydrationMiss, HydrationRecord, HydrationReport};
use super::option::{OptionId, SelectOption};
use super::reverse_lookup::{reverse_lookup, LookupOutcome};
use super::selection::{Selection, TierValue};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown tier '{0}'")]
    UnknownTier(String),
    #[error("tier '{tier}' is not a {expected} tier")]
    WrongKind { tier: String, expected: &'static str },
    #[error("option '{id}' does not exist in tier '{tier}'")]
    UnknownOption { tier: String, id: OptionId },
    #[error("option '{id}' is not available for tier '{tier}'")]
    NotAvailable { tier: String, id: OptionId },
}

/// Keeps a chain of dependent dropdowns consistent.
///
/// Holds the full option list of every tier and the current selection.
/// Candidates are recomputed on demand by a linear scan; any change to a tier
/// clears all of its descendants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentSelectionResolver {
    hierarchy: Hierarchy,
    options: BTreeMap<String, Vec<SelectOption>>,
    selection: Selection,
}

impl DependentSelectionResolver {
    pub fn new(hierarchy: Hierarchy) -> Self {
        Self {
            hierarchy,
            options: BTreeMap::new(),
            selection: Selection::new(),
        }
    }

    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replace the full option list of a tier.
    ///
    /// Selections that stop being candidates are pruned with the usual cascade.
    pub fn load_options(&mut self, tier: &str, options: Vec<SelectOption>) -> Result<(), SelectionError> {
        self.spec(tier)?;
        self.options.insert(tier.to_string(), options);
        self.prune();
        Ok(())
    }

    pub fn with_options(mut self, tier: &str, options: Vec<SelectOption>) -> Result<Self, SelectionError> {
        self.load_options(tier, options)?;
        Ok(self)
    }

    /// Full (unfiltered) list of a tier
    pub fn all_options(&self, tier: &str) -> &[SelectOption] {
        self.options.get(tier).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Candidates of a tier under the current upstream selections.
    ///
    /// Root tiers return their full list. Empty when any ancestor is unset or
    /// the tier is unknown.
    pub fn get_options(&self, tier: &str) -> Vec<&SelectOption> {
        let Some(spec) = self.hierarchy.tier(tier) else {
            return Vec::new();
        };
        let all = self.all_options(tier);
        let Some(parent) = spec.parent.as_deref() else {
            return all.iter().collect();
        };
        let ancestors_set = self
            .hierarchy
            .ancestors(tier)
            .iter()
            .all(|a| self.selection.single(&a.name).is_some());
        if !ancestors_set {
            return Vec::new();
        }
        let Some(parent_id) = self.selection.single(parent) else {
            return Vec::new();
        };
        all.iter()
            .filter(|o| o.parent_key.as_ref() == Some(parent_id))
            .collect()
    }

    pub fn is_available(&self, tier: &str, id: &OptionId) -> bool {
        self.get_options(tier).iter().any(|o| &o.id == id)
    }

    /// A tier with no candidates is shown disabled
    pub fn is_locked(&self, tier: &str) -> bool {
        self.get_options(tier).is_empty()
    }

    pub fn selected(&self, tier: &str) -> Option<&OptionId> {
        self.selection.single(tier)
    }

    pub fn selected_option(&self, tier: &str) -> Option<&SelectOption> {
        let id = self.selection.single(tier)?;
        self.all_options(tier).iter().find(|o| &o.id == id)
    }

    pub fn selected_label(&self, tier: &str) -> Option<&str> {
        self.selected_option(tier).map(|o| o.label.as_str())
    }

    /// Selected ids of a multi-select tier, in id order
    pub fn selected_ids(&self, tier: &str) -> Vec<OptionId> {
        match self.selection.get(tier) {
            Some(TierValue::Multi(ids)) => ids.iter().cloned().collect(),
            Some(TierValue::Single(id)) => vec![id.clone()],
            None => Vec::new(),
        }
    }

    pub fn is_selected(&self, tier: &str, id: &OptionId) -> bool {
        self.selection.contains(tier, id)
    }

    /// Record the choice of a single-select tier and clear everything below it.
    ///
    /// The id must exist in the tier's full list, otherwise nothing changes.
    /// An option that belongs to another branch re-aligns the ancestors along
    /// its `parent_key` chain, so the selection never holds a non-candidate.
    pub fn set_discriminator(&mut self, tier: &str, value: Option<OptionId>) -> Result<(), SelectionError> {
        let spec = self.spec(tier)?;
        if spec.multi {
            return Err(SelectionError::WrongKind {
                tier: tier.to_string(),
                expected: "single-select",
            });
        }

        let Some(id) = value else {
            self.selection.clear(tier);
            self.clear_descendants(tier);
            return Ok(());
        };

        if !self.all_options(tier).iter().any(|o| o.id == id) {
            return Err(SelectionError::UnknownOption {
                tier: tier.to_string(),
                id,
            });
        }

        if !self.is_available(tier, &id) {
            let chain = self.ancestor_chain(tier, &id).ok_or_else(|| SelectionError::NotAvailable {
                tier: tier.to_string(),
                id: id.clone(),
            })?;
            // chain is nearest first; apply from the root down
            for (ancestor, ancestor_id) in chain.into_iter().rev() {
                if self.selection.single(&ancestor) != Some(&ancestor_id) {
                    log::debug!("tier '{}' re-aligned to '{}' for '{}'", ancestor, ancestor_id, tier);
                    self.selection.set_single(&ancestor, ancestor_id);
                    self.clear_descendants(&ancestor);
                }
            }
        }

        self.selection.set_single(tier, id);
        self.clear_descendants(tier);
        Ok(())
    }

    /// Ancestor ids implied by an option's `parent_key` chain, nearest first
    fn ancestor_chain(&self, tier: &str, id: &OptionId) -> Option<Vec<(String, OptionId)>> {
        let mut chain = Vec::new();
        let mut current_tier = tier.to_string();
        let mut current_id = id.clone();
        while let Some(parent) = self.hierarchy.tier(&current_tier)?.parent.clone() {
            let option = self.all_options(&current_tier).iter().find(|o| o.id == current_id)?;
            let parent_id = option.parent_key.clone()?;
            if !self.all_options(&parent).iter().any(|o| o.id == parent_id) {
                return None;
            }
            chain.push((parent.clone(), parent_id.clone()));
            current_tier = parent;
            current_id = parent_id;
        }
        Some(chain)
    }

    pub fn select(&mut self, tier: &str, id: impl Into<OptionId>) -> Result<(), SelectionError> {
        self.set_discriminator(tier, Some(id.into()))
    }

    /// Handle the raw value of a `<select>`; the empty placeholder clears the tier
    pub fn select_input(&mut self, tier: &str, raw: &str) -> Result<(), SelectionError> {
        self.set_discriminator(tier, OptionId::parse_input(raw))
    }

    /// Add or remove an id of a multi-select tier; returns whether it is now selected.
    ///
    /// Multi-select tiers are terminal, nothing else changes.
    pub fn toggle_multi_select(&mut self, tier: &str, id: impl Into<OptionId>) -> Result<bool, SelectionError> {
        let id = id.into();
        let spec = self.spec(tier)?;
        if !spec.multi {
            return Err(SelectionError::WrongKind {
                tier: tier.to_string(),
                expected: "multi-select",
            });
        }

        if self.selection.contains(tier, &id) {
            self.selection.remove_multi(tier, &id);
            return Ok(false);
        }
        if !self.is_available(tier, &id) {
            return Err(SelectionError::NotAvailable {
                tier: tier.to_string(),
                id,
            });
        }
        self.selection.insert_multi(tier, id);
        Ok(true)
    }

    /// Restore the selection of a persisted entity, tier by tier.
    ///
    /// Anything that cannot be matched stays unset and is listed in the report.
    pub fn hydrate(&mut self, record: &HydrationRecord) -> HydrationReport {
        self.selection.clear_all();
        let mut report = HydrationReport::default();

        let tiers: Vec<TierSpec> = self.hierarchy.tiers().to_vec();
        for tier in &tiers {
            let Some(value) = record.get(&tier.name) else {
                continue;
            };
            let resolved = self.resolve_hydrate_value(tier, value, &mut report);
            if tier.multi {
                for id in resolved {
                    self.selection.insert_multi(&tier.name, id);
                }
            } else if let Some(id) = resolved.into_iter().next() {
                self.selection.set_single(&tier.name, id);
            }
        }

        for miss in &report.misses {
            log::warn!("hydrate: tier '{}' not restored: {:?}", miss.tier(), miss);
        }
        report
    }

    fn resolve_hydrate_value(
        &self,
        tier: &TierSpec,
        value: &HydrateValue,
        report: &mut HydrationReport,
    ) -> Vec<OptionId> {
        let candidates = self.get_options(&tier.name);
        match value {
            HydrateValue::Label(label) => match reverse_lookup(candidates, label) {
                LookupOutcome::Found(id) => vec![id],
                LookupOutcome::NotFound => {
                    report.misses.push(HydrationMiss::NotFound {
                        tier: tier.name.clone(),
                        value: label.clone(),
                    });
                    Vec::new()
                }
                LookupOutcome::Ambiguous(ids) => {
                    report.misses.push(HydrationMiss::Ambiguous {
                        tier: tier.name.clone(),
                        label: label.clone(),
                        candidates: ids,
                    });
                    Vec::new()
                }
            },
            HydrateValue::Id(id) => {
                if candidates.iter().any(|o| &o.id == id) {
                    vec![id.clone()]
                } else {
                    report.misses.push(HydrationMiss::NotFound {
                        tier: tier.name.clone(),
                        value: id.to_string(),
                    });
                    Vec::new()
                }
            }
            HydrateValue::Ids(ids) => {
                let (kept, dropped): (Vec<OptionId>, Vec<OptionId>) = ids
                    .iter()
                    .cloned()
                    .partition(|id| candidates.iter().any(|o| &o.id == id));
                if !dropped.is_empty() {
                    report.misses.push(HydrationMiss::Dropped {
                        tier: tier.name.clone(),
                        ids: dropped,
                    });
                }
                if tier.multi {
                    kept
                } else {
                    kept.into_iter().take(1).collect()
                }
            }
        }
    }

    /// Clear every selection; candidate lists of dependent tiers become empty
    pub fn reset(&mut self) {
        self.selection.clear_all();
    }

    /// Flatten the selection into a request body keyed by each tier's `payload_key`.
    ///
    /// Unset tiers are omitted.
    pub fn to_payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        for tier in self.hierarchy.tiers() {
            match self.selection.get(&tier.name) {
                Some(TierValue::Single(id)) => {
                    payload.insert(tier.payload_key.clone(), Value::String(id.to_string()));
                }
                Some(TierValue::Multi(ids)) => {
                    let items = ids.iter().map(|id| Value::String(id.to_string())).collect();
                    payload.insert(tier.payload_key.clone(), Value::Array(items));
                }
                None => {}
            }
        }
        payload
    }

    /// Tiers from `required` that have no selection
    pub fn missing_required<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|tier| !self.selection.is_set(tier))
            .collect()
    }

    fn spec(&self, tier: &str) -> Result<&TierSpec, SelectionError> {
        self.hierarchy
            .tier(tier)
            .ok_or_else(|| SelectionError::UnknownTier(tier.to_string()))
    }

    fn clear_descendants(&mut self, tier: &str) {
        let names: Vec<String> = self
            .hierarchy
            .descendants(tier)
            .iter()
            .map(|t| t.name.clone())
            .collect();
        let mut cleared = 0;
        for name in names {
            if self.selection.clear(&name) {
                cleared += 1;
            }
        }
        if cleared > 0 {
            log::debug!("tier '{}' changed, cleared {} dependent tier(s)", tier, cleared);
        }
    }

    /// Drop selections that are no longer candidates, walking parents first
    fn prune(&mut self) {
        let tiers: Vec<TierSpec> = self.hierarchy.tiers().to_vec();
        for tier in &tiers {
            let candidates: Vec<OptionId> = self
                .get_options(&tier.name)
                .into_iter()
                .map(|o| o.id.clone())
                .collect();
            if tier.multi {
                let dropped = self.selection.retain_multi(&tier.name, |id| candidates.contains(id));
                if !dropped.is_empty() {
                    log::debug!("tier '{}': dropped {} stale id(s)", tier.name, dropped.len());
                }
            } else if let Some(current) = self.selection.single(&tier.name) {
                if !candidates.contains(current) {
                    log::debug!("tier '{}': stale selection '{}' cleared", tier.name, current);
                    self.selection.clear(&tier.name);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dependent_selection::TierSpec;

    fn three_tier() -> DependentSelectionResolver {
        let hierarchy = Hierarchy::new(vec![
            TierSpec::root("gender"),
            TierSpec::child("category", "gender", "type").payload_key("category_id"),
            TierSpec::child("subcategory", "category", "category_id")
                .multi()
                .payload_key("subcategory_ids"),
        ])
        .unwrap();

        DependentSelectionResolver::new(hierarchy)
            .with_options(
                "gender",
                vec![SelectOption::new("1", "Men"), SelectOption::new("2", "Women")],
            )
            .unwrap()
            .with_options(
                "category",
                vec![
                    SelectOption::new(1, "Shirts").with_parent("1"),
                    SelectOption::new(2, "Dresses").with_parent("2"),
                ],
            )
            .unwrap()
            .with_options(
                "subcategory",
                vec![
                    SelectOption::new(10, "Formal").with_parent(1),
                    SelectOption::new(11, "Casual").with_parent(1),
                    SelectOption::new(12, "Gown").with_parent(2),
                ],
            )
            .unwrap()
    }

    fn ids(options: Vec<&SelectOption>) -> Vec<&str> {
        options.into_iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_gender_category_subcategory_scenario() {
        let mut r = three_tier();
        r.select("gender", "1").unwrap();
        r.select("category", 1).unwrap();
        assert_eq!(ids(r.get_options("subcategory")), vec!["10", "11"]);

        r.toggle_multi_select("subcategory", 10).unwrap();
        r.toggle_multi_select("subcategory", 11).unwrap();
        assert_eq!(r.selected_ids("subcategory").len(), 2);

        r.select("category", 2).unwrap();
        assert!(r.selected_ids("subcategory").is_empty());
        assert_eq!(ids(r.get_options("subcategory")), vec!["12"]);
        // "Dresses" belongs to gender "2"
        assert_eq!(r.selected("gender"), Some(&OptionId::from("2")));
    }

    #[test]
    fn test_orphan_option_is_not_available() {
        let mut r = three_tier();
        r.load_options(
            "category",
            vec![
                SelectOption::new(1, "Shirts").with_parent("1"),
                SelectOption::new(3, "Sarees").with_parent("9"),
                SelectOption::new(4, "Loose"),
            ],
        )
        .unwrap();
        r.select("gender", "1").unwrap();

        for id in [3, 4] {
            assert_eq!(
                r.select("category", id),
                Err(SelectionError::NotAvailable {
                    tier: "category".into(),
                    id: OptionId::from(id)
                })
            );
        }
        assert_eq!(r.selected("gender"), Some(&OptionId::from("1")));
        assert!(r.selected("category").is_none());
    }

    #[test]
    fn test_changing_category_clears_subcategories() {
        let hierarchy = Hierarchy::new(vec![
            TierSpec::root("category"),
            TierSpec::child("subcategory", "category", "category_id").multi(),
        ])
        .unwrap();
        let mut r = DependentSelectionResolver::new(hierarchy)
            .with_options("category", vec![SelectOption::new(1, "Shirts"), SelectOption::new(2, "Dresses")])
            .unwrap()
            .with_options(
                "subcategory",
                vec![
                    SelectOption::new(10, "Formal").with_parent(1),
                    SelectOption::new(11, "Casual").with_parent(1),
                    SelectOption::new(12, "Gown").with_parent(2),
                ],
            )
            .unwrap();

        r.select("category", 1).unwrap();
        r.toggle_multi_select("subcategory", 10).unwrap();
        r.toggle_multi_select("subcategory", 11).unwrap();
        r.select("category", 2).unwrap();

        assert!(!r.selection().is_set("subcategory"));
        assert_eq!(ids(r.get_options("subcategory")), vec!["12"]);
    }

    #[test]
    fn test_options_empty_until_upstream_set() {
        let mut r = three_tier();
        assert!(r.get_options("category").is_empty());
        assert!(r.get_options("subcategory").is_empty());
        assert!(r.is_locked("category"));
        assert_eq!(r.get_options("gender").len(), 2);

        r.select("gender", "2").unwrap();
        assert_eq!(ids(r.get_options("category")), vec!["2"]);
        assert!(r.get_options("subcategory").is_empty());
        assert!(r.get_options("nope").is_empty());
    }

    #[test]
    fn test_rejects_unknown_and_wrong_kind() {
        let mut r = three_tier();
        r.select("gender", "1").unwrap();

        let err = r.select("category", 7).unwrap_err();
        assert_eq!(
            err,
            SelectionError::UnknownOption {
                tier: "category".into(),
                id: OptionId::from(7)
            }
        );
        assert!(r.selected("category").is_none());
        assert_eq!(r.selected("gender"), Some(&OptionId::from("1")));

        r.select("category", 1).unwrap();
        assert_eq!(
            r.toggle_multi_select("subcategory", 12),
            Err(SelectionError::NotAvailable {
                tier: "subcategory".into(),
                id: OptionId::from(12)
            })
        );

        assert!(matches!(
            r.toggle_multi_select("category", 1),
            Err(SelectionError::WrongKind { .. })
        ));
        assert!(matches!(
            r.select("subcategory", 10),
            Err(SelectionError::WrongKind { .. })
        ));
        assert_eq!(
            r.select("colour", 1),
            Err(SelectionError::UnknownTier("colour".into()))
        );
    }

    #[test]
    fn test_clearing_tier_with_placeholder() {
        let mut r = three_tier();
        r.select("gender", "1").unwrap();
        r.select("category", 1).unwrap();
        r.select_input("gender", "").unwrap();
        assert!(r.selection().is_empty());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut r = three_tier();
        r.select("gender", "1").unwrap();
        r.select("category", 1).unwrap();
        r.toggle_multi_select("subcategory", 11).unwrap();

        r.reset();
        let once = r.clone();
        r.reset();
        assert_eq!(r, once);
        assert!(r.selection().is_empty());
        assert!(r.get_options("category").is_empty());
        assert_eq!(r.all_options("subcategory").len(), 3);
    }

    #[test]
    fn test_payload_round_trip() {
        let mut r = three_tier();
        r.select("gender", "1").unwrap();
        r.select("category", 1).unwrap();
        r.toggle_multi_select("subcategory", 11).unwrap();
        r.toggle_multi_select("subcategory", 10).unwrap();

        let payload = r.to_payload();
        assert_eq!(
            Value::Object(payload.clone()),
            serde_json::json!({"gender": "1", "category_id": "1", "subcategory_ids": ["10", "11"]})
        );

        let expected = r.selection().clone();
        let record = HydrationRecord::from_payload(r.hierarchy(), &payload);
        r.reset();
        let report = r.hydrate(&record);
        assert!(report.is_complete());
        assert_eq!(r.selection(), &expected);
    }

    #[test]
    fn test_hydrate_leaves_unknown_ids_unset() {
        let mut r = three_tier();
        let record = HydrationRecord::new()
            .with_id("gender", "1")
            .with_id("category", 99)
            .with_ids("subcategory", [10, 11]);
        let report = r.hydrate(&record);

        assert_eq!(r.selected("gender"), Some(&OptionId::from("1")));
        assert!(r.selected("category").is_none());
        assert!(r.selected_ids("subcategory").is_empty());
        assert!(report.missed("category"));
        assert!(report.missed("subcategory"));
    }

    #[test]
    fn test_reloading_options_prunes_stale_selection() {
        let mut r = three_tier();
        r.select("gender", "1").unwrap();
        r.select("category", 1).unwrap();
        r.toggle_multi_select("subcategory", 10).unwrap();
        r.toggle_multi_select("subcategory", 11).unwrap();

        r.load_options(
            "subcategory",
            vec![SelectOption::new(11, "Casual").with_parent(1)],
        )
        .unwrap();
        assert_eq!(r.selected_ids("subcategory"), vec![OptionId::from(11)]);

        r.load_options("category", vec![SelectOption::new(2, "Dresses").with_parent("2")])
            .unwrap();
        assert!(r.selected("category").is_none());
        assert!(r.selected_ids("subcategory").is_empty());
    }

    #[test]
    fn test_missing_required() {
        let mut r = three_tier();
        r.select("gender", "1").unwrap();
        assert_eq!(
            r.missing_required(&["gender", "category", "subcategory"]),
            vec!["category", "subcategory"]
        );
    }
}
