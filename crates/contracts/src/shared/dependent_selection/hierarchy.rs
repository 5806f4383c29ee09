//! Declarative description of a chain of dependent controls

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// One tier of a hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSpec {
    pub name: String,
    /// Tier whose selection filters this one
    #[serde(default)]
    pub parent: Option<String>,
    /// Record field compared with the parent selection
    #[serde(default)]
    pub relation_field: Option<String>,
    #[serde(default)]
    pub multi: bool,
    /// Field name used when the selection is flattened into a request body
    pub payload_key: String,
}

impl TierSpec {
    pub fn root(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            relation_field: None,
            multi: false,
            payload_key: name.to_string(),
        }
    }

    pub fn child(name: &str, parent: &str, relation_field: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: Some(parent.to_string()),
            relation_field: Some(relation_field.to_string()),
            multi: false,
            payload_key: name.to_string(),
        }
    }

    pub fn multi(mut self) -> Self {
        self.multi = true;
        self
    }

    pub fn payload_key(mut self, key: &str) -> Self {
        self.payload_key = key.to_string();
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    #[error("hierarchy has no tiers")]
    Empty,
    #[error("tier '{0}' is declared more than once")]
    DuplicateTier(String),
    #[error("tier '{tier}' depends on '{parent}', which is not declared before it")]
    UnknownParent { tier: String, parent: String },
    #[error("tier '{tier}' cannot depend on multi-select tier '{parent}'")]
    MultiSelectParent { tier: String, parent: String },
    #[error("tier '{0}' has a parent but no relation field")]
    MissingRelation(String),
    #[error("payload key '{0}' is used by more than one tier")]
    DuplicatePayloadKey(String),
}

/// Ordered, validated list of tiers.
///
/// Parents are always declared before their children, so a single forward
/// pass over `tiers` visits every tier after all of its ancestors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TierSpec>", into = "Vec<TierSpec>")]
pub struct Hierarchy {
    tiers: Vec<TierSpec>,
}

impl Hierarchy {
    pub fn new(tiers: Vec<TierSpec>) -> Result<Self, HierarchyError> {
        if tiers.is_empty() {
            return Err(HierarchyError::Empty);
        }

        Self::validate(&tiers)?;
        Ok(Self { tiers })
    }

    fn validate(tiers: &[TierSpec]) -> Result<(), HierarchyError> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut payload_keys: HashSet<&str> = HashSet::new();
        for tier in tiers {
            if let Some(parent) = tier.parent.as_deref() {
                if !seen.contains(parent) {
                    return Err(HierarchyError::UnknownParent {
                        tier: tier.name.clone(),
                        parent: parent.to_string(),
                    });
                }
                let parent_is_multi = tiers.iter().any(|t| t.name == parent && t.multi);
                if parent_is_multi {
                    return Err(HierarchyError::MultiSelectParent {
                        tier: tier.name.clone(),
                        parent: parent.to_string(),
                    });
                }
                if tier.relation_field.as_deref().map_or(true, |f| f.is_empty()) {
                    return Err(HierarchyError::MissingRelation(tier.name.clone()));
                }
            }
            if !seen.insert(tier.name.as_str()) {
                return Err(HierarchyError::DuplicateTier(tier.name.clone()));
            }
            if !payload_keys.insert(tier.payload_key.as_str()) {
                return Err(HierarchyError::DuplicatePayloadKey(tier.payload_key.clone()));
            }
        }
        Ok(())
    }

    pub fn tiers(&self) -> &[TierSpec] {
        &self.tiers
    }

    pub fn tier(&self, name: &str) -> Option<&TierSpec> {
        self.tiers.iter().find(|t| t.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tier(name).is_some()
    }

    /// Ancestors of a tier, nearest first
    pub fn ancestors(&self, name: &str) -> Vec<&TierSpec> {
        let mut result = Vec::new();
        let mut current = self.tier(name).and_then(|t| t.parent.as_deref());
        while let Some(parent_name) = current {
            match self.tier(parent_name) {
                Some(parent) => {
                    result.push(parent);
                    current = parent.parent.as_deref();
                }
                None => break,
            }
        }
        result
    }

    /// All tiers that directly or transitively depend on `name`, in declaration order
    pub fn descendants(&self, name: &str) -> Vec<&TierSpec> {
        let mut affected: HashSet<&str> = HashSet::new();
        affected.insert(name);
        let mut result = Vec::new();
        for tier in &self.tiers {
            if let Some(parent) = tier.parent.as_deref() {
                if affected.contains(parent) {
                    affected.insert(tier.name.as_str());
                    result.push(tier);
                }
            }
        }
        result
    }
}

impl TryFrom<Vec<TierSpec>> for Hierarchy {
    type Error = HierarchyError;

    fn try_from(tiers: Vec<TierSpec>) -> Result<Self, Self::Error> {
        Hierarchy::new(tiers)
    }
}

impl From<Hierarchy> for Vec<TierSpec> {
    fn from(hierarchy: Hierarchy) -> Self {
        hierarchy.tiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping_tiers() -> Vec<TierSpec> {
        vec![
            TierSpec::root("gender"),
            TierSpec::child("category", "gender", "type"),
            TierSpec::child("subcategories", "category", "category_id").multi(),
            TierSpec::child("measurements", "gender", "type").multi(),
        ]
    }

    #[test]
    fn test_descendants_follow_declaration_order() {
        let h = Hierarchy::new(mapping_tiers()).unwrap();
        let names: Vec<&str> = h.descendants("gender").iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["category", "subcategories", "measurements"]);

        let names: Vec<&str> = h.descendants("category").iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["subcategories"]);
        assert!(h.descendants("measurements").is_empty());
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let h = Hierarchy::new(mapping_tiers()).unwrap();
        let names: Vec<&str> = h.ancestors("subcategories").iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["category", "gender"]);
        assert!(h.ancestors("gender").is_empty());
    }

    #[test]
    fn test_rejects_invalid_definitions() {
        assert_eq!(Hierarchy::new(vec![]), Err(HierarchyError::Empty));

        let err = Hierarchy::new(vec![
            TierSpec::child("category", "gender", "type"),
            TierSpec::root("gender"),
        ])
        .unwrap_err();
        assert!(matches!(err, HierarchyError::UnknownParent { .. }));

        let err = Hierarchy::new(vec![
            TierSpec::root("gender"),
            TierSpec::child("subcategories", "gender", "type").multi(),
            TierSpec::child("size", "subcategories", "subcategory_id"),
        ])
        .unwrap_err();
        assert!(matches!(err, HierarchyError::MultiSelectParent { .. }));

        let err = Hierarchy::new(vec![TierSpec::root("a"), TierSpec::root("a")]).unwrap_err();
        assert_eq!(err, HierarchyError::DuplicateTier("a".into()));

        let err = Hierarchy::new(vec![
            TierSpec::root("a"),
            TierSpec::root("b").payload_key("a"),
        ])
        .unwrap_err();
        assert_eq!(err, HierarchyError::DuplicatePayloadKey("a".into()));
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"[
            {"name": "type", "payload_key": "type"},
            {"name": "vendor", "parent": "type", "relation_field": "vendor_type", "payload_key": "vendor_id"}
        ]"#;
        let h: Hierarchy = serde_json::from_str(json).unwrap();
        assert_eq!(h.tiers().len(), 2);

        let bad = r#"[{"name": "vendor", "parent": "type", "relation_field": "vendor_type", "payload_key": "vendor_id"}]"#;
        assert!(serde_json::from_str::<Hierarchy>(bad).is_err());
    }
}
