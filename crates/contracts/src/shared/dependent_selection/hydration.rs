use super::hierarchy::Hierarchy;
use super::option::OptionId;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// How a persisted record refers to the option of one tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HydrateValue {
    /// Canonical foreign key
    Id(OptionId),
    /// Canonical foreign keys of a multi-select tier
    Ids(Vec<OptionId>),
    /// Denormalised display label, resolved by reverse lookup
    Label(String),
}

/// Tier values of a persisted entity, fed to `hydrate`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HydrationRecord {
    values: BTreeMap<String, HydrateValue>,
}

impl HydrationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, tier: &str, id: impl Into<OptionId>) -> Self {
        let id = id.into();
        if !id.is_empty() {
            self.values.insert(tier.to_string(), HydrateValue::Id(id));
        }
        self
    }

    pub fn with_optional_id(self, tier: &str, id: Option<impl Into<OptionId>>) -> Self {
        match id {
            Some(id) => self.with_id(tier, id),
            None => self,
        }
    }

    pub fn with_ids<I, T>(mut self, tier: &str, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OptionId>,
    {
        let ids: Vec<OptionId> = ids.into_iter().map(Into::into).filter(|id| !id.is_empty()).collect();
        self.values.insert(tier.to_string(), HydrateValue::Ids(ids));
        self
    }

    pub fn with_label(mut self, tier: &str, label: impl Into<String>) -> Self {
        let label = label.into();
        if !label.trim().is_empty() {
            self.values.insert(tier.to_string(), HydrateValue::Label(label));
        }
        self
    }

    pub fn get(&self, tier: &str) -> Option<&HydrateValue> {
        self.values.get(tier)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read back a body produced by `DependentSelectionResolver::to_payload`
    pub fn from_payload(hierarchy: &Hierarchy, payload: &Map<String, Value>) -> Self {
        let mut record = Self::new();
        for tier in hierarchy.tiers() {
            let Some(value) = payload.get(&tier.payload_key) else {
                continue;
            };
            match value {
                Value::Array(items) => {
                    record = record.with_ids(&tier.name, items.iter().filter_map(OptionId::from_json));
                }
                other => {
                    if let Some(id) = OptionId::from_json(other) {
                        record = record.with_id(&tier.name, id);
                    }
                }
            }
        }
        record
    }
}

/// Why a tier could not be restored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HydrationMiss {
    NotFound { tier: String, value: String },
    Ambiguous { tier: String, label: String, candidates: Vec<OptionId> },
    /// Multi-select ids that are no longer candidates
    Dropped { tier: String, ids: Vec<OptionId> },
}

impl HydrationMiss {
    pub fn tier(&self) -> &str {
        match self {
            HydrationMiss::NotFound { tier, .. }
            | HydrationMiss::Ambiguous { tier, .. }
            | HydrationMiss::Dropped { tier, .. } => tier,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HydrationReport {
    pub misses: Vec<HydrationMiss>,
}

impl HydrationReport {
    pub fn is_complete(&self) -> bool {
        self.misses.is_empty()
    }

    pub fn missed(&self, tier: &str) -> bool {
        self.misses.iter().any(|m| m.tier() == tier)
    }
}
