//! Dependent selection: chains of dropdowns where each tier's candidates
//! depend on the choice made in its parent tier.
//!
//! A [`Hierarchy`] declares the tiers, a [`DependentSelectionResolver`] holds
//! the option lists and the current [`Selection`]. The resolver never touches
//! the network; option lists are loaded by the caller.
//!
//! # Пример
//! ```rust
//! use contracts::shared::dependent_selection::*;
//!
//! let hierarchy = Hierarchy::new(vec![
//!     TierSpec::root("type"),
//!     TierSpec::child("vendor", "type", "vendor_type").payload_key("vendor_id"),
//! ])
//! .unwrap();
//!
//! let mut resolver = DependentSelectionResolver::new(hierarchy)
//!     .with_options("type", vec![SelectOption::new(1, "Shop"), SelectOption::new(2, "Designer")])
//!     .unwrap()
//!     .with_options("vendor", vec![SelectOption::new(7, "Asha").with_parent(2)])
//!     .unwrap();
//!
//! resolver.select("type", 2).unwrap();
//! assert_eq!(resolver.get_options("vendor").len(), 1);
//! ```

pub mod hierarchy;
pub mod hydration;
pub mod option;
pub mod resolver;
pub mod reverse_lookup;
pub mod selection;

pub use hierarchy::{Hierarchy, HierarchyError, TierSpec};
pub use hydration::{HydrateValue, HydrationMiss, HydrationRecord, HydrationReport};
pub use option::{options_from, OptionId, Selectable, SelectOption};
pub use resolver::{DependentSelectionResolver, SelectionError};
pub use reverse_lookup::{reverse_lookup, LookupOutcome};
pub use selection::{Selection, TierValue};
