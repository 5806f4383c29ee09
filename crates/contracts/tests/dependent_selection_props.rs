//! Property tests for the dependent selection resolver
//!
//! Random sequences of user actions run against a four-tier form
//! (gender → category → subcategories, gender → measurements) and the
//! resolver's guarantees are checked after every step.

use contracts::shared::dependent_selection::{
    DependentSelectionResolver, Hierarchy, HydrationRecord, OptionId, SelectOption, TierSpec,
};
use proptest::prelude::*;

const GENDER: &str = "gender";
const CATEGORY: &str = "category";
const SUBCATEGORIES: &str = "subcategories";
const MEASUREMENTS: &str = "measurements";

// =============================================================================
// Fixture
// =============================================================================

fn resolver() -> DependentSelectionResolver {
    let hierarchy = Hierarchy::new(vec![
        TierSpec::root(GENDER),
        TierSpec::child(CATEGORY, GENDER, "type").payload_key("category_id"),
        TierSpec::child(SUBCATEGORIES, CATEGORY, "category_id")
            .multi()
            .payload_key("subcategory_ids"),
        TierSpec::child(MEASUREMENTS, GENDER, "type")
            .multi()
            .payload_key("measurement_ids"),
    ])
    .expect("valid hierarchy");

    let genders = (1..=3).map(|g| SelectOption::new(g, format!("Gender {}", g))).collect();
    let categories = (1..=6)
        .map(|c: i64| SelectOption::new(c, format!("Category {}", c)).with_parent((c - 1) % 3 + 1))
        .collect();
    let subcategories = (10..=21)
        .map(|s: i64| SelectOption::new(s, format!("Sub {}", s)).with_parent(s % 6 + 1))
        .collect();
    let measurements = (100..=105)
        .map(|m: i64| SelectOption::new(m, format!("Measure {}", m)).with_parent(m % 3 + 1))
        .collect();

    DependentSelectionResolver::new(hierarchy)
        .with_options(GENDER, genders)
        .and_then(|r| r.with_options(CATEGORY, categories))
        .and_then(|r| r.with_options(SUBCATEGORIES, subcategories))
        .and_then(|r| r.with_options(MEASUREMENTS, measurements))
        .expect("declared tiers")
}

#[derive(Debug, Clone)]
enum Action {
    Gender(Option<i64>),
    Category(Option<i64>),
    ToggleSubcategory(i64),
    ToggleMeasurement(i64),
    Reset,
}

/// Ids slightly outside the loaded ranges exercise the rejection paths
fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        proptest::option::of(0i64..=4).prop_map(Action::Gender),
        proptest::option::of(0i64..=7).prop_map(Action::Category),
        (9i64..=22).prop_map(Action::ToggleSubcategory),
        (99i64..=106).prop_map(Action::ToggleMeasurement),
        Just(Action::Reset),
    ]
}

fn apply(resolver: &mut DependentSelectionResolver, action: &Action) {
    // Rejected actions must leave the resolver usable; the result itself is not checked here
    let _ = match action {
        Action::Gender(id) => resolver.set_discriminator(GENDER, id.map(OptionId::from)),
        Action::Category(id) => resolver.set_discriminator(CATEGORY, id.map(OptionId::from)),
        Action::ToggleSubcategory(id) => resolver.toggle_multi_select(SUBCATEGORIES, *id).map(|_| ()),
        Action::ToggleMeasurement(id) => resolver.toggle_multi_select(MEASUREMENTS, *id).map(|_| ()),
        Action::Reset => {
            resolver.reset();
            Ok(())
        }
    };
}

fn candidate_ids(resolver: &DependentSelectionResolver, tier: &str) -> Vec<OptionId> {
    resolver.get_options(tier).iter().map(|o| o.id.clone()).collect()
}

fn chosen_ids(resolver: &DependentSelectionResolver, tier: &str) -> Vec<OptionId> {
    match resolver.selected(tier) {
        Some(id) => vec![id.clone()],
        None => resolver.selected_ids(tier),
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Every selected id of a dependent tier is one of its current candidates
    #[test]
    fn selection_stays_within_candidates(actions in prop::collection::vec(action_strategy(), 0..40)) {
        let mut r = resolver();
        for action in &actions {
            apply(&mut r, action);
            for tier in [CATEGORY, SUBCATEGORIES, MEASUREMENTS] {
                let candidates = candidate_ids(&r, tier);
                for id in chosen_ids(&r, tier) {
                    prop_assert!(candidates.contains(&id), "{} holds {} outside {:?}", tier, id, candidates);
                }
            }
        }
    }

    /// Candidates are exactly the options whose parent key equals the parent selection
    #[test]
    fn candidates_match_parent_selection(actions in prop::collection::vec(action_strategy(), 0..30)) {
        let mut r = resolver();
        for action in &actions {
            apply(&mut r, action);
        }
        for (tier, parent) in [(CATEGORY, GENDER), (SUBCATEGORIES, CATEGORY), (MEASUREMENTS, GENDER)] {
            let expected: Vec<OptionId> = match r.selected(parent) {
                Some(parent_id) => r
                    .all_options(tier)
                    .iter()
                    .filter(|o| o.parent_key.as_ref() == Some(parent_id))
                    .map(|o| o.id.clone())
                    .collect(),
                None => Vec::new(),
            };
            prop_assert_eq!(candidate_ids(&r, tier), expected);
        }
    }

    /// Toggling a multi-select tier changes nothing but that tier
    #[test]
    fn toggle_touches_only_its_tier(
        actions in prop::collection::vec(action_strategy(), 0..30),
        sub in 9i64..=22,
        measure in 99i64..=106,
    ) {
        let mut r = resolver();
        for action in &actions {
            apply(&mut r, action);
        }

        let snapshot = |r: &DependentSelectionResolver, tier: &str| (chosen_ids(r, tier), candidate_ids(r, tier));

        let before: Vec<_> = [GENDER, CATEGORY, MEASUREMENTS].iter().map(|t| snapshot(&r, t)).collect();
        let _ = r.toggle_multi_select(SUBCATEGORIES, sub);
        let after: Vec<_> = [GENDER, CATEGORY, MEASUREMENTS].iter().map(|t| snapshot(&r, t)).collect();
        prop_assert_eq!(before, after);

        let before: Vec<_> = [GENDER, CATEGORY, SUBCATEGORIES].iter().map(|t| snapshot(&r, t)).collect();
        let _ = r.toggle_multi_select(MEASUREMENTS, measure);
        let after: Vec<_> = [GENDER, CATEGORY, SUBCATEGORIES].iter().map(|t| snapshot(&r, t)).collect();
        prop_assert_eq!(before, after);
    }

    /// A second reset is a no-op
    #[test]
    fn reset_is_idempotent(actions in prop::collection::vec(action_strategy(), 0..30)) {
        let mut r = resolver();
        for action in &actions {
            apply(&mut r, action);
        }
        r.reset();
        let once = r.clone();
        r.reset();
        prop_assert_eq!(&r, &once);
        prop_assert!(r.selection().is_empty());
    }

    /// Payload → hydration record → hydrate restores the same selection
    #[test]
    fn payload_round_trip_restores_selection(actions in prop::collection::vec(action_strategy(), 0..40)) {
        let mut r = resolver();
        for action in &actions {
            apply(&mut r, action);
        }

        let payload = r.to_payload();
        let record = HydrationRecord::from_payload(r.hierarchy(), &payload);

        let mut restored = resolver();
        let report = restored.hydrate(&record);
        prop_assert!(report.is_complete());
        prop_assert_eq!(restored.selection(), r.selection());
    }
}

// =============================================================================
// Concrete scenario
// =============================================================================

#[test]
fn test_category_switch_clears_subcategories() {
    let hierarchy = Hierarchy::new(vec![
        TierSpec::root(GENDER),
        TierSpec::child(CATEGORY, GENDER, "type"),
        TierSpec::child("subcategory", CATEGORY, "category_id").multi(),
    ])
    .expect("valid hierarchy");

    let mut r = DependentSelectionResolver::new(hierarchy)
        .with_options(GENDER, vec![SelectOption::new("1", "Men"), SelectOption::new("2", "Women")])
        .and_then(|r| {
            r.with_options(
                CATEGORY,
                vec![
                    SelectOption::new(1, "Shirts").with_parent("1"),
                    SelectOption::new(2, "Dresses").with_parent("2"),
                ],
            )
        })
        .and_then(|r| {
            r.with_options(
                "subcategory",
                vec![
                    SelectOption::new(10, "Formal").with_parent(1),
                    SelectOption::new(11, "Casual").with_parent(1),
                    SelectOption::new(12, "Gown").with_parent(2),
                ],
            )
        })
        .expect("declared tiers");

    r.set_discriminator(GENDER, Some(OptionId::from("1"))).unwrap();
    r.set_discriminator(CATEGORY, Some(OptionId::from(1))).unwrap();
    let labels: Vec<&str> = r.get_options("subcategory").iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["Formal", "Casual"]);

    r.toggle_multi_select("subcategory", 10).unwrap();
    r.toggle_multi_select("subcategory", 11).unwrap();

    r.set_discriminator(CATEGORY, Some(OptionId::from(2))).unwrap();
    assert!(r.selected_ids("subcategory").is_empty());
    let labels: Vec<&str> = r.get_options("subcategory").iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["Gown"]);
    assert_eq!(r.selected(GENDER), Some(&OptionId::from("2")));
}
