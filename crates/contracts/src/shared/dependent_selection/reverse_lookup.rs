//! Matching a stored display name back to an option id.
//!
//! Some records keep a denormalised label (a deal stores the vendor *name*,
//! not its id). Editing such a record needs the id to filter the next tier.

use super::option::{OptionId, SelectOption};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(OptionId),
    NotFound,
    /// Several candidates carry the same label
    Ambiguous(Vec<OptionId>),
}

impl LookupOutcome {
    pub fn found(&self) -> Option<&OptionId> {
        match self {
            LookupOutcome::Found(id) => Some(id),
            _ => None,
        }
    }
}

/// Find the candidate whose label equals `label`.
///
/// Exact match (ignoring surrounding whitespace) wins; when there is none a
/// case-insensitive match is tried. More than one hit is ambiguous.
pub fn reverse_lookup<'a, I>(candidates: I, label: &str) -> LookupOutcome
where
    I: IntoIterator<Item = &'a SelectOption>,
{
    let wanted = label.trim();
    if wanted.is_empty() {
        return LookupOutcome::NotFound;
    }

    let candidates: Vec<&SelectOption> = candidates.into_iter().collect();

    let exact: Vec<&OptionId> = candidates
        .iter()
        .filter(|o| o.label.trim() == wanted)
        .map(|o| &o.id)
        .collect();
    if let Some(outcome) = outcome_of(&exact) {
        return outcome;
    }

    let wanted_lower = wanted.to_lowercase();
    let loose: Vec<&OptionId> = candidates
        .iter()
        .filter(|o| o.label.trim().to_lowercase() == wanted_lower)
        .map(|o| &o.id)
        .collect();
    outcome_of(&loose).unwrap_or(LookupOutcome::NotFound)
}

fn outcome_of(hits: &[&OptionId]) -> Option<LookupOutcome> {
    match hits {
        [] => None,
        [single] => Some(LookupOutcome::Found((*single).clone())),
        many => Some(LookupOutcome::Ambiguous(
            many.iter().map(|id| (*id).clone()).collect(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendors() -> Vec<SelectOption> {
        vec![
            SelectOption::new(1, "Asha Studio"),
            SelectOption::new(2, "Kiran"),
            SelectOption::new(3, "kiran"),
            SelectOption::new(4, "Meera"),
            SelectOption::new(5, "Meera"),
        ]
    }

    #[test]
    fn test_exact_match_wins_over_case_insensitive() {
        let v = vendors();
        assert_eq!(reverse_lookup(&v, "Kiran"), LookupOutcome::Found(OptionId::from(2)));
        assert_eq!(reverse_lookup(&v, " asha studio "), LookupOutcome::Found(OptionId::from(1)));
    }

    #[test]
    fn test_missing_and_ambiguous_names() {
        let v = vendors();
        assert_eq!(reverse_lookup(&v, "Nobody"), LookupOutcome::NotFound);
        assert_eq!(reverse_lookup(&v, ""), LookupOutcome::NotFound);
        assert_eq!(
            reverse_lookup(&v, "Meera"),
            LookupOutcome::Ambiguous(vec![OptionId::from(4), OptionId::from(5)])
        );
        assert_eq!(
            reverse_lookup(&v, "KIRAN"),
            LookupOutcome::Ambiguous(vec![OptionId::from(2), OptionId::from(3)])
        );
    }
}
