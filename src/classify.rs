//! Match classification for workstations present in both sources.

use std::collections::BTreeSet;

use crate::config::MatchPolicy;
use crate::constants::rendering;
use crate::types::{AgencyId, RenderedAgencies};

/// Verdict for one joined workstation: the agreement flag plus both
/// sides rendered for reporting and grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Whether the candidate set agrees with the authoritative value.
    pub matching: bool,
    /// Authoritative value, or the `None` sentinel when absent.
    pub authoritative: RenderedAgencies,
    /// Deduplicated candidate set, sorted ascending and joined with `-`,
    /// or the `None` sentinel when empty.
    pub candidates: RenderedAgencies,
}

/// Renders a candidate list into its canonical order-independent form.
/// Absent entries are dropped, duplicates collapse, and the surviving
/// values are sorted before joining.
pub fn render_candidates(candidates: &[Option<AgencyId>]) -> RenderedAgencies {
    let set: BTreeSet<&str> = candidates
        .iter()
        .flatten()
        .map(String::as_str)
        .collect();
    if set.is_empty() {
        rendering::ABSENT_SENTINEL.to_string()
    } else {
        set.into_iter()
            .collect::<Vec<_>>()
            .join(rendering::CANDIDATE_SEPARATOR)
    }
}

/// Renders an authoritative value, substituting the sentinel for absence.
pub fn render_authoritative(value: Option<&str>) -> RenderedAgencies {
    value.unwrap_or(rendering::ABSENT_SENTINEL).to_string()
}

/// Decides whether `candidates` agree with `authoritative`.
///
/// The boolean is computed on the real values; sentinel substitution
/// happens only afterward, for rendering. With a non-empty candidate
/// set and a present authoritative value, every distinct candidate must
/// equal the authoritative value. Absence on either side is resolved by
/// `policy`, except that two silent sides always match.
pub fn classify(
    authoritative: Option<&str>,
    candidates: &[Option<AgencyId>],
    policy: MatchPolicy,
) -> MatchResult {
    let set: BTreeSet<&str> = candidates
        .iter()
        .flatten()
        .map(String::as_str)
        .collect();

    let matching = match (authoritative, set.is_empty()) {
        (None, true) => true,
        (Some(_), true) => matches!(policy, MatchPolicy::VacuousAbsent),
        (None, false) => false,
        (Some(auth), false) => set.iter().all(|c| *c == auth),
    };

    MatchResult {
        matching,
        authoritative: render_authoritative(authoritative),
        candidates: render_candidates(candidates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[Option<&str>]) -> Vec<Option<AgencyId>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[test]
    fn agreement_survives_duplicates_and_absences() {
        let result = classify(
            Some("X"),
            &ids(&[Some("X"), None, Some("X")]),
            MatchPolicy::VacuousAbsent,
        );
        assert!(result.matching);
        assert_eq!(result.candidates, "X");
        assert_eq!(result.authoritative, "X");
    }

    #[test]
    fn any_disagreeing_candidate_breaks_the_match() {
        let result = classify(Some("X"), &ids(&[Some("Y")]), MatchPolicy::VacuousAbsent);
        assert!(!result.matching);

        let mixed = classify(
            Some("ARS"),
            &ids(&[Some("ARS"), Some("FSA")]),
            MatchPolicy::VacuousAbsent,
        );
        assert!(!mixed.matching);
        assert_eq!(mixed.candidates, "ARS-FSA");
    }

    #[test]
    fn rendering_is_order_independent() {
        let a = classify(
            Some("ARS"),
            &ids(&[Some("FSA"), Some("ARS")]),
            MatchPolicy::VacuousAbsent,
        );
        let b = classify(
            Some("ARS"),
            &ids(&[Some("ARS"), Some("FSA")]),
            MatchPolicy::VacuousAbsent,
        );
        assert_eq!(a.candidates, b.candidates);
        assert_eq!(a.candidates, "ARS-FSA");
    }

    #[test]
    fn both_silent_sides_match_under_either_policy() {
        for policy in [MatchPolicy::VacuousAbsent, MatchPolicy::RequireBothPresent] {
            let result = classify(None, &ids(&[None, None]), policy);
            assert!(result.matching, "policy {policy:?}");
            assert_eq!(result.authoritative, "None");
            assert_eq!(result.candidates, "None");
        }
    }

    #[test]
    fn empty_candidate_set_follows_policy() {
        let vacuous = classify(Some("X"), &ids(&[None]), MatchPolicy::VacuousAbsent);
        assert!(vacuous.matching);

        let strict = classify(Some("X"), &ids(&[None]), MatchPolicy::RequireBothPresent);
        assert!(!strict.matching);
    }

    #[test]
    fn absent_authoritative_never_matches_candidates() {
        for policy in [MatchPolicy::VacuousAbsent, MatchPolicy::RequireBothPresent] {
            let result = classify(None, &ids(&[Some("X")]), policy);
            assert!(!result.matching, "policy {policy:?}");
            assert_eq!(result.authoritative, "None");
        }
    }
}
