//! Best-match selection over search candidates.
//!
//! Scryfall's full-text search returns every card whose name contains the
//! query words, so a search for "Lightning Bolt" also brings back
//! "Lightning Bolt // ..." variants and unrelated cards sharing a suffix.
//! Candidates are ranked by a prefix-weighted similarity on lowercased names.

use crate::CardRecord;

/// A string similarity in `[0.0, 1.0]`, where `1.0` means identical.
pub trait Similarity: Send + Sync {
    fn score(&self, a: &str, b: &str) -> f64;
}

impl<F> Similarity for F
where
    F: Fn(&str, &str) -> f64 + Send + Sync,
{
    fn score(&self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}

/// Jaro-Winkler similarity, which boosts strings sharing a common prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinkler;

impl Similarity for JaroWinkler {
    fn score(&self, a: &str, b: &str) -> f64 {
        strsim::jaro_winkler(a, b)
    }
}

/// Pick the candidate whose name is most similar to `token`, ignoring case.
///
/// Ties keep the earliest candidate: only a strictly higher score replaces
/// the current best. A single candidate is returned without scoring.
/// Returns `None` only for an empty slice.
#[must_use]
pub fn pick_best<'a, M: Similarity + ?Sized>(
    token: &str,
    candidates: &'a [CardRecord],
    metric: &M,
) -> Option<&'a CardRecord> {
    if let [only] = candidates {
        return Some(only);
    }

    let token = token.to_lowercase();
    let mut best: Option<(&CardRecord, f64)> = None;

    for card in candidates {
        let score = metric.score(&card.name.to_lowercase(), &token);
        match best {
            Some((_, max)) if score <= max => {}
            _ => best = Some((card, score)),
        }
    }

    best.map(|(card, _)| card)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(names: &[&str]) -> Vec<CardRecord> {
        names.iter().map(|n| CardRecord::named(*n)).collect()
    }

    #[test]
    fn empty_candidates_yield_none() {
        assert!(pick_best("anything", &[], &JaroWinkler).is_none());
    }

    #[test]
    fn single_candidate_is_returned_without_scoring() {
        let list = cards(&["Totally Different"]);
        let panicking = |_: &str, _: &str| -> f64 { panic!("metric should not be called") };
        let best = pick_best("bolt", &list, &panicking);
        assert_eq!(best.map(|c| c.name.as_str()), Some("Totally Different"));
    }

    #[test]
    fn exact_name_wins_case_insensitively() {
        let list = cards(&["Lightning Strike", "Lightning Bolt", "Bolt of Lightning"]);
        let best = pick_best("LIGHTNING BOLT", &list, &JaroWinkler);
        assert_eq!(best.map(|c| c.name.as_str()), Some("Lightning Bolt"));
    }

    #[test]
    fn shared_prefix_beats_shared_suffix() {
        let list = cards(&["Shock Bolt", "Lightning Helix"]);
        let best = pick_best("lightning bolt", &list, &JaroWinkler);
        assert_eq!(best.map(|c| c.name.as_str()), Some("Lightning Helix"));
    }

    #[test]
    fn ties_keep_first_candidate() {
        let list = cards(&["Jace, the Mind Sculptor", "Jace Beleren"]);
        let flat = |_: &str, _: &str| 0.5;
        let best = pick_best("jace", &list, &flat);
        assert_eq!(best.map(|c| c.name.as_str()), Some("Jace, the Mind Sculptor"));
    }

    #[test]
    fn ties_after_a_lower_score_keep_first_maximum() {
        let list = cards(&["low", "first high", "second high"]);
        let metric = |a: &str, _: &str| if a.contains("high") { 0.9 } else { 0.1 };
        let best = pick_best("x", &list, &metric);
        assert_eq!(best.map(|c| c.name.as_str()), Some("first high"));
    }

    #[test]
    fn selection_is_deterministic() {
        let list = cards(&["Jace, the Mind Sculptor", "Jace Beleren", "Jace's Ingenuity"]);
        let first = pick_best("jace", &list, &JaroWinkler).cloned();
        for _ in 0..10 {
            assert_eq!(pick_best("jace", &list, &JaroWinkler).cloned(), first);
        }
    }

    #[test]
    fn jaro_winkler_is_bounded() {
        let metric = JaroWinkler;
        assert!((metric.score("opt", "opt") - 1.0).abs() < f64::EPSILON);
        let s = metric.score("opt", "shivan dragon");
        assert!((0.0..1.0).contains(&s));
    }
}
