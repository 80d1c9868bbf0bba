use std::cmp::Ordering;

use crate::tagger::ScoredTerm;

/// Sort scored terms by descending score. Ranking has to hold up with the
/// negative scores a typical index produces, so the comparison is on the raw
/// float with ties (and any NaN pair) broken ascending by term, which keeps
/// the final order deterministic.
pub fn sort_by_score(scored: &mut [ScoredTerm]) {
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });
}

/// Top `n` terms by descending score. Returns `min(n, scored.len())` entries,
/// so `n == 0` yields nothing and an oversized `n` yields every term.
pub fn select_top(mut scored: Vec<ScoredTerm>, n: usize) -> Vec<String> {
    sort_by_score(&mut scored);
    scored.into_iter().take(n).map(|s| s.term).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(pairs: &[(&str, f64)]) -> Vec<ScoredTerm> {
        pairs
            .iter()
            .map(|(t, s)| ScoredTerm { term: t.to_string(), score: *s })
            .collect()
    }

    #[test]
    fn sorts_descending_across_signs() {
        let top = select_top(scored(&[("a", -5.0), ("b", 1.5), ("c", -0.5)]), 3);
        assert_eq!(top, vec!["b", "c", "a"]);
    }

    #[test]
    fn ties_break_lexicographically() {
        let top = select_top(scored(&[("zebra", -1.0), ("alpha", -1.0)]), 2);
        assert_eq!(top, vec!["alpha", "zebra"]);
    }

    #[test]
    fn n_caps_at_available_terms() {
        let top = select_top(scored(&[("a", 1.0), ("b", 2.0)]), 10);
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn zero_n_yields_empty() {
        assert!(select_top(scored(&[("a", 1.0)]), 0).is_empty());
    }
}
