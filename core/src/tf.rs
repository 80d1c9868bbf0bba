use std::collections::HashMap;

/// Count occurrences of each distinct token. Empty tokens are skipped, so the
/// counts sum to the number of non-empty tokens and every entry is >= 1.
pub fn raw_frequency(tokens: &[String]) -> HashMap<String, u32> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for token in tokens {
        if token.is_empty() {
            continue;
        }
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}

/// Rescale raw counts into (0, 1] by dividing each by the highest count.
/// The divisor never drops below 1, so an empty map stays empty and no entry
/// is ever dropped or inflated past 1.0.
pub fn max_normalized(raw: &HashMap<String, u32>) -> HashMap<String, f64> {
    let highest = raw.values().copied().max().unwrap_or(1).max(1) as f64;
    raw.iter()
        .map(|(term, &count)| (term.clone(), count as f64 / highest))
        .collect()
}

/// Max-normalized term frequency of a token sequence.
pub fn term_frequency(tokens: &[String]) -> HashMap<String, f64> {
    max_normalized(&raw_frequency(tokens))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn counts_in_order_seen() {
        let raw = raw_frequency(&toks(&["cat", "mat", "cat"]));
        assert_eq!(raw.get("cat"), Some(&2));
        assert_eq!(raw.get("mat"), Some(&1));
        assert_eq!(raw.len(), 2);
    }

    #[test]
    fn empty_tokens_are_not_counted() {
        let raw = raw_frequency(&toks(&["", "cat", ""]));
        assert_eq!(raw.len(), 1);
        assert_eq!(raw.values().sum::<u32>(), 1);
    }

    #[test]
    fn mode_term_normalizes_to_one() {
        let tf = term_frequency(&toks(&["cat", "cat", "mat"]));
        assert_eq!(tf.get("cat"), Some(&1.0));
        assert_eq!(tf.get("mat"), Some(&0.5));
        assert!(tf.values().all(|&v| v > 0.0 && v <= 1.0));
    }

    #[test]
    fn empty_map_normalizes_to_empty() {
        let tf = max_normalized(&HashMap::new());
        assert!(tf.is_empty());
    }
}
