use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALPHA: Regex = Regex::new(r"[^ a-zA-Z]").expect("valid regex");
    static ref LONE_CHAR: Regex = Regex::new(r" . ").expect("valid regex");
    static ref SPACE_RUN: Regex = Regex::new(r" {2,}").expect("valid regex");
}

/// Normalize raw document text into an ordered sequence of lowercase
/// alphabetic tokens.
///
/// Four rewrites run in order before splitting on single spaces: lowercase,
/// delete every character outside `[ a-zA-Z]`, delete ` . ` matches (isolated
/// single-letter tokens), delete runs of two or more spaces. The space-run
/// rewrite is a deletion, so words separated by doubled spaces merge into one
/// token. Empty tokens can appear in the output (e.g. from a leading space)
/// and are skipped later when frequencies are counted.
pub fn normalize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let alpha = NON_ALPHA.replace_all(&lowered, "");
    let pruned = LONE_CHAR.replace_all(&alpha, "");
    let packed = SPACE_RUN.replace_all(&pruned, "");
    packed.split(' ').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation() {
        let toks = normalize("Hello, world! Nice day.");
        assert_eq!(toks, vec!["hello", "world", "nice", "day"]);
    }

    #[test]
    fn deleted_digit_runs_merge_neighbors() {
        // "! 42 " leaves a double space, which the space-run deletion
        // removes entirely, joining the neighbors
        let toks = normalize("world! 42 times");
        assert_eq!(toks, vec!["worldtimes"]);
    }

    #[test]
    fn drops_isolated_single_letters() {
        let toks = normalize("the cat x sat");
        assert!(!toks.contains(&"x".to_string()));
    }

    #[test]
    fn doubled_spaces_merge_words() {
        // the 2+ space run is deleted outright, so the neighbors join
        let toks = normalize("cat  mat");
        assert_eq!(toks, vec!["catmat"]);
    }
}
