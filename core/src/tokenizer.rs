use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anything that is not a lowercase ASCII letter or digit separates terms.
    static ref NON_TERM: Regex = Regex::new(r"[^a-z0-9]+").expect("valid regex");
}

/// Tokenize text into normalized terms: lowercase, every non-alphanumeric
/// character treated as a separator, split on whitespace.
///
/// Punctuation inside a word splits it, so "fox's" yields "fox" and "s".
/// Empty or punctuation-only input yields no terms.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_TERM
        .replace_all(&lowered, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("The Brown FOX");
        assert_eq!(t, vec!["the", "brown", "fox"]);
    }

    #[test]
    fn apostrophe_splits_word() {
        assert_eq!(tokenize("the fox's den"), vec!["the", "fox", "s", "den"]);
    }

    #[test]
    fn punctuation_only_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ?!... --  ").is_empty());
    }
}
