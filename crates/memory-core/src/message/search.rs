//! Keyword matching for message search

/// Whether `content` contains any whitespace-separated token of `keywords`
///
/// Matching is case-insensitive substring matching; an input with no
/// tokens matches nothing.
pub fn matches_keywords(content: &str, keywords: &str) -> bool {
    let content = content.to_lowercase();
    keywords
        .to_lowercase()
        .split_whitespace()
        .any(|token| content.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_token_matches() {
        assert!(matches_keywords("Hello there", "hello world"));
        assert!(matches_keywords("the whole WORLD", "hello world"));
        assert!(!matches_keywords("goodbye", "hello world"));
    }

    #[test]
    fn test_substring_not_word_boundary() {
        assert!(matches_keywords("unhelpful", "help"));
    }

    #[test]
    fn test_blank_keywords_match_nothing() {
        assert!(!matches_keywords("anything", ""));
        assert!(!matches_keywords("anything", "   \t "));
    }
}
