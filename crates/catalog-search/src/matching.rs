use crate::normalization::normalize;
use crate::tokenization::tokenize;

/// Search tokens at least this long may match the start of a target token.
pub const PREFIX_MIN_CHARS: usize = 3;
/// Search tokens at least this long may match anywhere inside a target token.
pub const INFIX_MIN_CHARS: usize = 4;

/// Which strategy produced a match, cheapest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchTier {
    /// Normalized target contains the normalized term.
    Substring,
    /// A search token equals a target token.
    Token,
    /// A target token starts with a search token.
    Prefix,
    /// A target token contains a search token (compound words).
    Infix,
}

/// Check whether `term` matches `target`.
pub fn matches(term: &str, target: &str) -> bool {
    match_tier(term, target).is_some()
}

/// Like [`matches`] but reports the strategy that fired.
pub fn match_tier(term: &str, target: &str) -> Option<MatchTier> {
    if term.is_empty() || target.is_empty() {
        return None;
    }

    if normalize(target).contains(&normalize(term)) {
        return Some(MatchTier::Substring);
    }

    let search_tokens = tokenize(term);
    let target_tokens = tokenize(target);

    for search in &search_tokens {
        let len = search.chars().count();
        for candidate in &target_tokens {
            if candidate == search {
                return Some(MatchTier::Token);
            }
            if len >= PREFIX_MIN_CHARS && candidate.starts_with(search.as_str()) {
                return Some(MatchTier::Prefix);
            }
            if len >= INFIX_MIN_CHARS && candidate.contains(search.as_str()) {
                return Some(MatchTier::Infix);
            }
        }
    }

    None
}

/// True iff `term` matches at least one of `targets`. Empty slice never matches.
pub fn matches_any<S: AsRef<str>>(term: &str, targets: &[S]) -> bool {
    if term.is_empty() {
        return false;
    }
    targets.iter().any(|t| matches(term, t.as_ref()))
}
