use crate::normalization::normalize;

/// Minimum token length kept by [`tokenize`]; single characters are noise.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Tokenize text into searchable words: normalize, split on whitespace,
/// hyphens, slashes and commas, drop single-character fragments.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(is_separator)
        .filter(|s| s.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '/' | ',')
}
