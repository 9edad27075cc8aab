use unicode_normalization::UnicodeNormalization;

/// Normalize text for search: lowercase, strip accents, fold final sigma,
/// turn slashes into spaces, collapse whitespace and trim.
///
/// Decomposition (NFD) runs before diacritics are stripped, so precomposed and
/// decomposed Greek/Latin inputs produce the same output. Idempotent.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    // Re-decompose after stripping: dropping U+034F (a starter) can leave the
    // surviving marks out of canonical order.
    let folded: String = lowered
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .nfd()
        .map(fold_char)
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercase + trim only. Used where full accent folding is not wanted
/// (material categorization, color facet keys).
pub fn normalize_label(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

fn fold_char(c: char) -> char {
    match c {
        'ς' => 'σ',
        '/' | '\\' => ' ',
        other => other,
    }
}

fn is_combining_diacritic(c: char) -> bool {
    matches!(c as u32, 0x0300..=0x036F)
}
