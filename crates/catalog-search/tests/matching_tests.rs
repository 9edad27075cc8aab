use catalog_search::matching::*;

#[test]
fn matches_is_case_and_accent_insensitive() {
    assert!(matches("Δρυς", "ΔΡΥΣ Vanilla"));
    assert!(matches("δεσκ", "Δέσκ"));
    assert!(matches("ΚΑΡΥΔΙΑ", "καρυδιά"));
}

#[test]
fn matches_empty_inputs() {
    assert!(!matches("", "oak"));
    assert!(!matches("oak", ""));
    assert!(!matches("", ""));
}

#[test]
fn matches_itself() {
    assert!(matches("Corian White", "Corian White"));
}

#[test]
fn substring_tier_fires_first() {
    assert_eq!(match_tier("wall", "drywall"), Some(MatchTier::Substring));
}

#[test]
fn token_tier() {
    assert_eq!(match_tier("oak white", "white, oak"), Some(MatchTier::Token));
}

#[test]
fn prefix_tier_requires_three_chars() {
    assert_eq!(match_tier("cat xyz", "category"), Some(MatchTier::Prefix));
    assert!(!matches("ca xyz", "category"));
}

#[test]
fn infix_tier_requires_four_chars() {
    assert_eq!(match_tier("big wall", "drywall panel"), Some(MatchTier::Infix));
    assert!(!matches("cat zzz", "educate"));
}

#[test]
fn single_char_tokens_never_match_by_token() {
    assert!(!matches("x q", "xylophone quartz"));
}

#[test]
fn matches_any_over_list() {
    let colors = vec!["Black".to_string(), "Natural Oak".to_string()];
    assert!(matches_any("oak", &colors));
    assert!(!matches_any("walnut", &colors));
}

#[test]
fn matches_any_empty() {
    let empty: Vec<String> = Vec::new();
    assert!(!matches_any("oak", &empty));
    assert!(!matches_any("", &["oak"]));
}
