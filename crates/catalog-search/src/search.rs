use crate::matching::{matches, matches_any};
use crate::normalization::normalize;
use crate::types::SearchableDocument;

/// Check whether a product matches a search term across all searchable fields.
///
/// An empty or whitespace-only term applies no filter and always matches.
/// Fields are checked in a fixed order: names, descriptions, colors,
/// materials, features, tags, category, subcategory. Absent fields are skipped.
pub fn product_matches(doc: &SearchableDocument<'_>, term: &str) -> bool {
    if normalize(term).is_empty() {
        return true;
    }

    matches(term, doc.name)
        || matches(term, doc.name_en)
        || matches(term, doc.description)
        || doc.description_en.is_some_and(|d| matches(term, d))
        || matches_any(term, doc.colors)
        || matches_any(term, doc.materials)
        || matches_any(term, doc.features)
        || doc.tags.is_some_and(|tags| matches_any(term, tags))
        || doc.category.is_some_and(|c| matches(term, c))
        || doc.subcategory.is_some_and(|s| matches(term, s))
}

/// List every field value that matches `term` on its own. Diagnostics only.
pub fn debug_matches(doc: &SearchableDocument<'_>, term: &str) -> Vec<String> {
    let mut hits = Vec::new();

    if matches(term, doc.name) {
        hits.push(format!("Name: {}", doc.name));
    }
    if matches(term, doc.name_en) {
        hits.push(format!("Name EN: {}", doc.name_en));
    }
    if matches(term, doc.description) {
        hits.push("Description".to_string());
    }
    if doc.description_en.is_some_and(|d| matches(term, d)) {
        hits.push("Description EN".to_string());
    }
    push_list_hits(&mut hits, "Color", doc.colors, term);
    push_list_hits(&mut hits, "Material", doc.materials, term);
    push_list_hits(&mut hits, "Feature", doc.features, term);
    if let Some(tags) = doc.tags {
        push_list_hits(&mut hits, "Tag", tags, term);
    }
    if let Some(category) = doc.category.filter(|c| matches(term, c)) {
        hits.push(format!("Category: {category}"));
    }
    if let Some(subcategory) = doc.subcategory.filter(|s| matches(term, s)) {
        hits.push(format!("Subcategory: {subcategory}"));
    }

    tracing::debug!("debug search for {:?} on {:?}: {} hits", term, doc.name, hits.len());
    hits
}

fn push_list_hits(hits: &mut Vec<String>, label: &str, values: &[String], term: &str) {
    for value in values {
        if matches(term, value) {
            hits.push(format!("{label}: {value}"));
        }
    }
}
