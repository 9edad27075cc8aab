mod fixtures;

use catalog_search::facets::*;
use catalog_search::taxonomy::Taxonomy;
use catalog_search::types::Language;

#[test]
fn color_facets_count_normalized_colors() {
    let facets = color_facets(&fixtures::products());
    let values: Vec<(&str, usize)> = facets.iter().map(|f| (f.value.as_str(), f.count)).collect();
    assert_eq!(values, vec![("white", 2), ("natural oak", 1), ("black", 1)]);
    assert_eq!(facets[0].swatch.hex, "#FFFFFF");
    assert_eq!(facets[1].swatch.label, "Φυσική Δρυς");
}

#[test]
fn swatch_exact_then_containment() {
    assert_eq!(color_swatch("Corian").hex, "#F0EDE8");
    assert_eq!(color_swatch("Oak Vanilla Matt").label, "Δρυς Βανίλια");
    let textured = color_swatch("Matrix/S4");
    assert_eq!(textured.pattern, Some(SwatchPattern::Texture));
}

#[test]
fn swatch_unknown_color() {
    let swatch = color_swatch("Teal");
    assert_eq!(swatch.hex, "#D4D4D8");
    assert_eq!(swatch.label, "Teal");
    assert_eq!(swatch.pattern, None);
}

#[test]
fn material_options_count_trimmed_labels() {
    let options = material_options(&fixtures::products());
    assert_eq!(options[0].value, "Corian");
    assert_eq!(options[0].count, 2);
    assert_eq!(options.len(), 4);
}

#[test]
fn long_material_labels_are_truncated() {
    let mut product = fixtures::mirror();
    product.materials = vec!["Melamine board with extra long description".to_string()];
    let options = material_options(&[product]);
    assert_eq!(options[0].label, "Melamine board with extra l...");
    assert_eq!(options[0].label.chars().count(), 30);
    assert_eq!(options[0].value, "Melamine board with extra long description");
}

#[test]
fn material_categories_follow_priority() {
    let facets = material_category_facets(&fixtures::products(), Taxonomy::builtin());
    let keys: Vec<(&str, usize)> = facets.iter().map(|c| (c.category.as_str(), c.count)).collect();
    assert_eq!(
        keys,
        vec![("Corian", 2), ("Γυαλί", 1), ("Δρυς", 1), ("Μελαμίνη", 1)]
    );
}

#[test]
fn tag_categories_skip_synthetic_entries() {
    let catalog = fixtures::catalog();
    let facets = tag_category_facets(&catalog.products, &catalog.categories);
    let slugs: Vec<(&str, usize)> = facets.iter().map(|f| (f.slug.as_str(), f.count)).collect();
    assert_eq!(
        slugs,
        vec![
            ("all", 3),
            ("cabinets", 1),
            ("mirrors", 1),
            ("basins", 1),
            ("bathroom", 1),
        ]
    );
    assert_eq!(facets[1].label(Language::En), "Cabinets");
    assert_eq!(facets[0].label(Language::El), "Probagno");
}

#[test]
fn facet_cache_rebuilds_on_change() {
    let taxonomy = Taxonomy::builtin();
    let mut cache = FacetCache::new(taxonomy);
    let mut catalog = fixtures::catalog();

    assert!(!cache.is_cached(&catalog));
    let first = cache.facets(&catalog);
    assert!(cache.is_cached(&catalog));
    assert_eq!(cache.facets(&catalog), first);

    catalog.products.pop();
    assert!(!cache.is_cached(&catalog));
    let second = cache.facets(&catalog);
    assert_eq!(second.categories[0].count, 2);
    assert_eq!(second, CatalogFacets::build(&catalog, taxonomy));
}
