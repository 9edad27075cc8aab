//! Facet option builders for the storefront filter panel.
//!
//! Everything here is a pure function of the product list; [`FacetCache`]
//! memoizes the whole bundle per catalog fingerprint.

use std::collections::HashMap;

use serde::Serialize;

use crate::aggregation::CategoryCount;
use crate::catalog::Catalog;
use crate::hashing::catalog_fingerprint;
use crate::normalization::normalize_label;
use crate::taxonomy::Taxonomy;
use crate::types::{Category, Language, Product};

/// Raw material labels longer than this are shortened for display.
pub const MAX_MATERIAL_LABEL_CHARS: usize = 30;
const TRUNCATED_MATERIAL_CHARS: usize = 27;

/// Slug of the synthetic "everything" category.
pub const ALL_CATEGORY_SLUG: &str = "all";
const ALL_CATEGORY_NAME: &str = "Probagno";

const UNKNOWN_SWATCH_HEX: &str = "#D4D4D8";
const MULTICOLOR_HEX: &str = "linear-gradient(135deg, #FF6B6B, #4ECDC4, #FFE66D)";

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SwatchPattern {
    Texture,
    Gradient,
}

/// How a color option is drawn.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ColorSwatch {
    pub hex: String,
    pub pattern: Option<SwatchPattern>,
    pub label: String,
}

// Lookup order matters for the containment fallback.
const COLOR_TABLE: &[(&str, &str, Option<SwatchPattern>, &str)] = &[
    ("white", "#FFFFFF", None, "Λευκό"),
    ("λευκό", "#FFFFFF", None, "Λευκό"),
    ("λευκό γυαλιστερό", "#FFFFFF", None, "Λευκό Γυαλ."),
    ("corian white", "#F5F5F5", None, "Corian"),
    ("corian", "#F0EDE8", None, "Corian"),
    ("black", "#1a1a1a", None, "Μαύρο"),
    ("μαύρο", "#1a1a1a", None, "Μαύρο"),
    ("anthracite", "#383838", None, "Ανθρακί"),
    ("ανθρακί", "#454545", None, "Ανθρακί"),
    ("interior grey", "#8B8B8B", None, "Γκρι"),
    ("γκρι", "#8B8B8B", None, "Γκρι"),
    ("oak vanilla", "#D4C4A8", None, "Δρυς Βανίλια"),
    ("natural oak", "#C4A77D", None, "Φυσική Δρυς"),
    ("oak", "#B8956C", None, "Δρυς"),
    ("δρυς", "#B8956C", None, "Δρυς"),
    ("walnut", "#5D4037", None, "Καρυδιά"),
    ("καρυδιά", "#5D4037", None, "Καρυδιά"),
    ("matrix/s4", "#E8E4DE", Some(SwatchPattern::Texture), "Matrix/S4"),
    ("lacquer gloss", "#FAFAFA", None, "Λάκα Γυαλ."),
    ("lacquer gloss white", "#FFFFFF", None, "Λάκα Λευκή"),
    ("mdf veneer", "#C9B896", None, "MDF Καπλαμάς"),
    ("χρωματιστό", MULTICOLOR_HEX, Some(SwatchPattern::Gradient), "Χρωματιστό"),
    ("χρωματιστό γυαλιστερό", MULTICOLOR_HEX, Some(SwatchPattern::Gradient), "Χρωματιστό"),
];

/// Resolve a color name to its swatch: exact key, then the first key that
/// contains or is contained in the name, else a neutral grey labelled as-is.
pub fn color_swatch(name: &str) -> ColorSwatch {
    let normalized = normalize_label(name);

    let entry = COLOR_TABLE
        .iter()
        .find(|(key, ..)| *key == normalized)
        .or_else(|| {
            COLOR_TABLE
                .iter()
                .find(|(key, ..)| normalized.contains(key) || key.contains(normalized.as_str()))
        });

    match entry {
        Some((_, hex, pattern, label)) => ColorSwatch {
            hex: hex.to_string(),
            pattern: *pattern,
            label: label.to_string(),
        },
        None => ColorSwatch {
            hex: UNKNOWN_SWATCH_HEX.to_string(),
            pattern: None,
            label: name.to_string(),
        },
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ColorFacet {
    /// Lowercased, trimmed color name; the filter value.
    pub value: String,
    pub swatch: ColorSwatch,
    pub count: usize,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct MaterialOption {
    /// Trimmed material label; the filter value.
    pub value: String,
    pub label: String,
    pub count: usize,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CategoryFacet {
    pub slug: String,
    pub name: String,
    pub name_en: String,
    pub count: usize,
}

impl CategoryFacet {
    pub fn label(&self, language: Language) -> &str {
        match language {
            Language::El => self.name.as_str(),
            Language::En => self.name_en.as_str(),
        }
    }
}

/// Count occurrences of keyed values, keeping first-seen order, sorted by count desc.
fn count_sorted(values: impl IntoIterator<Item = String>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for value in values {
        match index.get(&value).copied() {
            Some(i) => counts[i].1 += 1,
            None => {
                index.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub fn color_facets(products: &[Product]) -> Vec<ColorFacet> {
    let colors = products
        .iter()
        .flat_map(|p| p.colors.iter().map(|c| normalize_label(c)));

    count_sorted(colors)
        .into_iter()
        .map(|(value, count)| ColorFacet {
            swatch: color_swatch(&value),
            value,
            count,
        })
        .collect()
}

pub fn material_options(products: &[Product]) -> Vec<MaterialOption> {
    let materials = products
        .iter()
        .flat_map(|p| p.materials.iter().map(|m| m.trim().to_string()));

    count_sorted(materials)
        .into_iter()
        .map(|(value, count)| MaterialOption {
            label: truncate_label(&value),
            value,
            count,
        })
        .collect()
}

fn truncate_label(label: &str) -> String {
    if label.chars().count() <= MAX_MATERIAL_LABEL_CHARS {
        return label.to_string();
    }
    let head: String = label.chars().take(TRUNCATED_MATERIAL_CHARS).collect();
    format!("{head}...")
}

/// Material options rolled up into taxonomy categories.
pub fn material_category_facets(products: &[Product], taxonomy: &Taxonomy) -> Vec<CategoryCount> {
    let pairs: Vec<(String, usize)> = material_options(products)
        .into_iter()
        .map(|o| (o.value, o.count))
        .collect();
    taxonomy.aggregate(&pairs)
}

/// Storefront category list: a synthetic "all" entry, then every real
/// category with the number of products filed under it by category or tag.
pub fn tag_category_facets(products: &[Product], categories: &[Category]) -> Vec<CategoryFacet> {
    let mut facets = vec![CategoryFacet {
        slug: ALL_CATEGORY_SLUG.to_string(),
        name: ALL_CATEGORY_NAME.to_string(),
        name_en: ALL_CATEGORY_NAME.to_string(),
        count: products.len(),
    }];

    facets.extend(
        categories
            .iter()
            .filter(|c| c.slug != ALL_CATEGORY_SLUG && !c.name.contains("(all)"))
            .map(|c| CategoryFacet {
                slug: c.slug.clone(),
                name: c.name.clone(),
                name_en: c.name_en.clone(),
                count: products
                    .iter()
                    .filter(|p| p.category.as_deref() == Some(c.slug.as_str()) || p.has_tag(&c.slug))
                    .count(),
            }),
    );
    facets
}

/// Every facet list the filter panel renders.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CatalogFacets {
    pub categories: Vec<CategoryFacet>,
    pub colors: Vec<ColorFacet>,
    pub materials: Vec<MaterialOption>,
    pub material_categories: Vec<CategoryCount>,
}

impl CatalogFacets {
    pub fn build(catalog: &Catalog, taxonomy: &Taxonomy) -> Self {
        Self {
            categories: tag_category_facets(&catalog.products, &catalog.categories),
            colors: color_facets(&catalog.products),
            materials: material_options(&catalog.products),
            material_categories: material_category_facets(&catalog.products, taxonomy),
        }
    }
}

/// Memoizes [`CatalogFacets`] for the most recent catalog version.
pub struct FacetCache<'t> {
    taxonomy: &'t Taxonomy,
    entry: Option<([u8; 32], CatalogFacets)>,
}

impl<'t> FacetCache<'t> {
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        Self {
            taxonomy,
            entry: None,
        }
    }

    /// Facets for `catalog`, rebuilt only when its fingerprint changed.
    pub fn facets(&mut self, catalog: &Catalog) -> CatalogFacets {
        let fingerprint = match catalog_fingerprint(catalog) {
            Ok(fp) => fp,
            Err(e) => {
                tracing::warn!("catalog fingerprint failed, facets not cached: {}", e);
                self.entry = None;
                return CatalogFacets::build(catalog, self.taxonomy);
            }
        };

        if let Some((cached, facets)) = &self.entry {
            if *cached == fingerprint {
                tracing::debug!("facet cache hit");
                return facets.clone();
            }
        }

        tracing::debug!("facet cache miss, rebuilding for {} products", catalog.products.len());
        let facets = CatalogFacets::build(catalog, self.taxonomy);
        self.entry = Some((fingerprint, facets.clone()));
        facets
    }

    pub fn is_cached(&self, catalog: &Catalog) -> bool {
        match (&self.entry, catalog_fingerprint(catalog)) {
            (Some((cached, _)), Ok(fp)) => *cached == fp,
            _ => false,
        }
    }
}
