use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::TaxonomyError;
use crate::normalization::normalize_label;
use crate::types::Language;

/// Priority given to labels that fell through to the cleaned-string fallback.
pub const FALLBACK_PRIORITY: u32 = 50;

/// Vendor prefix stripped from unmatched labels, followed by two code words.
const VENDOR_PREFIX: &str = "cdf swiss krono";

/// One entry of the material taxonomy.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MaterialCategory {
    pub key: String,
    pub display_name: String,
    pub display_name_en: String,
    pub keywords: Vec<String>,
    /// Higher is shown first in facet lists.
    pub priority: u32,
}

/// Ordered material taxonomy. Resolution is first-match-wins in table order;
/// priority only affects display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Taxonomy {
    categories: Vec<MaterialCategory>,
}

#[derive(Deserialize)]
struct TaxonomyFile {
    #[serde(rename = "category", default)]
    categories: Vec<MaterialCategory>,
}

static BUILTIN: LazyLock<Taxonomy> = LazyLock::new(|| Taxonomy::new(builtin_categories()));

impl Taxonomy {
    /// Build a taxonomy from an explicit ordered list. Keywords are lowercased;
    /// blank ones are dropped since they would match every label.
    pub fn new(categories: Vec<MaterialCategory>) -> Self {
        let categories = categories
            .into_iter()
            .map(|mut c| {
                c.keywords = c
                    .keywords
                    .iter()
                    .filter(|k| !k.trim().is_empty())
                    .map(|k| k.to_lowercase())
                    .collect();
                c
            })
            .collect();
        Self { categories }
    }

    /// The fixed storefront taxonomy, initialized once.
    pub fn builtin() -> &'static Taxonomy {
        &BUILTIN
    }

    /// Load an override table:
    ///
    /// ```toml
    /// [[category]]
    /// key = "Oak"
    /// display_name = "Δρυς"
    /// display_name_en = "Oak"
    /// keywords = ["oak"]
    /// priority = 100
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, TaxonomyError> {
        let file: TaxonomyFile = toml::from_str(s)?;
        if file.categories.is_empty() {
            return Err(TaxonomyError::Empty);
        }

        let mut seen = HashSet::new();
        for category in &file.categories {
            if !seen.insert(category.key.as_str()) {
                return Err(TaxonomyError::DuplicateKey(category.key.clone()));
            }
            if category.keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(TaxonomyError::NoKeywords(category.key.clone()));
            }
            if category.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(TaxonomyError::BlankKeyword(category.key.clone()));
            }
        }

        tracing::info!("loaded taxonomy with {} categories", file.categories.len());
        Ok(Self::new(file.categories))
    }

    pub fn categories(&self) -> &[MaterialCategory] {
        &self.categories
    }

    pub fn get(&self, key: &str) -> Option<&MaterialCategory> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Resolve a raw material label to a category key. Total and deterministic:
    /// unmatched labels come back cleaned of vendor codes, or verbatim.
    pub fn categorize(&self, raw: &str) -> String {
        let normalized = normalize_label(raw);

        // Short keywords can hit inside unrelated words; table order decides.
        for category in &self.categories {
            if category
                .keywords
                .iter()
                .any(|k| normalized.contains(k.as_str()))
            {
                return category.key.clone();
            }
        }

        let cleaned = strip_vendor_codes(raw)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if cleaned.is_empty() {
            raw.to_string()
        } else {
            cleaned
        }
    }

    /// Display label for a key; unknown keys echo themselves.
    pub fn display_name<'a>(&'a self, key: &'a str, language: Language) -> &'a str {
        match self.get(key) {
            Some(c) => match language {
                Language::El => c.display_name.as_str(),
                Language::En => c.display_name_en.as_str(),
            },
            None => key,
        }
    }

    pub fn priority_of(&self, key: &str) -> u32 {
        self.get(key).map_or(FALLBACK_PRIORITY, |c| c.priority)
    }
}

/// Resolve a raw material label against the builtin taxonomy.
pub fn categorize(raw: &str) -> String {
    Taxonomy::builtin().categorize(raw)
}

/// Display label of a builtin category key.
pub fn display_name(key: &str, language: Language) -> String {
    Taxonomy::builtin().display_name(key, language).to_string()
}

/// Remove every case-insensitive `CDF Swiss Krono <code> <letters> ` run.
fn strip_vendor_codes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while !rest.is_empty() {
        match vendor_code_len(rest) {
            Some(len) => rest = &rest[len..],
            None => {
                let mut chars = rest.chars();
                if let Some(c) = chars.next() {
                    out.push(c);
                }
                rest = chars.as_str();
            }
        }
    }
    out
}

/// Byte length of a vendor code run at the start of `s`, if any.
fn vendor_code_len(s: &str) -> Option<usize> {
    let head = s.get(..VENDOR_PREFIX.len())?;
    if !head.eq_ignore_ascii_case(VENDOR_PREFIX) {
        return None;
    }

    let mut pos = VENDOR_PREFIX.len();
    pos += run_len(&s[pos..], char::is_whitespace)?;
    pos += run_len(&s[pos..], |c| c.is_ascii_alphanumeric())?;
    pos += run_len(&s[pos..], char::is_whitespace)?;
    pos += run_len(&s[pos..], |c| c.is_ascii_alphabetic())?;
    pos += run_len(&s[pos..], char::is_whitespace)?;
    Some(pos)
}

/// Length of the non-empty run of chars satisfying `pred` at the start of `s`.
fn run_len(s: &str, pred: impl Fn(char) -> bool) -> Option<usize> {
    let len: usize = s
        .chars()
        .take_while(|c| pred(*c))
        .map(char::len_utf8)
        .sum();
    (len > 0).then_some(len)
}

fn category(
    key: &str,
    display_name_en: &str,
    keywords: &[&str],
    priority: u32,
) -> MaterialCategory {
    MaterialCategory {
        key: key.to_string(),
        display_name: key.to_string(),
        display_name_en: display_name_en.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        priority,
    }
}

fn builtin_categories() -> Vec<MaterialCategory> {
    vec![
        // wood
        category(
            "Δρυς",
            "Oak",
            &[
                "oak", "δρυς", "d3700", "ov", "vanilla", "βανίλια", "βανιλια", "natural oak",
                "φυσική", "μασίφ", "massif",
            ],
            100,
        ),
        category("Καρυδιά", "Walnut", &["walnut", "καρυδιά", "καρυδια"], 95),
        // neutrals
        category(
            "Λευκό",
            "White",
            &["white", "λευκό", "λευκο", "k101", "pe white", "corian white"],
            90,
        ),
        category(
            "Γκρι",
            "Grey",
            &["grey", "gray", "γκρι", "u191", "interior grey", "interior gray"],
            85,
        ),
        category("Ανθρακί", "Anthracite", &["anthracite", "ανθρακί", "ανθρακι", "u164"], 80),
        category("Μαύρο", "Black", &["black", "μαύρο", "μαυρο", "u190", "tx black"], 75),
        // premium
        category("Corian", "Corian", &["corian", "κοριαν"], 110),
        category(
            "Γυαλί",
            "Glass",
            &["glass", "γυαλί", "γυαλι", "γυαλιστερό", "γυαλιστερο", "γλασ"],
            105,
        ),
        category("Matrix", "Matrix", &["matrix", "matrix/s4", "s4"], 102),
        // finishes
        category(
            "Λάκα",
            "Lacquer",
            &["lacquer", "λάκα", "λακα", "λακέ", "λακε", "γυαλιστερή", "γυαλιστερη"],
            95,
        ),
        category(
            "Καπλαμάς",
            "Veneer",
            &["veneer", "καπλαμάς", "καπλαμας", "καπλαμά", "καπλαμα", "κπθ", "mdf"],
            70,
        ),
        category(
            "Μελαμίνη",
            "Melamine",
            &["melamine", "μελαμίνη", "μελαμινη", "cdf", "swiss krono"],
            65,
        ),
    ]
}
