use serde::{Deserialize, Serialize};

/// Display language for category and swatch labels.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    El,
    En,
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "el" => Ok(Language::El),
            "en" => Ok(Language::En),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

/// A catalog item as supplied by the product store.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub base_price: f64,
    #[serde(default)]
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Read-only view over the searchable fields.
    pub fn searchable(&self) -> SearchableDocument<'_> {
        SearchableDocument {
            name: &self.name,
            name_en: &self.name_en,
            description: &self.description,
            description_en: self.description_en.as_deref(),
            colors: &self.colors,
            materials: &self.materials,
            features: &self.features,
            tags: self.tags.as_deref(),
            category: self.category.as_deref(),
            subcategory: self.subcategory.as_deref(),
        }
    }

    /// Sale price when set and positive, otherwise the base price.
    pub fn effective_price(&self) -> f64 {
        match self.sale_price {
            Some(p) if p > 0.0 => p,
            _ => self.base_price,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

/// Borrowed view of the fields product search looks at. Never mutated.
#[derive(Clone, Copy, Debug)]
pub struct SearchableDocument<'a> {
    pub name: &'a str,
    pub name_en: &'a str,
    pub description: &'a str,
    pub description_en: Option<&'a str>,
    pub colors: &'a [String],
    pub materials: &'a [String],
    pub features: &'a [String],
    pub tags: Option<&'a [String]>,
    pub category: Option<&'a str>,
    pub subcategory: Option<&'a str>,
}

/// A storefront category as stored in the catalog database.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub name_en: String,
}

impl Category {
    pub fn label(&self, language: Language) -> &str {
        match language {
            Language::El => self.name.as_str(),
            Language::En if self.name_en.is_empty() => self.name.as_str(),
            Language::En => self.name_en.as_str(),
        }
    }
}
