use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::facets::ALL_CATEGORY_SLUG;
use crate::normalization::{normalize, normalize_label};
use crate::search::product_matches;
use crate::taxonomy::Taxonomy;
use crate::types::Product;

/// Upper bound of the price slider.
pub const DEFAULT_MAX_PRICE: f64 = 3000.0;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    Name,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(SortOrder::Featured),
            "price-asc" => Ok(SortOrder::PriceAsc),
            "price-desc" => Ok(SortOrder::PriceDesc),
            "name" => Ok(SortOrder::Name),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// Current filter panel selection.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingFilter {
    pub search: String,
    pub categories: Vec<String>,
    pub colors: Vec<String>,
    pub materials: Vec<String>,
    pub material_categories: Vec<String>,
    pub price_range: (f64, f64),
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            categories: Vec::new(),
            colors: Vec::new(),
            materials: Vec::new(),
            material_categories: Vec::new(),
            price_range: (0.0, DEFAULT_MAX_PRICE),
        }
    }
}

/// Badge counts shown next to each filter group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveFilterCounts {
    pub categories: usize,
    pub colors: usize,
    pub materials: usize,
    pub price: usize,
}

impl ActiveFilterCounts {
    pub fn total(&self) -> usize {
        self.categories + self.colors + self.materials + self.price
    }
}

impl ListingFilter {
    pub fn active_counts(&self, max_price: f64) -> ActiveFilterCounts {
        let (min, max) = self.price_range;
        ActiveFilterCounts {
            categories: self.categories.len(),
            colors: self.colors.len(),
            materials: self.materials.len() + self.material_categories.len(),
            price: usize::from(min > 0.0 || max < max_price),
        }
    }

    pub fn has_filters(&self, max_price: f64) -> bool {
        !normalize(&self.search).is_empty() || self.active_counts(max_price).total() > 0
    }

    /// True iff `product` passes every active filter group.
    pub fn accepts(&self, product: &Product, taxonomy: &Taxonomy) -> bool {
        if !product_matches(&product.searchable(), &self.search) {
            return false;
        }

        if !self.categories.is_empty()
            && !self.categories.iter().any(|slug| {
                slug == ALL_CATEGORY_SLUG
                    || product.category.as_deref() == Some(slug.as_str())
                    || product.has_tag(slug)
            })
        {
            return false;
        }

        if !self.colors.is_empty() {
            let wanted: Vec<String> = self.colors.iter().map(|c| normalize_label(c)).collect();
            if !product
                .colors
                .iter()
                .any(|c| wanted.contains(&normalize_label(c)))
            {
                return false;
            }
        }

        if !self.materials.is_empty()
            && !product
                .materials
                .iter()
                .any(|m| self.materials.iter().any(|s| s.trim() == m.trim()))
        {
            return false;
        }

        if !self.material_categories.is_empty()
            && !self
                .material_categories
                .iter()
                .any(|key| taxonomy.product_matches_category(&product.materials, key))
        {
            return false;
        }

        let price = product.effective_price();
        let (min, max) = self.price_range;
        price >= min && price <= max
    }
}

/// Products passing `filter`, in catalog order.
pub fn filter_products<'p>(
    products: &'p [Product],
    filter: &ListingFilter,
    taxonomy: &Taxonomy,
) -> Vec<&'p Product> {
    let result: Vec<&Product> = products
        .iter()
        .filter(|p| filter.accepts(p, taxonomy))
        .collect();
    tracing::debug!(
        "listing filter kept {} of {} products",
        result.len(),
        products.len()
    );
    result
}

/// Stable sort in place.
pub fn sort_products(products: &mut [&Product], order: SortOrder) {
    match order {
        SortOrder::Featured => products.sort_by_key(|p| !p.featured),
        SortOrder::PriceAsc => {
            products.sort_by(|a, b| a.effective_price().total_cmp(&b.effective_price()))
        }
        SortOrder::PriceDesc => {
            products.sort_by(|a, b| b.effective_price().total_cmp(&a.effective_price()))
        }
        SortOrder::Name => products.sort_by_cached_key(|p| normalize(&p.name)),
    }
}

/// Filter then sort: the storefront product grid.
pub fn list_products<'p>(
    products: &'p [Product],
    filter: &ListingFilter,
    order: SortOrder,
    taxonomy: &Taxonomy,
) -> Vec<&'p Product> {
    let mut result = filter_products(products, filter, taxonomy);
    sort_products(&mut result, order);
    result
}
