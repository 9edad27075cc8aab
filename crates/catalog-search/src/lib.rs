//! Text search and material categorization for the furniture storefront.
//!
//! Accent-insensitive Greek/English matching over an in-memory catalog,
//! first-match-wins material taxonomy, facet aggregation for the filter
//! panel, and listing filter/sort. Every operation is a pure function of its
//! inputs; the builtin taxonomy is a read-only static.

pub mod aggregation;
pub mod catalog;
pub mod error;
pub mod facets;
pub mod hashing;
pub mod listing;
pub mod matching;
pub mod normalization;
pub mod search;
pub mod taxonomy;
pub mod tokenization;
pub mod types;

pub use aggregation::{aggregate, product_matches_category, CategoryCount};
pub use matching::{matches, matches_any};
pub use normalization::normalize;
pub use search::{debug_matches, product_matches};
pub use taxonomy::{categorize, Taxonomy};
pub use tokenization::tokenize;
