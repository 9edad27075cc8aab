use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::{Category, Product};

/// In-memory catalog snapshot handed over by the product store.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn from_json(s: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_cbor(bytes: &[u8]) -> Result<Self, CatalogError> {
        Ok(ciborium::de::from_reader(bytes)?)
    }
}
