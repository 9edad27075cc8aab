/// Errors loading a taxonomy override table.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("failed to parse taxonomy: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("taxonomy has no categories")]
    Empty,

    #[error("duplicate category key: {0}")]
    DuplicateKey(String),

    #[error("category {0} has no keywords")]
    NoKeywords(String),

    #[error("category {0} has a blank keyword")]
    BlankKeyword(String),
}

/// Errors decoding a catalog snapshot.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid catalog cbor: {0}")]
    Cbor(#[from] ciborium::de::Error<std::io::Error>),
}
