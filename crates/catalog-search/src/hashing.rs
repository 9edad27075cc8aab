use sha2::{Digest, Sha256};

use crate::catalog::Catalog;

pub type EncodeError = ciborium::ser::Error<std::io::Error>;

/// Catalog version fingerprint: sha256 over length-prefixed CBOR encodings of
/// every product then every category, in catalog order. Equal catalogs hash equal.
pub fn catalog_fingerprint(catalog: &Catalog) -> Result<[u8; 32], EncodeError> {
    let mut hasher = Sha256::new();
    let mut buf = Vec::new();

    hasher.update((catalog.products.len() as u64).to_be_bytes());
    for product in &catalog.products {
        buf.clear();
        ciborium::ser::into_writer(product, &mut buf)?;
        hasher.update((buf.len() as u64).to_be_bytes());
        hasher.update(&buf);
    }

    hasher.update((catalog.categories.len() as u64).to_be_bytes());
    for category in &catalog.categories {
        buf.clear();
        ciborium::ser::into_writer(category, &mut buf)?;
        hasher.update((buf.len() as u64).to_be_bytes());
        hasher.update(&buf);
    }

    Ok(hasher.finalize().into())
}
