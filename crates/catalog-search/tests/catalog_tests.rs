mod fixtures;

use catalog_search::catalog::Catalog;
use catalog_search::error::CatalogError;

#[test]
fn from_json_reads_camel_case_fields() {
    let json = r#"{
        "products": [{
            "id": "42",
            "name": "Ντουλάπι",
            "nameEn": "Cabinet",
            "colors": ["White"],
            "materials": ["Corian"],
            "basePrice": 780.5,
            "salePrice": 650,
            "featured": true
        }],
        "categories": [{ "slug": "cabinets", "name": "Ντουλάπια", "nameEn": "Cabinets" }]
    }"#;

    let catalog = Catalog::from_json(json).unwrap();
    let product = &catalog.products[0];
    assert_eq!(product.name_en, "Cabinet");
    assert_eq!(product.effective_price(), 650.0);
    assert!(product.tags.is_none());
    assert!(product.features.is_empty());
    assert_eq!(catalog.categories[0].name_en, "Cabinets");
}

#[test]
fn from_json_rejects_garbage() {
    assert!(matches!(
        Catalog::from_json("{ not json"),
        Err(CatalogError::Json(_))
    ));
}

#[test]
fn from_cbor_reads_encoded_snapshot() {
    let catalog = fixtures::catalog();
    let mut bytes = Vec::new();
    ciborium::ser::into_writer(&catalog, &mut bytes).unwrap();
    assert_eq!(Catalog::from_cbor(&bytes).unwrap(), catalog);
}

#[test]
fn from_cbor_rejects_truncated_input() {
    let catalog = fixtures::catalog();
    let mut bytes = Vec::new();
    ciborium::ser::into_writer(&catalog, &mut bytes).unwrap();
    bytes.truncate(bytes.len() / 2);
    assert!(matches!(
        Catalog::from_cbor(&bytes),
        Err(CatalogError::Cbor(_))
    ));
}
