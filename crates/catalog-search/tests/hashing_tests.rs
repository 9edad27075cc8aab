mod fixtures;

use catalog_search::catalog::Catalog;
use catalog_search::hashing::*;

#[test]
fn fingerprint_deterministic() {
    let h1 = catalog_fingerprint(&fixtures::catalog()).unwrap();
    let h2 = catalog_fingerprint(&fixtures::catalog()).unwrap();
    assert_eq!(h1, h2);
}

#[test]
fn fingerprint_changes_with_price() {
    let mut catalog = fixtures::catalog();
    let before = catalog_fingerprint(&catalog).unwrap();
    catalog.products[0].base_price += 1.0;
    assert_ne!(before, catalog_fingerprint(&catalog).unwrap());
}

#[test]
fn fingerprint_changes_with_categories() {
    let mut catalog = fixtures::catalog();
    let before = catalog_fingerprint(&catalog).unwrap();
    catalog.categories.pop();
    assert_ne!(before, catalog_fingerprint(&catalog).unwrap());
}

#[test]
fn fingerprint_depends_on_order() {
    let mut catalog = fixtures::catalog();
    let before = catalog_fingerprint(&catalog).unwrap();
    catalog.products.swap(0, 1);
    assert_ne!(before, catalog_fingerprint(&catalog).unwrap());
}

#[test]
fn fingerprint_empty_catalog() {
    let empty = Catalog::default();
    assert_eq!(
        catalog_fingerprint(&empty).unwrap(),
        catalog_fingerprint(&Catalog::default()).unwrap()
    );
}
