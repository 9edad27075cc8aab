use catalog_search::catalog::Catalog;
use catalog_search::types::{Category, Product};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Oak vanity unit, on sale, featured.
pub fn vanity() -> Product {
    Product {
        id: "1".to_string(),
        name: "Έπιπλο μπάνιου Δρυς".to_string(),
        name_en: "Bathroom cabinet Oak".to_string(),
        description: "Ντουλάπι με συρτάρια".to_string(),
        description_en: None,
        colors: strings(&["Natural Oak", "White"]),
        materials: strings(&["Natural Oak D3700", "Corian"]),
        features: strings(&["Soft close"]),
        tags: Some(strings(&["bathroom", "cabinets"])),
        category: Some("cabinets".to_string()),
        subcategory: Some("vanity".to_string()),
        base_price: 1200.0,
        sale_price: Some(999.0),
        featured: true,
    }
}

/// Round glass mirror, full price.
pub fn mirror() -> Product {
    Product {
        id: "2".to_string(),
        name: "Καθρέπτης".to_string(),
        name_en: "Mirror".to_string(),
        description: "Στρογγυλός καθρέπτης".to_string(),
        description_en: Some("Round mirror".to_string()),
        colors: strings(&["black"]),
        materials: strings(&["Glass"]),
        features: strings(&["LED"]),
        tags: None,
        category: Some("mirrors".to_string()),
        subcategory: None,
        base_price: 250.0,
        sale_price: None,
        featured: false,
    }
}

/// Corian basin; a zero sale price means no sale.
pub fn basin() -> Product {
    Product {
        id: "3".to_string(),
        name: "Νιπτήρας Corian".to_string(),
        name_en: "Corian Basin".to_string(),
        description: "Νιπτήρας πάγκου".to_string(),
        description_en: None,
        colors: strings(&["white "]),
        materials: strings(&["Corian", "CDF Swiss Krono U999 PE Sand"]),
        features: strings(&["Overflow"]),
        tags: Some(strings(&["basins"])),
        category: Some("basins".to_string()),
        subcategory: None,
        base_price: 450.0,
        sale_price: Some(0.0),
        featured: true,
    }
}

pub fn products() -> Vec<Product> {
    vec![vanity(), mirror(), basin()]
}

fn category(slug: &str, name: &str, name_en: &str) -> Category {
    Category {
        slug: slug.to_string(),
        name: name.to_string(),
        name_en: name_en.to_string(),
    }
}

#[allow(dead_code)]
pub fn catalog() -> Catalog {
    Catalog {
        products: products(),
        categories: vec![
            category("all", "Probagno (all)", "Probagno (all)"),
            category("cabinets", "Ντουλάπια", "Cabinets"),
            category("mirrors", "Καθρέπτες", "Mirrors"),
            category("basins", "Νιπτήρες", "Basins"),
            category("bathroom", "Μπάνιο", "Bathroom"),
            category("legacy", "Probagno (all) legacy", "Legacy"),
        ],
    }
}
