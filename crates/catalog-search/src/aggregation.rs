use std::collections::HashMap;

use serde::Serialize;

use crate::taxonomy::Taxonomy;

/// Aggregated facet entry for one resolved material category.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub display_name: String,
    pub display_name_en: String,
    pub count: usize,
    pub priority: u32,
    /// Raw labels that rolled up into this category, in input order.
    pub raw_labels: Vec<String>,
}

impl Taxonomy {
    /// Group `(raw_label, count)` pairs by category, summing counts.
    /// Sorted by priority desc, then count desc; ties keep first-seen order.
    pub fn aggregate<S: AsRef<str>>(&self, pairs: &[(S, usize)]) -> Vec<CategoryCount> {
        let mut out: Vec<CategoryCount> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (raw, count) in pairs {
            let raw = raw.as_ref();
            let key = self.categorize(raw);

            if let Some(&i) = index.get(&key) {
                let entry = &mut out[i];
                entry.count += count;
                entry.raw_labels.push(raw.to_string());
                continue;
            }

            let (display_name, display_name_en, priority) = match self.get(&key) {
                Some(c) => (c.display_name.clone(), c.display_name_en.clone(), c.priority),
                None => (key.clone(), key.clone(), self.priority_of(&key)),
            };
            index.insert(key.clone(), out.len());
            out.push(CategoryCount {
                category: key,
                display_name,
                display_name_en,
                count: *count,
                priority,
                raw_labels: vec![raw.to_string()],
            });
        }

        out.sort_by(|a, b| b.priority.cmp(&a.priority).then(b.count.cmp(&a.count)));
        out
    }

    /// True iff any of the product's materials resolves to `category`.
    pub fn product_matches_category<S: AsRef<str>>(&self, materials: &[S], category: &str) -> bool {
        materials
            .iter()
            .any(|m| self.categorize(m.as_ref()) == category)
    }
}

/// [`Taxonomy::aggregate`] against the builtin taxonomy.
pub fn aggregate<S: AsRef<str>>(pairs: &[(S, usize)]) -> Vec<CategoryCount> {
    Taxonomy::builtin().aggregate(pairs)
}

/// [`Taxonomy::product_matches_category`] against the builtin taxonomy.
pub fn product_matches_category<S: AsRef<str>>(materials: &[S], category: &str) -> bool {
    Taxonomy::builtin().product_matches_category(materials, category)
}
