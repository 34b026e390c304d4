use crate::model::Item;
use crate::normalizer::normalize_text;
use crate::pipeline::collation::compare;

/// Keeps items whose searchable text contains the query. Order is preserved.
pub fn filter<'a>(items: &[&'a Item], query: &str) -> Vec<&'a Item> {
    let query = normalize_text(query);
    if query.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .copied()
        .filter(|item| item.searchable_text().contains(&query))
        .collect()
}

/// Exact category match. `None` keeps everything.
pub fn filter_category<'a>(items: &[&'a Item], category: Option<&str>) -> Vec<&'a Item> {
    match category {
        None => items.to_vec(),
        Some(cat) => items
            .iter()
            .copied()
            .filter(|item| item.category == cat)
            .collect(),
    }
}

/// Distinct non-empty categories in collation order.
pub fn categories(items: &[Item]) -> Vec<String> {
    let mut cats: Vec<String> = Vec::new();
    for item in items {
        if !item.category.is_empty() && !cats.contains(&item.category) {
            cats.push(item.category.clone());
        }
    }
    cats.sort_by(|a, b| compare(a, b));
    cats
}
