use crate::model::{GroupHeader, Item, ViewEntry};
use crate::pipeline::collation::compare;
use std::collections::HashMap;

/// Bucket label for items with no value under the group key.
pub const EMPTY_BUCKET: &str = "(공란)";

/// Buckets items by `key`, interleaving one header per bucket.
/// Members keep their incoming order; buckets are collation-ordered.
pub fn group<'a>(items: &[&'a Item], key: &str) -> Vec<ViewEntry<'a>> {
    let mut buckets: HashMap<String, Vec<&'a Item>> = HashMap::new();
    for &item in items {
        let value = item.value_of(key).trim().to_string();
        let bucket = if value.is_empty() {
            EMPTY_BUCKET.to_string()
        } else {
            value
        };
        buckets.entry(bucket).or_default().push(item);
    }

    let mut keys: Vec<String> = buckets.keys().cloned().collect();
    keys.sort_by(|a, b| compare(a, b));

    let mut out = Vec::with_capacity(items.len() + keys.len());
    for bucket in keys {
        let members = buckets.remove(&bucket).unwrap_or_default();
        out.push(ViewEntry::Header(GroupHeader {
            label: format!("{}: {}", key, bucket),
        }));
        out.extend(members.into_iter().map(ViewEntry::Item));
    }
    out
}

/// Number of real items, headers excluded.
pub fn item_count(entries: &[ViewEntry<'_>]) -> usize {
    entries.iter().filter(|e| !e.is_header()).count()
}
