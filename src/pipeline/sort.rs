use crate::model::{Field, Item};
use crate::pipeline::collation::collation_key;

/// Orders items by one field. Equal keys keep input order.
pub fn sort<'a>(items: &[&'a Item], key: &str) -> Vec<&'a Item> {
    let mut out = items.to_vec();
    let Some(field) = Field::from_key(key) else {
        // Every value reads as "" for an unknown key, so nothing moves.
        return out;
    };
    out.sort_by_cached_key(|item| collation_key(&item.value(field)));
    out
}
