// Pipeline module: filter -> sort -> group over an immutable item list.

pub mod collation;
pub mod filter;
pub mod group;
pub mod sort;

use crate::model::{Item, ViewEntry};
use tracing::debug;

/// Snapshot of the UI controls. Every change produces a new request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRequest {
    pub query: String,
    pub sort_key: String,
    pub group_key: Option<String>,
    pub category: Option<String>,
}

impl Default for ViewRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort_key: "name".to_string(),
            group_key: None,
            category: None,
        }
    }
}

/// Display-ready sequence handed to the presenter.
#[derive(Debug, Clone, PartialEq)]
pub struct View<'a> {
    pub entries: Vec<ViewEntry<'a>>,
    pub item_count: usize,
}

impl View<'_> {
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

/// Recomputes the whole view from the source list and the request.
pub fn build_view<'a>(items: &'a [Item], request: &ViewRequest) -> View<'a> {
    let all: Vec<&Item> = items.iter().collect();
    let in_category = filter::filter_category(&all, request.category.as_deref());
    let matched = filter::filter(&in_category, &request.query);
    let sorted = sort::sort(&matched, &request.sort_key);

    let entries = match request.group_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => group::group(&sorted, key),
        _ => sorted.into_iter().map(ViewEntry::Item).collect(),
    };
    let item_count = group::item_count(&entries);
    debug!(
        "View rebuilt: query={:?} sort={} group={:?} -> {} items",
        request.query, request.sort_key, request.group_key, item_count
    );

    View { entries, item_count }
}
