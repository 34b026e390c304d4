use crate::model::{Item, ViewEntry};
use crate::normalizer::{normalize_all, normalize_text};
use crate::pipeline::filter::filter;
use crate::pipeline::group::{group, item_count};
use crate::pipeline::sort::sort;
use crate::pipeline::{ViewRequest, build_view};
use proptest::prelude::*;
use serde_json::{Map, Value, json};
use std::collections::HashSet;

fn sample() -> Vec<Item> {
    normalize_all(vec![
        json!({ "name": "Tylenol", "category": "OTC" }),
        json!({ "name": "Advil", "category": "OTC" }),
        json!({ "name": "Metformin", "category": "Rx" }),
    ])
}

fn catalog() -> Vec<Item> {
    normalize_all(vec![
        json!({ "id": 1, "product_name": "타이레놀정 500mg", "brand": "한국얀센", "location_code": "A-01", "dosage_form": "정제", "category": "해열진통제", "tags": "두통,발열" }),
        json!({ "id": 2, "product_name": "게보린", "brand": "삼진제약", "location_code": "A-02", "category": "해열진통제" }),
        json!({ "id": 3, "product_name": "판콜에이", "brand": "동화약품", "location_code": "B-01", "category": "감기약", "tags": "콧물, 기침" }),
        json!({ "id": "4", "name": "Advil", "manufacturer": "Pfizer", "location": "C-10" }),
        json!({ "id": 5, "product_name": "베아제", "location_code": "B-01", "category": "소화제" }),
        json!({ "product_name": "까스활명수", "brand": "동화약품", "category": "소화제" }),
    ])
}

fn names(entries: &[ViewEntry<'_>]) -> Vec<String> {
    entries
        .iter()
        .map(|e| match e {
            ViewEntry::Header(h) => format!("header:{}", h.label),
            ViewEntry::Item(i) => i.name.clone(),
        })
        .collect()
}

#[test]
fn worked_example_filter_sort_group() {
    let items = sample();
    let refs: Vec<&Item> = items.iter().collect();

    let hits: Vec<_> = filter(&refs, "tyl").iter().map(|i| i.name.clone()).collect();
    assert_eq!(hits, vec!["Tylenol"]);

    let sorted = sort(&refs, "name");
    let sorted_names: Vec<_> = sorted.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(sorted_names, vec!["Advil", "Metformin", "Tylenol"]);

    assert_eq!(
        names(&group(&sorted, "category")),
        vec![
            "header:category: OTC",
            "Advil",
            "Tylenol",
            "header:category: Rx",
            "Metformin"
        ]
    );
}

#[test]
fn filter_results_are_a_matching_subset() {
    let items = catalog();
    let refs: Vec<&Item> = items.iter().collect();
    for q in ["", "정", "A-0", "동화", "PFIZER", "기침", "zzz", " 소화제 "] {
        let hits = filter(&refs, q);
        let needle = normalize_text(q);
        assert!(hits.len() <= refs.len());
        for hit in &hits {
            assert!(refs.iter().any(|r| std::ptr::eq(*r, *hit)));
            assert!(hit.searchable_text().contains(&needle));
        }
        // Order preserved: hits appear in source order.
        let positions: Vec<usize> = hits
            .iter()
            .map(|h| refs.iter().position(|r| std::ptr::eq(*r, *h)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn sort_is_idempotent_for_every_key() {
    let items = catalog();
    let refs: Vec<&Item> = items.iter().collect();
    for key in ["name", "location", "manufacturer", "category", "id", "dosage_form", "unknown"] {
        let once = sort(&refs, key);
        assert_eq!(sort(&once, key), once, "key {}", key);
    }
}

#[test]
fn group_is_permutation_plus_one_header_per_bucket() {
    let items = catalog();
    let refs: Vec<&Item> = items.iter().collect();
    for key in ["category", "location", "manufacturer", "strength"] {
        let entries = group(&refs, key);
        let distinct: HashSet<String> = refs
            .iter()
            .map(|i| i.value_of(key).trim().to_string())
            .collect();
        let headers = entries.iter().filter(|e| e.is_header()).count();
        assert_eq!(headers, distinct.len(), "key {}", key);
        assert_eq!(item_count(&entries), refs.len());

        let mut grouped: Vec<*const Item> = entries
            .iter()
            .filter_map(|e| e.as_item())
            .map(|i| i as *const Item)
            .collect();
        let mut source: Vec<*const Item> = refs.iter().map(|i| *i as *const Item).collect();
        grouped.sort();
        source.sort();
        assert_eq!(grouped, source);
    }
}

#[test]
fn korean_catalog_sorts_and_groups_in_hangul_order() {
    let items = catalog();
    let request = ViewRequest {
        group_key: Some("category".into()),
        ..ViewRequest::default()
    };
    let view = build_view(&items, &request);
    assert_eq!(view.item_count, 6);
    assert_eq!(
        names(&view.entries),
        vec![
            "header:category: (공란)",
            "Advil",
            "header:category: 감기약",
            "판콜에이",
            "header:category: 소화제",
            "까스활명수",
            "베아제",
            "header:category: 해열진통제",
            "게보린",
            "타이레놀정 500mg",
        ]
    );
}

#[test]
fn view_applies_category_then_query() {
    let items = catalog();
    let request = ViewRequest {
        query: "동화".into(),
        category: Some("소화제".into()),
        ..ViewRequest::default()
    };
    let view = build_view(&items, &request);
    assert_eq!(names(&view.entries), vec!["까스활명수"]);

    let none = build_view(
        &items,
        &ViewRequest {
            query: "없는약".into(),
            ..ViewRequest::default()
        },
    );
    assert!(none.is_empty());
    assert!(none.entries.is_empty());
}

#[test]
fn source_list_is_untouched_by_views() {
    let items = catalog();
    let before = items.clone();
    let _ = build_view(
        &items,
        &ViewRequest {
            query: "a".into(),
            sort_key: "location".into(),
            group_key: Some("category".into()),
            category: None,
        },
    );
    assert_eq!(items, before);
}

const KEYS: &[&str] = &[
    "name",
    "product_name",
    "location",
    "manufacturer",
    "brand",
    "category",
    "tags",
    "unknown",
];

fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("  ".to_string()),
        "[가-힣]{1,4}",
        "[a-zA-Z]{1,6}",
        "[éÉèàüÖa-z ]{1,5}",
        "[ㄱ-ㅎ0-9 -]{1,4}",
    ]
}

fn record() -> impl Strategy<Value = Value> {
    (
        prop::option::of(text()),
        prop::option::of(text()),
        prop::option::of(text()),
        prop::option::of(text()),
        prop::option::of(text()),
    )
        .prop_map(|(name, brand, location, category, tags)| {
            let mut obj = Map::new();
            for (key, value) in [
                ("product_name", name),
                ("brand", brand),
                ("location_code", location),
                ("category", category),
                ("tags", tags),
            ] {
                if let Some(v) = value {
                    obj.insert(key.to_string(), Value::String(v));
                }
            }
            Value::Object(obj)
        })
}

fn position(refs: &[&Item], item: &Item) -> Option<usize> {
    refs.iter().position(|r| std::ptr::eq(*r, item))
}

proptest! {
    #[test]
    fn empty_query_returns_everything(records in prop::collection::vec(record(), 0..12)) {
        let items = normalize_all(records);
        let refs: Vec<&Item> = items.iter().collect();
        prop_assert_eq!(filter(&refs, ""), refs);
    }

    #[test]
    fn filter_returns_ordered_matching_subset(
        records in prop::collection::vec(record(), 0..12),
        query in text(),
    ) {
        let items = normalize_all(records);
        let refs: Vec<&Item> = items.iter().collect();
        let needle = normalize_text(&query);
        let hits = filter(&refs, &query);

        let mut last = None;
        for hit in &hits {
            let pos = position(&refs, hit);
            prop_assert!(pos.is_some());
            prop_assert!(last < pos);
            last = pos;
            prop_assert!(hit.searchable_text().contains(&needle));
        }
        let expected = refs.iter().filter(|i| i.searchable_text().contains(&needle)).count();
        prop_assert_eq!(hits.len(), expected);
    }

    #[test]
    fn sort_is_idempotent(
        records in prop::collection::vec(record(), 0..12),
        key in prop::sample::select(KEYS),
    ) {
        let items = normalize_all(records);
        let refs: Vec<&Item> = items.iter().collect();
        let once = sort(&refs, key);
        prop_assert_eq!(once.len(), refs.len());
        prop_assert_eq!(sort(&once, key), once);
    }

    #[test]
    fn group_adds_one_header_per_distinct_value(
        records in prop::collection::vec(record(), 0..12),
        key in prop::sample::select(KEYS),
    ) {
        let items = normalize_all(records);
        let refs: Vec<&Item> = items.iter().collect();
        let sorted = sort(&refs, key);
        let entries = group(&sorted, key);

        let distinct: HashSet<String> = refs
            .iter()
            .map(|i| i.value_of(key).trim().to_string())
            .collect();
        let headers = entries.iter().filter(|e| e.is_header()).count();
        prop_assert_eq!(headers, distinct.len());
        prop_assert_eq!(item_count(&entries), refs.len());

        let mut seen: Vec<usize> = entries
            .iter()
            .filter_map(|e| e.as_item())
            .filter_map(|i| position(&refs, i))
            .collect();
        seen.sort();
        prop_assert_eq!(seen, (0..refs.len()).collect::<Vec<_>>());
    }
}
