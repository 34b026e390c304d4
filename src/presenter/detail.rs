use crate::model::Item;
use std::fmt::Write;

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

/// Full record view. Empty fields show as `-`, links only when present.
pub fn render_detail(item: &Item) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "═══ {} ═══", item.name);
    if !item.indications.is_empty() {
        let _ = writeln!(out, "{}", item.indications);
    }
    let rows = [
        ("제조사", item.manufacturer.as_str()),
        ("함량", item.strength.as_str()),
        ("제형", item.dosage_form.as_str()),
        ("분류", item.category.as_str()),
        ("위치", item.location.as_str()),
        ("메모", item.notes.as_str()),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "{:<6} {}", label, or_dash(value));
    }
    if !item.image_url.is_empty() {
        let _ = writeln!(out, "이미지  {}", item.image_url);
    }
    if !item.shelf_map_url.is_empty() {
        let _ = writeln!(out, "선반 지도 {}", item.shelf_map_url);
    }
    out
}
