// Presenter module: turns a View into terminal text.

pub mod detail;

use crate::config::CatalogOptions;
use crate::model::{Item, ViewEntry};
use crate::pipeline::View;
use crate::repository::Diagnostic;
use crate::utils::format_count;
use std::fmt::Write;

pub use detail::render_detail;

pub const EMPTY_STATE: &str = "📭 조건에 맞는 항목이 없습니다.";
const NO_IMAGE: &str = "이미지 없음";

pub fn render_view(view: &View<'_>, options: &CatalogOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}건 표시", format_count(view.item_count));
    if view.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_STATE);
        return out;
    }
    for entry in &view.entries {
        match entry {
            ViewEntry::Header(header) => {
                let _ = writeln!(out, "\n── {} ──", header.label);
            }
            ViewEntry::Item(item) => out.push_str(&render_card(item, options.thumbnails)),
        }
    }
    out
}

pub fn render_card(item: &Item, thumbnails: bool) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "📦 {}", item.name);

    let mut badges = format!("   [{}] [{}]", item.location, item.manufacturer);
    if let Some(id) = &item.id {
        let _ = write!(badges, " [#{}]", id);
    }
    let _ = writeln!(card, "{}", badges);

    let sub = item.subtitle();
    if !sub.is_empty() {
        let _ = writeln!(card, "   {}", sub);
    }
    if !item.tags.is_empty() {
        let tags: Vec<String> = item.tags.iter().map(|t| format!("#{}", t)).collect();
        let _ = writeln!(card, "   {}", tags.join(" "));
    }
    if thumbnails {
        let _ = writeln!(card, "   🖼  {}", thumbnail(item));
    }
    card
}

/// Image URL, or a placeholder naming the category.
fn thumbnail(item: &Item) -> String {
    if !item.image_url.is_empty() {
        return item.image_url.clone();
    }
    let label = if item.category.is_empty() {
        NO_IMAGE
    } else {
        item.category.as_str()
    };
    format!("[{}]", label)
}

pub fn render_categories(categories: &[String]) -> String {
    let mut out = String::from("전체");
    for cat in categories {
        let _ = write!(out, " | {}", cat);
    }
    out.push('\n');
    out
}

pub fn render_diagnostics(entries: &[Diagnostic]) -> String {
    let mut out = String::from("── diagnostics ──\n");
    for d in entries {
        let _ = writeln!(out, "{} {}", d.at.format("%H:%M:%S%.3f"), d.message);
    }
    out
}
