use crate::model::{
    Field, Item, LOCATION_PLACEHOLDER, MANUFACTURER_PLACEHOLDER, NAME_PLACEHOLDER,
};
use serde_json::{Map, Value};

/// Source keys consulted in order for each canonical field.
const ALIASES: &[(Field, &[&str])] = &[
    (Field::Id, &["id"]),
    (Field::Name, &["name", "product_name"]),
    (Field::Location, &["location", "location_code"]),
    (Field::Manufacturer, &["manufacturer", "brand"]),
    (Field::DosageForm, &["dosage_form", "dosageForm", "form"]),
    (Field::Strength, &["strength"]),
    (Field::Category, &["category"]),
    (Field::Indications, &["indications"]),
    (Field::Notes, &["notes"]),
    (Field::ImageUrl, &["image_url", "imageUrl", "thumbnail"]),
    (Field::ShelfMapUrl, &["shelf_map_url", "shelfMapUrl"]),
];

pub fn normalize_all(records: Vec<Value>) -> Vec<Item> {
    records.iter().map(normalize_record).collect()
}

pub fn normalize_record(record: &Value) -> Item {
    let empty = Map::new();
    let obj = record.as_object().unwrap_or(&empty);

    let id = resolve(obj, Field::Id);
    let name = resolve(obj, Field::Name);
    let location = resolve(obj, Field::Location);
    let manufacturer = resolve(obj, Field::Manufacturer);
    let dosage_form = resolve(obj, Field::DosageForm).unwrap_or_default();
    let strength = resolve(obj, Field::Strength).unwrap_or_default();
    let category = resolve(obj, Field::Category).unwrap_or_default();
    let indications = resolve(obj, Field::Indications).unwrap_or_default();
    let tags = obj.get("tags").map(split_tags).unwrap_or_default();

    let search_text = normalize_text(
        &[
            name.as_deref().unwrap_or(""),
            manufacturer.as_deref().unwrap_or(""),
            location.as_deref().unwrap_or(""),
            id.as_deref().unwrap_or(""),
            dosage_form.as_str(),
            category.as_str(),
            strength.as_str(),
            tags.join(",").as_str(),
            indications.as_str(),
        ]
        .join(" "),
    );

    let defaulted = [
        (Field::Name, name.is_none()),
        (Field::Location, location.is_none()),
        (Field::Manufacturer, manufacturer.is_none()),
    ]
    .into_iter()
    .filter_map(|(field, missing)| missing.then_some(field))
    .collect();

    Item {
        id,
        name: name.unwrap_or_else(|| NAME_PLACEHOLDER.to_string()),
        location: location.unwrap_or_else(|| LOCATION_PLACEHOLDER.to_string()),
        manufacturer: manufacturer.unwrap_or_else(|| MANUFACTURER_PLACEHOLDER.to_string()),
        dosage_form,
        strength,
        category,
        indications,
        notes: resolve(obj, Field::Notes).unwrap_or_default(),
        image_url: resolve(obj, Field::ImageUrl).unwrap_or_default(),
        shelf_map_url: resolve(obj, Field::ShelfMapUrl).unwrap_or_default(),
        tags,
        search_text,
        defaulted,
    }
}

/// Trim + lowercase, shared by the normalizer and the filter engine.
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

fn resolve(obj: &Map<String, Value>, field: Field) -> Option<String> {
    let aliases = ALIASES
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, a)| *a)
        .unwrap_or(&[]);
    aliases
        .iter()
        .filter_map(|key| obj.get(*key))
        .find_map(coerce)
}

/// Best-effort string coercion. Empty results count as absent.
fn coerce(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn split_tags(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect(),
        Value::Array(values) => values.iter().filter_map(coerce).collect(),
        other => coerce(other).into_iter().collect(),
    }
}
