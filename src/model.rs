// Core structs: Item, GroupHeader, ViewEntry, error types
use thiserror::Error;

pub const NAME_PLACEHOLDER: &str = "(이름 미상)";
pub const LOCATION_PLACEHOLDER: &str = "위치 미상";
pub const MANUFACTURER_PLACEHOLDER: &str = "제조사 공란";

/// Canonical fields of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Location,
    Manufacturer,
    DosageForm,
    Strength,
    Category,
    Indications,
    Notes,
    ImageUrl,
    ShelfMapUrl,
    Tags,
}

impl Field {
    /// Resolves a UI key to a field. Accepts canonical names and source aliases.
    pub fn from_key(key: &str) -> Option<Field> {
        let key = key.trim();
        match key {
            "id" => Some(Field::Id),
            "name" | "product_name" => Some(Field::Name),
            "location" | "location_code" => Some(Field::Location),
            "manufacturer" | "brand" => Some(Field::Manufacturer),
            "dosage_form" | "dosageForm" | "form" => Some(Field::DosageForm),
            "strength" => Some(Field::Strength),
            "category" => Some(Field::Category),
            "indications" => Some(Field::Indications),
            "notes" => Some(Field::Notes),
            "image_url" | "imageUrl" | "thumbnail" => Some(Field::ImageUrl),
            "shelf_map_url" | "shelfMapUrl" => Some(Field::ShelfMapUrl),
            "tags" => Some(Field::Tags),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Item {
    pub id: Option<String>,
    pub name: String,
    pub location: String,
    pub manufacturer: String,
    pub dosage_form: String,
    pub strength: String,
    pub category: String,
    pub indications: String,
    pub notes: String,
    pub image_url: String,
    pub shelf_map_url: String,
    pub tags: Vec<String>,
    pub(crate) search_text: String,
    /// Fields that hold a placeholder rather than a source value.
    pub(crate) defaulted: Vec<Field>,
}

impl Item {
    /// Lowercase haystack used by the filter engine.
    pub fn searchable_text(&self) -> &str {
        &self.search_text
    }

    /// Secondary line: dosage form, strength and category, empty parts skipped.
    pub fn subtitle(&self) -> String {
        [&self.dosage_form, &self.strength, &self.category]
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" · ")
    }

    /// Value of a field for sorting and grouping. Missing values read as "",
    /// placeholders included.
    pub fn value(&self, field: Field) -> String {
        if self.defaulted.contains(&field) {
            return String::new();
        }
        match field {
            Field::Id => self.id.clone().unwrap_or_default(),
            Field::Name => self.name.clone(),
            Field::Location => self.location.clone(),
            Field::Manufacturer => self.manufacturer.clone(),
            Field::DosageForm => self.dosage_form.clone(),
            Field::Strength => self.strength.clone(),
            Field::Category => self.category.clone(),
            Field::Indications => self.indications.clone(),
            Field::Notes => self.notes.clone(),
            Field::ImageUrl => self.image_url.clone(),
            Field::ShelfMapUrl => self.shelf_map_url.clone(),
            Field::Tags => self.tags.join(","),
        }
    }

    /// Same as [`Item::value`] but keyed by the raw UI string.
    pub fn value_of(&self, key: &str) -> String {
        Field::from_key(key)
            .map(|f| self.value(f))
            .unwrap_or_default()
    }
}

/// Synthetic bucket label emitted by the group engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupHeader {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEntry<'a> {
    Header(GroupHeader),
    Item(&'a Item),
}

impl<'a> ViewEntry<'a> {
    pub fn is_header(&self) -> bool {
        matches!(self, ViewEntry::Header(_))
    }

    pub fn as_item(&self) -> Option<&'a Item> {
        match self {
            ViewEntry::Item(item) => Some(*item),
            ViewEntry::Header(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP {status}: {preview}")]
    Http { status: u16, preview: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
