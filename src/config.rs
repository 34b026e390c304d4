use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;

/// Switches that used to be separate copies of the browser script.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogOptions {
    pub diagnostics: bool,
    pub thumbnails: bool,
    pub cache_busting: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            diagnostics: false,
            thumbnails: false,
            cache_busting: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// URLs or local paths of JSON item lists, loaded in this order.
    pub sources: Vec<String>,
    pub default_sort: String,
    pub default_group: Option<String>,
    pub options: CatalogOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sources: vec!["items.v2.json".to_string()],
            default_sort: "name".to_string(),
            default_group: None,
            options: CatalogOptions::default(),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
