// Repository module: loads item lists from the configured sources.

pub mod diagnostics;
pub mod fetcher;

use crate::config::AppConfig;
use crate::model::Item;
use crate::normalizer::normalize_all;
use diagnostics::DiagnosticLog;
use fetcher::{ItemSource, source_for};
use futures::future::join_all;
use reqwest::Client;
use serde_json::Value;
use tracing::{info, warn};

pub use diagnostics::Diagnostic;

pub struct Repository {
    sources: Vec<Box<dyn ItemSource>>,
    diag: DiagnosticLog,
}

impl Repository {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) MedicineCatalog/0.1")
            .build()?;
        let sources = config
            .sources
            .iter()
            .map(|loc| source_for(loc, &client, config.options.cache_busting))
            .collect();
        Ok(Self::with_sources(sources))
    }

    pub fn with_sources(sources: Vec<Box<dyn ItemSource>>) -> Self {
        Self {
            sources,
            diag: DiagnosticLog::new(),
        }
    }

    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.diag
    }

    /// Loads every source concurrently. Failures contribute zero items and
    /// are recorded as diagnostics; they never reach the caller.
    pub async fn load(&self) -> Vec<Item> {
        let results = join_all(self.sources.iter().map(|s| s.fetch(&self.diag))).await;

        let mut items = Vec::new();
        for (source, result) in self.sources.iter().zip(results) {
            let name = source.describe();
            match result {
                Ok(Value::Array(records)) => {
                    info!("Loaded {} records from {}", records.len(), name);
                    self.diag.record(format!("Loaded {} items", records.len()));
                    items.extend(normalize_all(records));
                }
                Ok(_) => {
                    warn!("Payload from {} is not a JSON array, ignoring", name);
                    self.diag.record("Loaded 0 items (payload is not an array)");
                }
                Err(e) => {
                    warn!("Failed to load {}: {}", name, e);
                    self.diag.record(format!("ERROR: {}", e));
                }
            }
        }
        items
    }
}
