use crate::model::LoadError;
use crate::repository::diagnostics::DiagnosticLog;
use crate::utils::{cache_bust_url, preview};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use reqwest::header::CACHE_CONTROL;
use serde_json::Value;
use std::path::PathBuf;

/// A place a JSON item list can be read from.
#[async_trait]
pub trait ItemSource: Send + Sync {
    fn describe(&self) -> String;
    async fn fetch(&self, diag: &DiagnosticLog) -> Result<Value, LoadError>;
}

pub struct HttpSource {
    pub client: Client,
    pub url: String,
    pub cache_busting: bool,
}

#[async_trait]
impl ItemSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self, diag: &DiagnosticLog) -> Result<Value, LoadError> {
        let url = if self.cache_busting {
            cache_bust_url(&self.url, Utc::now())
        } else {
            self.url.clone()
        };
        diag.record(format!("Fetching: {}", url));

        let mut request = self.client.get(&url);
        if self.cache_busting {
            request = request.header(CACHE_CONTROL, "no-store");
        }
        let response = request.send().await?;
        let status = response.status();
        diag.record(format!("HTTP {}", status));

        let body = response.text().await?;
        if !status.is_success() {
            return Err(LoadError::Http {
                status: status.as_u16(),
                preview: preview(&body, 200),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

pub struct FileSource {
    pub path: PathBuf,
}

#[async_trait]
impl ItemSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self, diag: &DiagnosticLog) -> Result<Value, LoadError> {
        diag.record(format!("Reading: {}", self.path.display()));
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// `http(s)://` locations go over the network, everything else is a file path.
pub fn source_for(location: &str, client: &Client, cache_busting: bool) -> Box<dyn ItemSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource {
            client: client.clone(),
            url: location.to_string(),
            cache_busting,
        })
    } else {
        Box::new(FileSource {
            path: PathBuf::from(location),
        })
    }
}
