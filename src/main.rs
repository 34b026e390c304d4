mod cli;
mod config;
mod model;
mod normalizer;
mod pipeline;
mod presenter;
mod repository;
mod session;
mod utils;

#[cfg(test)]
mod tests;

use clap::Parser;
use cli::CliArgs;
use config::{AppConfig, load_config};
use model::ConfigError;
use pipeline::build_view;
use pipeline::filter::categories;
use presenter::{render_categories, render_detail, render_diagnostics, render_view};
use repository::Repository;
use session::Session;
use std::path::Path;
use tracing::{Level, error, info, warn};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    // Load configuration from file
    let mut config = match read_config(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Config load error: {}", e);
            return;
        }
    };
    args.apply_to(&mut config);

    // Initialize logging; stdout is reserved for the catalog itself
    let level = if config.options.diagnostics {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let repository = match Repository::new(&config) {
        Ok(r) => r,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return;
        }
    };

    info!("Loading items from {} source(s)...", config.sources.len());
    let items = repository.load().await;
    info!("{} items ready", items.len());

    let diag = repository.diagnostics().clone();
    let request = args.view_request(&config);

    if args.categories {
        print!("{}", render_categories(&categories(&items)));
    } else if let Some(id) = &args.show {
        match items.iter().find(|i| i.id.as_deref() == Some(id.as_str())) {
            Some(item) => print!("{}", render_detail(item)),
            None => warn!("No item with id {}", id),
        }
    } else if args.interactive {
        let mut session = Session::new(items, request, config.options.clone(), diag.clone());
        session.run().await;
    } else {
        print!("{}", render_view(&build_view(&items, &request), &config.options));
    }

    if config.options.diagnostics {
        eprint!("{}", render_diagnostics(&diag.entries()));
    }
}

/// A missing file at the given path means defaults; anything else unreadable is an error.
fn read_config(path: &str) -> Result<AppConfig, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(AppConfig::default());
    }
    load_config(path)
}
