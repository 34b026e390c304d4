use crate::config::AppConfig;
use crate::pipeline::ViewRequest;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "medicine-catalog",
    version,
    about = "Browse a JSON medicine catalog from the terminal",
    long_about = "Loads a JSON list of medicines from a URL or file, then searches, sorts and groups it.\n\nExamples:\n  medicine-catalog -q 타이레놀\n  medicine-catalog --source https://host/items.v2.json -s location -g category\n  medicine-catalog -i"
)]
pub struct CliArgs {
    #[arg(
        short = 'C',
        long = "config",
        value_name = "FILE",
        default_value = "config.json",
        help = "Path to config file."
    )]
    pub config: String,

    #[arg(
        long = "source",
        value_name = "URL|FILE",
        action = ArgAction::Append,
        help = "Item list location (repeatable, replaces configured sources)."
    )]
    pub sources: Vec<String>,

    #[arg(short = 'q', long = "query", default_value = "", help = "Search text.")]
    pub query: String,

    #[arg(short = 's', long = "sort", value_name = "FIELD", help = "Sort field.")]
    pub sort: Option<String>,

    #[arg(short = 'g', long = "group", value_name = "FIELD", help = "Group by field.")]
    pub group: Option<String>,

    #[arg(long = "category", help = "Only show this category.")]
    pub category: Option<String>,

    #[arg(long = "show", value_name = "ID", help = "Print details of one item.")]
    pub show: Option<String>,

    #[arg(long = "categories", help = "List categories and exit.")]
    pub categories: bool,

    #[arg(short = 'i', long = "interactive", help = "Read commands from stdin.")]
    pub interactive: bool,

    #[arg(long = "diagnostics", help = "Print load diagnostics.")]
    pub diagnostics: bool,

    #[arg(long = "thumbnails", help = "Show image lines on cards.")]
    pub thumbnails: bool,

    #[arg(long = "no-cache-busting", help = "Do not append a version parameter to URLs.")]
    pub no_cache_busting: bool,
}

impl CliArgs {
    /// Flags override what the config file says.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if !self.sources.is_empty() {
            config.sources = self.sources.clone();
        }
        if let Some(sort) = &self.sort {
            config.default_sort = sort.clone();
        }
        if let Some(group) = &self.group {
            config.default_group = Some(group.clone());
        }
        config.options.diagnostics |= self.diagnostics;
        config.options.thumbnails |= self.thumbnails;
        if self.no_cache_busting {
            config.options.cache_busting = false;
        }
    }

    pub fn view_request(&self, config: &AppConfig) -> ViewRequest {
        ViewRequest {
            query: self.query.clone(),
            sort_key: config.default_sort.clone(),
            group_key: config.default_group.clone(),
            category: self.category.clone(),
        }
    }
}
