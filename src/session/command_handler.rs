// session/command_handler.rs

use crate::pipeline::ViewRequest;
use crate::pipeline::filter::categories;
use crate::presenter::{render_categories, render_detail, render_diagnostics};
use crate::session::Session;
use tracing::info;

pub const HELP: &str = "📋 Available commands:\n\
    <text> — search\n\
    /clear — clear the search\n\
    /sort <field> — sort by field (name, location, manufacturer, ...)\n\
    /group <field> | /group off — group by field\n\
    /cat <category> | /cat all — category filter\n\
    /categories — list categories\n\
    /show <id> — item details\n\
    /diag — load diagnostics\n\
    /help — command list\n\
    /quit — exit";

/// What the session should do after a line of input.
#[derive(Debug, PartialEq)]
pub enum Action {
    /// Replace the view request and re-render.
    Update(ViewRequest),
    /// Print text without touching the view.
    Print(String),
    Quit,
}

/// Handles one line of input against the current session state.
pub fn handle_command(line: &str, session: &Session) -> Action {
    let line = line.trim();
    let current = &session.request;

    if !line.starts_with('/') {
        return Action::Update(ViewRequest {
            query: line.to_string(),
            ..current.clone()
        });
    }

    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((c, a)) => (c, a.trim()),
        None => (line, ""),
    };
    info!("Handling command: {}", command);

    match command {
        "/clear" => Action::Update(ViewRequest {
            query: String::new(),
            ..current.clone()
        }),
        "/sort" if !arg.is_empty() => Action::Update(ViewRequest {
            sort_key: arg.to_string(),
            ..current.clone()
        }),
        "/group" => {
            let group_key = match arg {
                "" | "off" | "none" => None,
                key => Some(key.to_string()),
            };
            Action::Update(ViewRequest {
                group_key,
                ..current.clone()
            })
        }
        "/cat" => {
            let category = match arg {
                "" | "all" | "전체" => None,
                cat => Some(cat.to_string()),
            };
            Action::Update(ViewRequest {
                category,
                ..current.clone()
            })
        }
        "/categories" => Action::Print(render_categories(&categories(&session.items))),
        "/show" if !arg.is_empty() => match session
            .items
            .iter()
            .find(|i| i.id.as_deref() == Some(arg))
        {
            Some(item) => Action::Print(render_detail(item)),
            None => Action::Print(format!("❌ No item with id {}\n", arg)),
        },
        "/diag" => Action::Print(render_diagnostics(&session.diag.entries())),
        "/help" => Action::Print(format!("{}\n", HELP)),
        "/quit" | "/exit" => Action::Quit,
        _ => Action::Print(format!("❓ Unknown command {}. Try /help\n", line)),
    }
}
