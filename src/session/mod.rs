pub mod command_handler;

use crate::config::CatalogOptions;
use crate::model::Item;
use crate::pipeline::{ViewRequest, build_view};
use crate::presenter::render_view;
use crate::repository::diagnostics::DiagnosticLog;
use command_handler::{Action, handle_command};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};

/// Interactive browsing over an already loaded, read-only item list.
pub struct Session {
    pub items: Vec<Item>,
    pub request: ViewRequest,
    pub options: CatalogOptions,
    pub diag: DiagnosticLog,
}

impl Session {
    pub fn new(
        items: Vec<Item>,
        request: ViewRequest,
        options: CatalogOptions,
        diag: DiagnosticLog,
    ) -> Self {
        Self {
            items,
            request,
            options,
            diag,
        }
    }

    pub fn render(&self) -> String {
        render_view(&build_view(&self.items, &self.request), &self.options)
    }

    /// Applies one line of input. Returns `None` when the session should end.
    pub fn step(&mut self, line: &str) -> Option<String> {
        match handle_command(line, self) {
            Action::Update(request) => {
                self.request = request;
                Some(self.render())
            }
            Action::Print(text) => Some(text),
            Action::Quit => None,
        }
    }

    /// Reads commands from stdin until EOF or /quit.
    pub async fn run(&mut self) {
        let mut stdout = tokio::io::stdout();
        let handled = self
            .run_with(BufReader::new(tokio::io::stdin()), &mut stdout)
            .await;
        info!("Interactive session finished after {} commands.", handled);
    }

    /// Drives the session over any line source and sink. Stops on EOF,
    /// /quit, or the first read or write failure. Returns the number of
    /// lines handled.
    pub async fn run_with<R, W>(&mut self, input: R, output: &mut W) -> usize
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        let mut handled = 0;
        info!("Interactive session started with {} items", self.items.len());

        if !emit(output, &self.render()).await {
            return handled;
        }
        loop {
            if !emit(output, "\n> ").await {
                break;
            }
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    warn!("stdin read failed: {}", e);
                    break;
                }
            };
            handled += 1;
            match self.step(&line) {
                Some(text) => {
                    if !emit(output, &text).await {
                        break;
                    }
                }
                None => break,
            }
        }
        handled
    }
}

async fn emit<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> bool {
    let written = match output.write_all(text.as_bytes()).await {
        Ok(()) => output.flush().await,
        Err(e) => Err(e),
    };
    if let Err(e) = written {
        warn!("output write failed: {}", e);
        return false;
    }
    true
}
