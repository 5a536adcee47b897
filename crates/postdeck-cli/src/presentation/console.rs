use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use postdeck_app::Diagnostics;
use postdeck_types::ApiError;

use super::view_models::{
    ConfigViewModel, CreatedViewModel, DeletedViewModel, PostDetailViewModel, PostListViewModel,
    UpdatedViewModel,
};
use crate::args::OutputFormat;

/// A view model the console can render.
///
/// JSON output ignores the plain layout entirely: it always dumps the
/// complete view model under a stable `content` envelope.
pub trait Render: Serialize {
    fn render_plain(&self);
}

pub struct ConsoleRenderer {
    format: OutputFormat,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render<V: Render>(&self, view_model: &V) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let envelope = serde_json::json!({ "content": view_model });
                println!("{}", serde_json::to_string_pretty(&envelope)?);
            }
            OutputFormat::Plain => view_model.render_plain(),
        }
        Ok(())
    }
}

impl Render for PostListViewModel {
    fn render_plain(&self) {
        if self.posts.is_empty() {
            println!("No posts at {}.", self.api_url);
            return;
        }

        let title_width = title_column_width();
        println!("{:<8} {:<title_width$} AUTHOR", "ID", "TITLE");
        println!("{}", "-".repeat(title_width + 9 + 7));

        for post in &self.posts {
            println!(
                "{:<8} {:<title_width$} {}",
                post.id,
                truncate_for_display(&post.title, title_width),
                post.author
            );
        }

        println!();
        println!("{} post(s) at {}", self.total, self.api_url);
    }
}

impl Render for PostDetailViewModel {
    fn render_plain(&self) {
        println!("{}", self.title.bold());
        println!("{}", format!("By {}", self.author).dimmed());
        println!();
        println!("{}", self.content);
        println!();
        println!("{}", format!("id: {}", self.id).dimmed());
    }
}

impl Render for CreatedViewModel {
    fn render_plain(&self) {
        println!(
            "{} post {}: {}",
            "Created".green(),
            self.post.id,
            self.post.title
        );
    }
}

impl Render for UpdatedViewModel {
    fn render_plain(&self) {
        println!(
            "{} post {}: {}",
            "Updated".green(),
            self.post.id,
            self.post.title
        );
    }
}

impl Render for DeletedViewModel {
    fn render_plain(&self) {
        println!("{} post {}", "Deleted".red(), self.id);
        println!("{} post(s) remain", self.remaining);
    }
}

impl Render for ConfigViewModel {
    fn render_plain(&self) {
        println!("Config dir:   {}", self.config_dir);
        println!(
            "Config file:  {}",
            if self.config_file_exists {
                "config.toml"
            } else {
                "(none, using defaults)"
            }
        );
        println!("API base URL: {}", self.api_url);
    }
}

/// Diagnostic channel for one-shot commands: failures go to stderr.
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn failure(&self, context: &str, error: &ApiError) {
        eprintln!("{} {}: {}", "Error".red(), context, error);
    }

    fn note(&self, message: &str) {
        eprintln!("{}", message.dimmed());
    }
}

fn title_column_width() -> usize {
    // Leave room for the id and author columns on narrow terminals.
    match terminal_size::terminal_size() {
        Some((terminal_size::Width(w), _)) if (w as usize) > 40 => ((w as usize) - 24).min(48),
        _ => 40,
    }
}

/// Truncate and normalize a string for one-line display:
/// - replaces newlines with spaces
/// - collapses consecutive whitespace
/// - respects UTF-8 character boundaries
fn truncate_for_display(s: &str, max_chars: usize) -> String {
    let normalized = s
        .replace(['\n', '\r'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if normalized.chars().count() <= max_chars {
        normalized
    } else {
        let truncated: String = normalized.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
