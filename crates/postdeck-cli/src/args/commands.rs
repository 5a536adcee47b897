use clap::{Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Plain,
    /// Full view model as JSON
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Operate on posts
    Post {
        #[command(subcommand)]
        command: PostCommand,
    },

    /// Interactive list/detail browser
    Browse,

    /// Inspect or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum PostCommand {
    /// List all posts in server order
    List,

    /// Show a single post
    Show {
        /// Post id as assigned by the server
        id: String,
    },

    /// Create a post
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        content: String,
    },

    /// Update a post's title and/or content (the author is not editable)
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },

    /// Delete a post
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration
    Show,

    /// Persist the API base URL to config.toml
    SetUrl { url: String },
}
