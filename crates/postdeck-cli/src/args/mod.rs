// NOTE: Command Organization Rationale
//
// Why namespaced subcommands (not flat)?
// - `post list` / `post show` / `post delete` group the CRUD surface
//   under the entity they operate on
// - `browse` and `config` sit alongside as their own namespaces
// - Improves --help discoverability as commands accumulate

mod commands;

pub use commands::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "postdeck")]
#[command(about = "Browse and manage posts on a blog REST API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the posts API (overrides config and environment)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Directory holding config.toml
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
