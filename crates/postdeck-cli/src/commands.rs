use anyhow::Result;
use postdeck_client::PostsClient;

use super::args::{Cli, Commands, PostCommand};
use super::handlers;
use crate::config::{self, Config};

pub fn run(cli: Cli) -> Result<()> {
    let config_dir = config::resolve_config_dir(cli.config_dir.as_deref())?;
    let config = Config::load_from(&config_dir.join("config.toml"))?;
    let api_url = config::effective_api_url(cli.api_url.as_deref(), &config);

    let Some(command) = cli.command else {
        show_guidance(&api_url);
        return Ok(());
    };

    let client = PostsClient::new(&api_url);

    match command {
        Commands::Post { command } => match command {
            PostCommand::List => handlers::post_list::handle(&client, cli.format),

            PostCommand::Show { id } => handlers::post_show::handle(&client, &id, cli.format),

            PostCommand::Create {
                title,
                author,
                content,
            } => handlers::post_create::handle(&client, title, author, content, cli.format),

            PostCommand::Edit { id, title, content } => {
                handlers::post_edit::handle(&client, &id, title, content, cli.format)
            }

            PostCommand::Delete { id, yes } => {
                handlers::post_delete::handle(&client, &id, yes, cli.format)
            }
        },

        Commands::Browse => handlers::browse::handle(client),

        Commands::Config { command } => {
            handlers::config_cmd::handle(command, &config_dir, &config, cli.format)
        }
    }
}

fn show_guidance(api_url: &str) {
    println!("postdeck - Terminal client for a posts REST API\n");

    println!("Quick commands:");
    println!("  postdeck post list                # List posts");
    println!("  postdeck post show <ID>           # Read one post");
    println!("  postdeck browse                   # Interactive browser");
    println!("  postdeck post create --title ...  # Create a post\n");

    println!("Configuration:");
    println!("  API base URL: {}", api_url);
    println!("  postdeck config set-url <URL>     # Point at a different server\n");

    println!("For more commands:");
    println!("  postdeck --help");
}
