use std::path::Path;

use anyhow::Result;

use crate::args::{ConfigCommand, OutputFormat};
use crate::config::Config;
use crate::presentation::{ConsoleRenderer, presenters};

pub fn handle(
    command: ConfigCommand,
    config_dir: &Path,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let config_path = config_dir.join("config.toml");
    let renderer = ConsoleRenderer::new(format);

    match command {
        ConfigCommand::Show => {
            let view_model =
                presenters::present_config(config_dir, config_path.exists(), &config.api_url);
            renderer.render(&view_model)
        }

        ConfigCommand::SetUrl { url } => {
            let updated = Config { api_url: url };
            updated.save_to(&config_path)?;

            let view_model = presenters::present_config(config_dir, true, &updated.api_url);
            renderer.render(&view_model)
        }
    }
}
