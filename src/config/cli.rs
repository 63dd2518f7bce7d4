use crate::adapters::console::color_supported;
use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(about = "Reads two numbers and prints their sum")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Exit without waiting for a final Enter
    #[arg(long)]
    pub no_pause: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

impl CliConfig {
    /// Loads the config file if one was given and applies the CLI overrides.
    pub fn settings(&self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        file_config.validate()?;

        let mut settings = Settings::from_config(&file_config);
        if self.no_pause {
            settings.pause_on_exit = false;
        }
        if self.no_color || !color_supported() {
            settings.color = false;
        }

        tracing::debug!("Effective settings: {:?}", settings);
        Ok(settings)
    }
}
