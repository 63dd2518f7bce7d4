#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::adapters::console::ConsoleColor;
use crate::core::session::SessionOptions;
use toml_config::TomlConfig;

/// Effective settings after the config file and CLI overrides are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub color: bool,
    pub event_color: ConsoleColor,
    pub error_color: ConsoleColor,
    pub decimal_separator: char,
    pub pause_on_exit: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            event_color: ConsoleColor::Blue,
            error_color: ConsoleColor::Red,
            decimal_separator: ',',
            pause_on_exit: true,
        }
    }
}

impl Settings {
    pub fn from_config(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            color: config.console.color.unwrap_or(defaults.color),
            event_color: config.console.event_color.unwrap_or(defaults.event_color),
            error_color: config.console.error_color.unwrap_or(defaults.error_color),
            decimal_separator: config
                .console
                .decimal_separator
                .unwrap_or(defaults.decimal_separator),
            pause_on_exit: config.session.pause_on_exit.unwrap_or(defaults.pause_on_exit),
        }
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            decimal_separator: self.decimal_separator,
            pause_on_exit: self.pause_on_exit,
        }
    }
}
