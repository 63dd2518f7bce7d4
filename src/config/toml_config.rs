use crate::adapters::console::ConsoleColor;
use crate::utils::error::Result;
use crate::utils::validation::{validate_decimal_separator, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub console: ConsoleConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub color: Option<bool>,
    pub event_color: Option<ConsoleColor>,
    pub error_color: Option<ConsoleColor>,
    pub decimal_separator: Option<char>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub pause_on_exit: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(separator) = self.console.decimal_separator {
            validate_decimal_separator("console.decimal_separator", separator)?;
        }
        Ok(())
    }
}
