pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::console::{Console, ConsoleColor};
pub use crate::adapters::logger::ConsoleLogger;
pub use crate::config::Settings;
pub use crate::core::calculator::{LoggingCalculator, SimpleCalculator};
pub use crate::core::container::{ServiceCollection, ServiceProvider};
pub use crate::core::session::{ErrorReporting, Session, SessionOptions};
pub use crate::domain::model::{Operands, Outcome};
pub use crate::domain::ports::{Calculator, Logger};
pub use crate::utils::error::{AppError, Result};
