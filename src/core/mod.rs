pub mod calculator;
pub mod container;
pub mod input;
pub mod messages;
pub mod session;

pub use crate::domain::model::{Operands, Outcome};
pub use crate::domain::ports::{Calculator, Logger};
pub use crate::utils::error::Result;
