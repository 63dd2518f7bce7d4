use crate::utils::error::Result;

pub trait Calculator {
    fn add(&self, a: f64, b: f64) -> Result<f64>;
}

pub trait Logger {
    fn log_event(&self, message: &str) -> Result<()>;
    fn log_error(&self, message: &str) -> Result<()>;
}
