use crate::core::messages;
use crate::domain::ports::{Calculator, Logger};
use crate::utils::error::Result;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleCalculator;

impl Calculator for SimpleCalculator {
    fn add(&self, a: f64, b: f64) -> Result<f64> {
        Ok(a + b)
    }
}

/// Adds and reports the operation through the injected logger before and after.
pub struct LoggingCalculator {
    logger: Rc<dyn Logger>,
    decimal_separator: char,
}

impl LoggingCalculator {
    pub fn new(logger: Rc<dyn Logger>) -> Self {
        Self::with_decimal_separator(logger, ',')
    }

    pub fn with_decimal_separator(logger: Rc<dyn Logger>, decimal_separator: char) -> Self {
        Self {
            logger,
            decimal_separator,
        }
    }
}

impl Calculator for LoggingCalculator {
    fn add(&self, a: f64, b: f64) -> Result<f64> {
        self.logger
            .log_event(&messages::addition_started(a, b, self.decimal_separator))?;

        let sum = a + b;

        self.logger
            .log_event(&messages::addition_result(sum, self.decimal_separator))?;
        Ok(sum)
    }
}
