use crate::adapters::console::SharedConsole;
use crate::core::input::read_number;
use crate::core::messages;
use crate::domain::model::{Operands, Outcome};
use crate::domain::ports::{Calculator, Logger};
use crate::utils::error::{AppError, Result};
use std::io::{BufRead, Write};
use std::rc::Rc;

/// Where a failed run is reported.
pub enum ErrorReporting {
    /// Printed directly to the console.
    Plain,
    /// Routed through the logger's error channel.
    Logger(Rc<dyn Logger>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub decimal_separator: char,
    pub pause_on_exit: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            decimal_separator: ',',
            pause_on_exit: true,
        }
    }
}

/// One prompt, read, add, print, pause cycle.
pub struct Session<R: BufRead, W: Write> {
    input: R,
    console: SharedConsole<W>,
    calculator: Rc<dyn Calculator>,
    reporting: ErrorReporting,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        input: R,
        console: SharedConsole<W>,
        calculator: Rc<dyn Calculator>,
        reporting: ErrorReporting,
        options: SessionOptions,
    ) -> Self {
        Self {
            input,
            console,
            calculator,
            reporting,
            options,
        }
    }

    pub fn run(&mut self) -> Outcome {
        let outcome = match self.compute() {
            Ok((operands, sum)) => Outcome::Sum { operands, sum },
            Err(e) => self.report(e),
        };

        if self.options.pause_on_exit {
            self.pause();
        }

        outcome
    }

    fn compute(&mut self) -> Result<(Operands, f64)> {
        let a = self.prompt_number(messages::FIRST_NUMBER_PROMPT)?;
        let b = self.prompt_number(messages::SECOND_NUMBER_PROMPT)?;

        let sum = self.calculator.add(a, b)?;
        tracing::debug!(a, b, sum, "Addition finished");

        let line = messages::sum_line(a, b, sum, self.options.decimal_separator);
        self.console.borrow_mut().write_line(&line)?;

        Ok((Operands { a, b }, sum))
    }

    fn prompt_number(&mut self, prompt: &str) -> Result<f64> {
        self.console.borrow_mut().write_prompt(prompt)?;
        read_number(&mut self.input)
    }

    fn report(&self, error: AppError) -> Outcome {
        tracing::warn!("Session failed: {}", error);

        let invalid_input = error.is_invalid_input();
        let message = error.user_friendly_message();

        let reported = match &self.reporting {
            ErrorReporting::Plain => {
                let line = if invalid_input {
                    messages::INVALID_NUMBER_LINE.to_string()
                } else {
                    messages::generic_error(&message)
                };
                self.console.borrow_mut().write_line(&line).map_err(AppError::from)
            }
            ErrorReporting::Logger(logger) => {
                let line = if invalid_input {
                    messages::input_error(&message)
                } else {
                    messages::generic_error(&message)
                };
                logger.log_error(&line)
            }
        };

        if let Err(e) = reported {
            tracing::error!("Could not report failure to the console: {}", e);
        }

        if invalid_input {
            Outcome::InvalidInput
        } else {
            Outcome::Failed { message }
        }
    }

    fn pause(&mut self) {
        let mut line = Vec::new();
        if let Err(e) = self.input.read_until(b'\n', &mut line) {
            tracing::debug!("Final pause ended with read error: {}", e);
        }
    }
}
