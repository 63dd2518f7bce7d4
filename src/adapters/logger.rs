use crate::adapters::console::{ConsoleColor, SharedConsole};
use crate::domain::ports::Logger;
use crate::utils::error::Result;
use std::io::Write;

/// Writes each message as one line inside a colour scope.
pub struct ConsoleLogger<W: Write> {
    console: SharedConsole<W>,
    event_color: ConsoleColor,
    error_color: ConsoleColor,
}

impl<W: Write> ConsoleLogger<W> {
    pub fn new(console: SharedConsole<W>) -> Self {
        Self::with_colors(console, ConsoleColor::Blue, ConsoleColor::Red)
    }

    pub fn with_colors(
        console: SharedConsole<W>,
        event_color: ConsoleColor,
        error_color: ConsoleColor,
    ) -> Self {
        Self {
            console,
            event_color,
            error_color,
        }
    }

    fn write_colored(&self, color: ConsoleColor, message: &str) -> Result<()> {
        let mut console = self.console.borrow_mut();
        let mut scope = console.color_scope(color)?;
        scope.write_line(message)?;
        Ok(())
    }
}

impl<W: Write> Logger for ConsoleLogger<W> {
    fn log_event(&self, message: &str) -> Result<()> {
        self.write_colored(self.event_color, message)
    }

    fn log_error(&self, message: &str) -> Result<()> {
        self.write_colored(self.error_color, message)
    }
}
