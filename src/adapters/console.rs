use colored::Color;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

const RESET_FOREGROUND: &str = "\x1b[39m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsoleColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

impl From<ConsoleColor> for Color {
    fn from(color: ConsoleColor) -> Self {
        match color {
            ConsoleColor::Black => Color::Black,
            ConsoleColor::Red => Color::Red,
            ConsoleColor::Green => Color::Green,
            ConsoleColor::Yellow => Color::Yellow,
            ConsoleColor::Blue => Color::Blue,
            ConsoleColor::Magenta => Color::Magenta,
            ConsoleColor::Cyan => Color::Cyan,
            ConsoleColor::White => Color::White,
            ConsoleColor::Gray => Color::BrightBlack,
        }
    }
}

/// Honors `NO_COLOR` / `CLICOLOR` the same way `colored` does for its own output.
pub fn color_supported() -> bool {
    colored::control::ShouldColorize::from_env().should_colorize()
}

/// A text sink that remembers its current foreground colour.
///
/// `None` is the terminal default. The colour is emitted as an ANSI SGR
/// sequence when colour output is enabled; otherwise only the state changes.
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
    foreground: Option<ConsoleColor>,
    color_enabled: bool,
}

pub type SharedConsole<W> = Rc<RefCell<Console<W>>>;

impl Console<io::Stdout> {
    pub fn stdout(color_enabled: bool) -> Self {
        Self::new(io::stdout(), color_enabled)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color_enabled: bool) -> Self {
        Self {
            out,
            foreground: None,
            color_enabled,
        }
    }

    pub fn shared(self) -> SharedConsole<W> {
        Rc::new(RefCell::new(self))
    }

    pub fn foreground(&self) -> Option<ConsoleColor> {
        self.foreground
    }

    pub fn set_foreground(&mut self, color: Option<ConsoleColor>) -> io::Result<()> {
        // State is updated even if the escape sequence cannot be written.
        self.foreground = color;
        if !self.color_enabled {
            return Ok(());
        }

        let sequence = match color {
            Some(color) => format!("\x1b[{}m", Color::from(color).to_fg_str()),
            None => RESET_FOREGROUND.to_string(),
        };
        self.out.write_all(sequence.as_bytes())?;
        self.out.flush()
    }

    /// Sets `color` until the returned scope is dropped, then restores the previous colour.
    pub fn color_scope(&mut self, color: ConsoleColor) -> io::Result<ColorScope<'_, W>> {
        let previous = self.foreground;
        let scope = ColorScope {
            console: self,
            previous,
        };
        scope.console.set_foreground(Some(color))?;
        Ok(scope)
    }

    pub fn write_prompt(&mut self, prompt: &str) -> io::Result<()> {
        self.out.write_all(prompt.as_bytes())?;
        self.out.flush()
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub struct ColorScope<'a, W: Write> {
    console: &'a mut Console<W>,
    previous: Option<ConsoleColor>,
}

impl<W: Write> Deref for ColorScope<'_, W> {
    type Target = Console<W>;

    fn deref(&self) -> &Self::Target {
        self.console
    }
}

impl<W: Write> DerefMut for ColorScope<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.console
    }
}

impl<W: Write> Drop for ColorScope<'_, W> {
    fn drop(&mut self) {
        if let Err(e) = self.console.set_foreground(self.previous) {
            tracing::warn!("Failed to restore console colour: {}", e);
        }
    }
}
