//! Terminal input and output for the interactive session
//!
//! Commands are single keypresses and field values are whole lines. On a real
//! terminal keys are read in raw mode so the user does not have to press Enter.
//! When input is piped the first non-blank character of each line is the key.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

/// How single keypresses are read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMode {
    /// Raw terminal mode, one keypress at a time
    Raw,
    /// Line-buffered input; the first non-blank character of a line is the key
    #[default]
    Line,
}

/// Console wrapping an input reader and an output writer
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    key_mode: KeyMode,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given reader and writer
    pub const fn new(input: R, output: W, key_mode: KeyMode) -> Self {
        Self {
            input,
            output,
            key_mode,
        }
    }

    /// Read one keypress.
    ///
    /// Returns `None` at end of input or on Ctrl+C. Keys that are not
    /// characters (Enter, arrows) are reported as `'\n'`.
    pub fn read_key(&mut self) -> io::Result<Option<char>> {
        match self.key_mode {
            KeyMode::Raw => self.read_raw_key(),
            KeyMode::Line => Ok(self.read_line()?.map(|line| key_from_line(&line))),
        }
    }

    /// Read one line with the trailing newline removed; `None` at end of input
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Write a line and flush
    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Write an empty line
    pub fn blank(&mut self) -> io::Result<()> {
        self.line("")
    }

    /// Consume the console and return its output writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_raw_key(&mut self) -> io::Result<Option<char>> {
        terminal::enable_raw_mode()?;
        let key = next_key_press();
        terminal::disable_raw_mode()?;

        let key = match key? {
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers,
                ..
            } if modifiers.contains(KeyModifiers::CONTROL) => None,
            KeyEvent {
                code: KeyCode::Char(c),
                ..
            } => Some(c),
            _ => Some('\n'),
        };

        // Echo the keypress the way a cooked terminal would have
        if let Some(c) = key.filter(|c| !c.is_control()) {
            write!(self.output, "{c}")?;
        }
        self.blank()?;
        Ok(key)
    }
}

fn next_key_press() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(key);
        }
    }
}

fn key_from_line(line: &str) -> char {
    line.trim().chars().next().unwrap_or('\n')
}
