//! Key press input for the navigation loop.

use std::io::{self, IsTerminal};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal;

/// A key press, as far as navigation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Anything else.
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Left => Self::Left,
            KeyCode::Right => Self::Right,
            _ => Self::Other,
        }
    }
}

/// Source of key presses.
///
/// Reading blocks until a key is pressed.
pub trait KeySource {
    /// Waits for the next key press.
    ///
    /// # Errors
    ///
    /// Returns an error if the input device cannot be read.
    fn next_key(&mut self) -> io::Result<Key>;
}

/// Reads single key presses from the terminal.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        let _raw = RawMode::enable()?;
        loop {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(Key::from(key.code));
            }
        }
    }
}

/// Used when stdin is not a terminal: every read answers [`Key::Other`].
pub struct NoKeys;

impl KeySource for NoKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        Ok(Key::Other)
    }
}

/// Picks the key source matching the current stdin.
pub fn for_stdin() -> Box<dyn KeySource> {
    if io::stdin().is_terminal() {
        Box::new(TerminalKeys)
    } else {
        Box::new(NoKeys)
    }
}

/// Raw mode for the lifetime of the guard.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
