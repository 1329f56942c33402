//! Welcome banner.
//!
//! The banner text ships inside the binary and is printed one line at a time
//! with a short pause. Showing it is best-effort: failures are logged at debug
//! level and never reach the user.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

/// Name suffix of the bundled welcome text.
pub const WELCOME_RESOURCE: &str = "Welcome.txt";

/// Text resources bundled into the binary, by path.
const RESOURCES: &[(&str, &str)] = &[(
    "assets/Welcome.txt",
    include_str!("../assets/Welcome.txt"),
)];

/// Banner errors. Never fatal.
#[derive(Debug, Error)]
pub enum BannerError {
    /// No bundled resource matches the requested name.
    #[error("bundled resource not found: {0}")]
    ResourceNotFound(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Returns the bundled resource whose path ends with `suffix`.
fn find_resource(suffix: &str) -> Result<&'static str, BannerError> {
    RESOURCES
        .iter()
        .find(|(name, _)| name.ends_with(suffix))
        .map(|(_, text)| *text)
        .ok_or_else(|| BannerError::ResourceNotFound(suffix.to_string()))
}

/// Splits banner text into its non-empty lines.
fn banner_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !line.is_empty())
}

/// Prints the resource named `suffix` line by line, pausing `delay` after each.
///
/// # Errors
///
/// Returns an error if the resource is missing or writing fails.
pub fn print_resource<W: Write>(
    out: &mut W,
    suffix: &str,
    delay: Duration,
) -> Result<(), BannerError> {
    let text = find_resource(suffix)?;
    for line in banner_lines(text) {
        writeln!(out, "{line}")?;
        out.flush()?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    Ok(())
}

/// Shows the welcome banner, swallowing any failure.
pub fn show_welcome<W: Write>(out: &mut W, delay: Duration) {
    if let Err(e) = print_resource(out, WELCOME_RESOURCE, delay) {
        debug!(error = %e, "welcome banner skipped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_welcome_by_suffix() {
        let text = find_resource(WELCOME_RESOURCE).unwrap();
        assert!(text.contains("What did the team commit today?"));
    }

    #[test]
    fn test_find_missing_resource() {
        match find_resource("Goodbye.txt") {
            Err(BannerError::ResourceNotFound(name)) => assert_eq!(name, "Goodbye.txt"),
            _ => panic!("Expected ResourceNotFound error"),
        }
    }

    #[test]
    fn test_banner_lines_drop_empty() {
        let lines: Vec<_> = banner_lines("one\n\ntwo\r\n\r\nthree\n").collect();
        assert_eq!(lines, ["one", "two", "three"]);
    }

    #[test]
    fn test_banner_lines_keep_indentation() {
        let lines: Vec<_> = banner_lines("  indented\n").collect();
        assert_eq!(lines, ["  indented"]);
    }

    #[test]
    fn test_print_resource_writes_every_line() {
        let mut out = Vec::new();
        print_resource(&mut out, WELCOME_RESOURCE, Duration::ZERO).unwrap();

        let output = String::from_utf8(out).unwrap();
        let expected = banner_lines(find_resource(WELCOME_RESOURCE).unwrap()).count();
        assert_eq!(output.lines().count(), expected);
        assert!(!output.contains("\n\n"));
    }

    #[test]
    fn test_print_missing_resource_writes_nothing() {
        let mut out = Vec::new();
        let result = print_resource(&mut out, "Missing.txt", Duration::ZERO);
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_show_welcome_swallows_write_errors() {
        show_welcome(&mut BrokenPipe, Duration::ZERO);
    }
}
