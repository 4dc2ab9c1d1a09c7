//! Host capabilities: page origin and clipboard access.

use std::io::Write;
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write was refused: {0}")]
    Denied(String),
}

/// Environment the interactive components run in.
pub trait Host {
    /// Origin of the current page, e.g. `https://czypolskafirma.pl`.
    fn origin(&self) -> Option<&str>;

    fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Host without a clipboard.
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    origin: Option<String>,
}

impl HeadlessHost {
    #[must_use]
    pub fn new(origin: Option<String>) -> Self {
        Self { origin }
    }
}

impl Host for HeadlessHost {
    fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    fn write_clipboard(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

/// Host backed by the desktop clipboard.
///
/// Uses `pbcopy` on macOS and `xclip` elsewhere.
#[derive(Debug, Clone, Default)]
pub struct SystemHost {
    origin: Option<String>,
}

impl SystemHost {
    #[must_use]
    pub fn new(origin: Option<String>) -> Self {
        Self { origin }
    }
}

impl Host for SystemHost {
    fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        let command = if cfg!(target_os = "macos") {
            Command::new("pbcopy")
        } else {
            let mut xclip = Command::new("xclip");
            xclip.args(["-selection", "clipboard"]);
            xclip
        };

        pipe_to(command, text)
    }
}

/// Feed `text` to the helper's stdin. The child is always reaped, also
/// when the write fails.
fn pipe_to(mut command: Command, text: &str) -> Result<(), ClipboardError> {
    let mut child = command
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|_| ClipboardError::Unavailable)?;
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child
        .wait()
        .map_err(|e| ClipboardError::Denied(e.to_string()))?;
    written.map_err(|e| ClipboardError::Denied(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::Denied(format!("clipboard helper exited with {status}")))
    }
}

/// In-memory host that records clipboard writes.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    origin: Option<String>,
    fail_with: Option<ClipboardError>,
    /// Every successful clipboard write, oldest first
    pub copied: Vec<String>,
}

impl RecordingHost {
    #[must_use]
    pub fn new(origin: Option<&str>) -> Self {
        Self {
            origin: origin.map(str::to_string),
            ..Self::default()
        }
    }

    /// Make every clipboard write fail with `error`.
    #[must_use]
    pub fn failing(mut self, error: ClipboardError) -> Self {
        self.fail_with = Some(error);
        self
    }
}

impl Host for RecordingHost {
    fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(error) = &self.fail_with {
            return Err(error.clone());
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_to_helper_that_reads() {
        assert_eq!(pipe_to(Command::new("cat"), "/firma/murator"), Ok(()));
    }

    #[test]
    fn test_pipe_to_failing_helper() {
        let err = pipe_to(Command::new("false"), "/firma/murator").unwrap_err();
        assert!(matches!(err, ClipboardError::Denied(_)));
    }

    #[test]
    fn test_pipe_to_missing_helper() {
        let err = pipe_to(Command::new("/nonexistent/clipboard-helper"), "x").unwrap_err();
        assert_eq!(err, ClipboardError::Unavailable);
    }

    #[test]
    fn test_pipe_to_helper_closing_stdin_early() {
        // larger than a pipe buffer, so the write hits a closed pipe
        let text = "x".repeat(1 << 20);
        let err = pipe_to(Command::new("true"), &text).unwrap_err();
        assert!(matches!(err, ClipboardError::Denied(_)));
    }
}
