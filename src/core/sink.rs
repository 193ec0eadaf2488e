//! Output sink selection

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Live output stream target of a logger node, distinct from its log file.
///
/// Selection is last-set-wins; `Null` discards records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sink {
    /// No stream output.
    #[default]
    Null,
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
    /// Secondary stderr-like stream for diagnostics.
    Diagnostic,
}

impl Sink {
    /// Write one record line followed by a newline.
    ///
    /// Write errors are swallowed: emission has no failure path.
    pub(crate) fn write_line(&self, line: &str) {
        match self {
            Sink::Null => {}
            Sink::Stdout => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                let _ = writeln!(out, "{}", line);
                let _ = out.flush();
            }
            Sink::Stderr | Sink::Diagnostic => {
                let stderr = io::stderr();
                let mut out = stderr.lock();
                let _ = writeln!(out, "{}", line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null() {
        assert_eq!(Sink::default(), Sink::Null);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Sink::Stderr).expect("serialize");
        assert_eq!(json, "\"Stderr\"");

        let sink: Sink = serde_json::from_str("\"Diagnostic\"").expect("deserialize");
        assert_eq!(sink, Sink::Diagnostic);
    }

    #[test]
    fn test_null_sink_discards() {
        // Must not panic or block.
        Sink::Null.write_line("discarded");
    }
}
