//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest assignable level.
pub const MINLOG: Level = Level::NotSet;
/// Highest assignable level.
pub const MAXLOG: Level = Level::Critical;

/// Severity threshold attached to each logger node.
///
/// A record is written at a node only when its level is greater than or
/// equal to the node's threshold. `NotSet` lets everything through, which
/// is the initial state of every non-root node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    #[default]
    NotSet = 0,
    Debug = 1,
    Info = 2,
    Warning = 3,
    Error = 4,
    Critical = 5,
}

impl Level {
    /// Name used in record lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::NotSet => "unset",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Critical => "critical",
        }
    }
}

impl From<i32> for Level {
    /// Clamps an arbitrary integer into `[MINLOG, MAXLOG]`.
    ///
    /// Negative values other than the conventional "unchanged" sentinel are
    /// folded by absolute value before clamping.
    fn from(value: i32) -> Self {
        match value.unsigned_abs().min(MAXLOG as u32) {
            0 => Level::NotSet,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warning,
            4 => Level::Error,
            _ => Level::Critical,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unset" | "notset" => Ok(Level::NotSet),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            "critical" => Ok(Level::Critical),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
