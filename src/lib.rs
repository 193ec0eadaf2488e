//! # logtree
//!
//! A hierarchical, thread-safe logging facility: a tree of named logger
//! nodes addressed by dotted module names, each independently configurable,
//! with records cascading upward through ancestors until a non-propagating
//! node or the root is reached.
//!
//! ## Features
//!
//! - **Hierarchical loggers**: `Logger::get("net.tcp.accept")` lazily
//!   creates the path below the shared root; every caller asking for the
//!   same name gets the same node.
//! - **Per-node configuration**: level threshold, output sink, log file,
//!   and propagation flag, each checked independently at every node a
//!   record visits.
//! - **Automatic lifecycle**: a node lives while any handle to it or to a
//!   descendant exists, and is unlinked from the tree the instant the last
//!   one disappears, safely even against a concurrent `Logger::get` for the
//!   same name.
//! - **Thread safe**: designed for concurrent emission and reconfiguration.
//!
//! ## Example
//!
//! ```
//! use logtree::{info, Level, Logger, Sink};
//!
//! let logger = Logger::get_with("app.startup", Some(Level::Debug), Some(Sink::Stderr));
//! info!(logger, "ready after {} ms", 42);
//! ```

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Level, LogRecord, Logger, LoggerError, Result, Sink, MAXLOG, MAX_MESSAGE_LEN,
        MAX_MODULE_SUBFIELDS, MAX_MODULE_WIDTH, MINLOG, TIMESTAMP_FMT,
    };
}

pub use crate::core::{
    Level, LogRecord, Logger, LoggerError, Result, Sink, MAXLOG, MAX_MESSAGE_LEN,
    MAX_MODULE_SUBFIELDS, MAX_MODULE_WIDTH, MINLOG, TIMESTAMP_FMT,
};
