//! The public logger handle

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::level::Level;
use super::node::LoggerNode;
use super::registry;
use super::sink::Sink;

/// Shared handle to one logger node.
///
/// Handles are cheap to clone and all clones refer to the same node.
/// Loggers for the same dotted name are the same node; a node lives for as
/// long as any handle to it or to any of its descendants exists, and is
/// unlinked from the tree the moment the last such handle is dropped.
///
/// # Example
///
/// ```
/// use logtree::{Level, Logger};
///
/// let logger = Logger::get("net.tcp");
/// logger.set_level(Level::Info);
/// logger.info("listener up");
/// logger.debug("not written: below the Info threshold");
/// ```
#[derive(Clone)]
pub struct Logger {
    node: Arc<LoggerNode>,
}

impl Logger {
    pub(crate) fn from_node(node: Arc<LoggerNode>) -> Self {
        Self { node }
    }

    /// Handle to the root logger, creating it on first use.
    ///
    /// The root starts at [`Level::Warning`] with no sink, no log file, and
    /// propagation disabled.
    pub fn root() -> Logger {
        Self::root_with(None, None)
    }

    /// Handle to the root logger, updating its level and/or sink.
    ///
    /// `None` leaves the corresponding setting untouched.
    pub fn root_with(level: Option<Level>, sink: Option<Sink>) -> Logger {
        registry::root(level, sink)
    }

    /// Resolve the logger for a dotted module name, creating missing nodes
    /// along the path.
    ///
    /// New nodes start at [`Level::NotSet`] with no sink, no log file, and
    /// propagation enabled. An empty name resolves to the root.
    pub fn get(name: &str) -> Logger {
        Self::get_with(name, None, None)
    }

    /// Like [`Logger::get`], additionally updating the leaf node's level
    /// and/or sink. `None` leaves the corresponding setting untouched.
    pub fn get_with(name: &str, level: Option<Level>, sink: Option<Sink>) -> Logger {
        registry::resolve(name, level, sink)
    }

    /// Walk to an existing logger without creating any nodes.
    pub fn lookup(name: &str) -> Option<Logger> {
        registry::lookup(name)
    }

    /// The node's own path segment; `"root"` for the root logger.
    pub fn name(&self) -> &str {
        match self.node.name() {
            "" => "root",
            name => name,
        }
    }

    /// Emit a record at an arbitrary level.
    ///
    /// Integer levels are clamped into `[MINLOG, MAXLOG]` via
    /// `From<i32> for Level`.
    pub fn log(&self, level: impl Into<Level>, message: impl Into<String>) {
        self.node.emit(level.into(), message.into());
    }

    pub fn critical(&self, message: impl Into<String>) {
        self.log(Level::Critical, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.log(Level::Warning, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message);
    }

    /// Emission entry point used by the logging macros.
    ///
    /// A formatting failure is replaced by a placeholder message describing
    /// it; emission itself never fails.
    pub fn log_args(&self, level: impl Into<Level>, args: fmt::Arguments<'_>) {
        use fmt::Write;

        let mut message = String::new();
        if message.write_fmt(args).is_err() {
            message = "logging error: message formatting failed".to_string();
        }
        self.node.emit(level.into(), message);
    }

    pub fn get_level(&self) -> Level {
        self.node.get_level()
    }

    /// Set the threshold and return the previous one. Integer levels are
    /// clamped into `[MINLOG, MAXLOG]`.
    pub fn set_level(&self, level: impl Into<Level>) -> Level {
        self.node.set_level(level.into())
    }

    pub fn get_propagation(&self) -> bool {
        self.node.get_propagation()
    }

    /// Control whether records continue to the parent after being processed
    /// here. Returns the previous setting.
    pub fn set_propagation(&self, enabled: bool) -> bool {
        self.node.set_propagation(enabled)
    }

    pub fn get_sink(&self) -> Sink {
        self.node.get_sink()
    }

    /// Select the output stream. Returns the previous selection.
    pub fn set_sink(&self, sink: Sink) -> Sink {
        self.node.set_sink(sink)
    }

    /// Attach a log file, resolved to its canonical absolute path and opened
    /// in append mode; records are flushed after every write.
    ///
    /// Setting the same resolved path again is a no-op; an empty path closes
    /// the current file. On failure the previous file is left closed and an
    /// error-level diagnostic is emitted through this logger.
    pub fn set_log_file(&self, path: impl AsRef<Path>) {
        self.node.set_log_file(path.as_ref());
    }

    /// Resolved absolute path of the active log file, if one is open.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.node.log_file_path()
    }

    /// Whether a live child node exists under `segment`.
    pub fn has_child(&self, segment: &str) -> bool {
        self.node.has_child(segment)
    }

    /// Whether two handles refer to the same node.
    pub fn ptr_eq(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name())
            .field("level", &self.get_level())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_return_previous_values() {
        let logger = Logger::get("handle_prev");
        assert_eq!(logger.set_level(Level::Info), Level::NotSet);
        assert_eq!(logger.set_level(Level::Error), Level::Info);

        assert!(logger.set_propagation(false));
        assert!(!logger.set_propagation(true));

        assert_eq!(logger.set_sink(Sink::Stderr), Sink::Null);
        assert_eq!(logger.set_sink(Sink::Stdout), Sink::Stderr);
    }

    #[test]
    fn test_integer_levels_are_clamped() {
        let logger = Logger::get("handle_clamp");
        logger.set_level(42);
        assert_eq!(logger.get_level(), Level::Critical);
        logger.set_level(2);
        assert_eq!(logger.get_level(), Level::Info);
    }

    #[test]
    fn test_name_of_root_and_leaf() {
        assert_eq!(Logger::root().name(), "root");
        assert_eq!(Logger::get("handle_name.leaf").name(), "leaf");
    }

    #[test]
    fn test_clone_is_same_node() {
        let logger = Logger::get("handle_clone");
        let clone = logger.clone();
        assert!(logger.ptr_eq(&clone));
    }

    #[test]
    fn test_log_never_panics_without_outputs() {
        let logger = Logger::get("handle_silent");
        logger.critical("no sink, no file, still fine");
        logger.log(7, "clamped generic level");
    }
}
