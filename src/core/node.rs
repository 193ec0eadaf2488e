//! Logger tree nodes
//!
//! A [`LoggerNode`] carries one module's configuration and its place in the
//! tree. Ownership is inverted with respect to the lookup direction: a child
//! holds a strong reference to its parent, while the parent's children map
//! holds only weak references. Intermediate nodes therefore stay alive as
//! long as any descendant is externally held, and a whole chain collapses
//! bottom-up when the last external handle to its deepest node disappears.
//!
//! The collapse itself lives in the [`Drop`] impl: when the last strong
//! reference to a node goes away, the node unlinks its weak entry from the
//! parent's children map (re-checking for a concurrent re-creation under the
//! parent's lock) and only then releases its strong edge to the parent,
//! which may cascade the same protocol upward. The root has no parent and
//! halts every cascade.

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, MutexGuard};

use super::error::{LoggerError, Result};
use super::formatter;
use super::level::Level;
use super::record::LogRecord;
use super::sink::Sink;

/// An open log file together with the resolved absolute path it was opened
/// under. The path is what makes repeated `set_log_file` calls idempotent.
pub(crate) struct LogFile {
    path: PathBuf,
    file: File,
}

impl LogFile {
    fn open(path: PathBuf) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::open_log_file(path.display().to_string(), e))?;
        Ok(Self { path, file })
    }

    /// Append one record line and flush immediately. Errors are swallowed:
    /// emission has no failure path.
    fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.file, "{}", line);
        let _ = self.file.flush();
    }
}

/// Mutable per-node state, all guarded by the node's single mutex.
pub(crate) struct NodeState {
    pub(crate) level: Level,
    pub(crate) sink: Sink,
    pub(crate) logfile: Option<LogFile>,
    pub(crate) propagate: bool,
    /// Owning edge; `None` only for the root.
    pub(crate) parent: Option<Arc<LoggerNode>>,
    /// Non-owning lookup edges, keyed by path segment.
    pub(crate) children: HashMap<String, Weak<LoggerNode>>,
}

pub(crate) struct LoggerNode {
    /// The node's own path segment; empty for the root.
    name: String,
    state: Mutex<NodeState>,
}

impl LoggerNode {
    pub(crate) fn new_root() -> Arc<Self> {
        Arc::new(Self {
            name: String::new(),
            state: Mutex::new(NodeState {
                level: Level::Warning,
                sink: Sink::Null,
                logfile: None,
                propagate: false,
                parent: None,
                children: HashMap::new(),
            }),
        })
    }

    pub(crate) fn new_child(name: &str, parent: Arc<LoggerNode>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            state: Mutex::new(NodeState {
                level: Level::NotSet,
                sink: Sink::Null,
                logfile: None,
                propagate: true,
                parent: Some(parent),
                children: HashMap::new(),
            }),
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn state(&self) -> MutexGuard<'_, NodeState> {
        self.state.lock()
    }

    /// Build the record once, then walk this node and its ancestors while
    /// propagation holds, re-checking each node's own threshold.
    ///
    /// Only one node lock is held at a time; the parent edge is cloned out
    /// before the current node's guard is released.
    pub(crate) fn emit(&self, level: Level, message: String) {
        let record = LogRecord::new(&self.name, level, message);
        let line = formatter::render(&record);

        let mut next = {
            let mut state = self.state.lock();
            Self::write_and_advance(&mut state, level, &line)
        };
        while let Some(current) = next {
            next = {
                let mut state = current.state.lock();
                Self::write_and_advance(&mut state, level, &line)
            };
        }
    }

    /// Write `line` at one node if `level` meets its threshold, and return
    /// the parent to continue with, if propagation is enabled.
    fn write_and_advance(
        state: &mut NodeState,
        level: Level,
        line: &str,
    ) -> Option<Arc<LoggerNode>> {
        if level >= state.level {
            state.sink.write_line(line);
            if let Some(logfile) = state.logfile.as_mut() {
                logfile.write_line(line);
            }
        }
        if state.propagate {
            state.parent.clone()
        } else {
            None
        }
    }

    pub(crate) fn get_level(&self) -> Level {
        self.state.lock().level
    }

    pub(crate) fn set_level(&self, level: Level) -> Level {
        let mut state = self.state.lock();
        let previous = state.level;
        state.level = level;
        previous
    }

    pub(crate) fn get_propagation(&self) -> bool {
        self.state.lock().propagate
    }

    pub(crate) fn set_propagation(&self, enabled: bool) -> bool {
        let mut state = self.state.lock();
        let previous = state.propagate;
        state.propagate = enabled;
        previous
    }

    pub(crate) fn get_sink(&self) -> Sink {
        self.state.lock().sink
    }

    pub(crate) fn set_sink(&self, sink: Sink) -> Sink {
        let mut state = self.state.lock();
        let previous = state.sink;
        state.sink = sink;
        previous
    }

    /// Apply the optional level/sink updates from a factory call; `None`
    /// leaves the current setting untouched.
    pub(crate) fn apply(&self, level: Option<Level>, sink: Option<Sink>) {
        if level.is_none() && sink.is_none() {
            return;
        }
        let mut state = self.state.lock();
        if let Some(level) = level {
            state.level = level;
        }
        if let Some(sink) = sink {
            state.sink = sink;
        }
    }

    pub(crate) fn log_file_path(&self) -> Option<PathBuf> {
        self.state
            .lock()
            .logfile
            .as_ref()
            .map(|logfile| logfile.path.clone())
    }

    /// Configure the node's log file; an empty path closes the current one.
    ///
    /// A failure leaves the previous file closed and is reported as an
    /// error-level diagnostic through this very node, emitted after the
    /// state lock has been released.
    pub(crate) fn set_log_file(&self, path: &Path) {
        let outcome = {
            let mut state = self.state.lock();
            Self::swap_log_file(&mut state, path)
        };
        if let Err(err) = outcome {
            self.emit(Level::Error, err.to_string());
        }
    }

    fn swap_log_file(state: &mut NodeState, path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            state.logfile = None;
            return Ok(());
        }
        let resolved = match resolve_log_path(path) {
            Ok(resolved) => resolved,
            Err(err) => {
                state.logfile = None;
                return Err(err);
            }
        };
        // Same resolved path: keep the open handle, no close/reopen cycle.
        if state
            .logfile
            .as_ref()
            .is_some_and(|logfile| logfile.path == resolved)
        {
            return Ok(());
        }
        state.logfile = None;
        state.logfile = Some(LogFile::open(resolved)?);
        Ok(())
    }

    pub(crate) fn has_child(&self, segment: &str) -> bool {
        self.state
            .lock()
            .children
            .get(segment)
            .is_some_and(|weak| weak.strong_count() > 0)
    }
}

/// Resolve a log file path to its canonical absolute form, creating the
/// file (truncating) first when it does not exist yet.
fn resolve_log_path(path: &Path) -> Result<PathBuf> {
    match std::fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(_) => {
            File::create(path)
                .map_err(|e| LoggerError::open_log_file(path.display().to_string(), e))?;
            std::fs::canonicalize(path)
                .map_err(|e| LoggerError::resolve_path(path.display().to_string(), e))
        }
    }
}

impl Drop for LoggerNode {
    /// Unlink this node from its parent's children map the moment the last
    /// strong reference disappears.
    ///
    /// By the time this runs, every weak upgrade against this node already
    /// fails, and a live child would itself hold a strong edge, so the
    /// children map can only contain dead entries. The one race left is a
    /// concurrent resolution that re-created this segment under the parent:
    /// the re-check under the parent's lock detects it and leaves the fresh
    /// entry alone.
    fn drop(&mut self) {
        let state = self.state.get_mut();
        let parent = state.parent.take();
        let logfile = state.logfile.take();

        if let Some(parent) = parent {
            // A replacement node upgraded out of the map must not be
            // released while the parent lock is held: its own teardown would
            // re-acquire that lock.
            let mut replacement: Option<Arc<LoggerNode>> = None;
            {
                let mut parent_state = parent.state.lock();
                match parent_state
                    .children
                    .get(&self.name)
                    .and_then(Weak::upgrade)
                {
                    Some(live) => replacement = Some(live),
                    None => {
                        // Confirmed orphan: no other strong reference and no
                        // re-creation raced in.
                        parent_state.children.remove(&self.name);
                    }
                }
            }
            drop(replacement);
            // Releasing the strong edge may cascade the same protocol into
            // the parent; the parent lock is already out of scope here.
            drop(parent);
        }

        // Close the log file as the final teardown step.
        drop(logfile);
    }
}
