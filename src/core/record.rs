//! Log record structure

use super::level::Level;
use chrono::{DateTime, Local};
use std::cell::RefCell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// Thread-local cache for the emitting thread's tag, computed once per thread.
thread_local! {
    static THREAD_TAG_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Tag identifying the emitting thread.
///
/// Empty for the main thread; `"(<hex>) "` with a 16-bit hash of the thread
/// id otherwise.
pub(crate) fn thread_tag() -> String {
    THREAD_TAG_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if cache.is_none() {
            *cache = Some(compute_thread_tag());
        }
        cache
            .as_ref()
            .expect("thread tag cache initialized in previous line")
            .clone()
    })
}

fn compute_thread_tag() -> String {
    let current = std::thread::current();
    if current.name() == Some("main") {
        return String::new();
    }
    let mut hasher = DefaultHasher::new();
    current.id().hash(&mut hasher);
    format!("({:04x}) ", hasher.finish() & 0xffff)
}

/// One log record, ready for rendering.
///
/// Everything except `timestamp` and `thread_tag` is deterministic given the
/// emission call.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    /// The emitting node's own path segment; empty for the root.
    pub module: String,
    pub thread_tag: String,
    pub level: Level,
    pub message: String,
}

impl LogRecord {
    pub fn new(module: &str, level: Level, message: String) -> Self {
        Self {
            timestamp: Local::now(),
            module: module.to_string(),
            thread_tag: thread_tag(),
            level,
            message: Self::sanitize_message(&message),
        }
    }

    /// Keep every record on a single line: newlines, carriage returns, and
    /// tabs inside the message are replaced with escape sequences.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_single_line() {
        let record = LogRecord::new("auth", Level::Info, "a\nb\rc\td".to_string());
        assert_eq!(record.message, "a\\nb\\rc\\td");
        assert!(!record.message.contains('\n'));
    }

    #[test]
    fn test_thread_tag_is_stable_per_thread() {
        assert_eq!(thread_tag(), thread_tag());
    }

    #[test]
    fn test_thread_tag_shape_off_main() {
        // Spawned threads carry no name, so a tag must be present.
        let tag = std::thread::spawn(thread_tag)
            .join()
            .expect("tag thread panicked");
        assert!(tag.starts_with('('));
        assert!(tag.ends_with(") "));
        assert_eq!(tag.len(), "(abcd) ".len());
    }
}
