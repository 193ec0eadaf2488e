//! Record formatting
//!
//! Pure functions turning a [`LogRecord`] into a single output line.
//! Deterministic given the record; truncation is silent, matching the
//! no-failure-path contract of emission.

use super::record::LogRecord;

/// Timestamp pattern used in record lines.
pub const TIMESTAMP_FMT: &str = "%Y/%m/%d:%H:%M:%S";

/// Maximum displayed width of a module name, in characters.
pub const MAX_MODULE_WIDTH: usize = 8;

/// Maximum length of a rendered message, in bytes.
pub const MAX_MESSAGE_LEN: usize = 256;

/// Cap a module name at [`MAX_MODULE_WIDTH`] characters.
pub fn truncate_module(module: &str) -> &str {
    match module.char_indices().nth(MAX_MODULE_WIDTH) {
        Some((idx, _)) => &module[..idx],
        None => module,
    }
}

/// Cap a message at [`MAX_MESSAGE_LEN`] bytes without splitting a UTF-8
/// sequence.
pub fn truncate_message(message: &str) -> &str {
    if message.len() <= MAX_MESSAGE_LEN {
        return message;
    }
    let mut end = MAX_MESSAGE_LEN;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    &message[..end]
}

/// Render one record line:
/// `<timestamp> <module><sep><threadtag>[<levelname>] <message>`.
///
/// `<sep>` is `": "` only when the module name is non-empty, so root records
/// carry no module field at all.
pub fn render(record: &LogRecord) -> String {
    let module = truncate_module(&record.module);
    let sep = if module.is_empty() { "" } else { ": " };
    format!(
        "{} {}{}{}[{}] {}",
        record.timestamp.format(TIMESTAMP_FMT),
        module,
        sep,
        record.thread_tag,
        record.level.as_str(),
        truncate_message(&record.message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::Level;
    use chrono::{DateTime, Local, TimeZone};

    fn fixed_timestamp() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
    }

    fn record(module: &str, tag: &str, level: Level, message: &str) -> LogRecord {
        LogRecord {
            timestamp: fixed_timestamp(),
            module: module.to_string(),
            thread_tag: tag.to_string(),
            level,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_render_exact_line() {
        let line = render(&record("io", "", Level::Info, "socket ready"));
        assert_eq!(line, "2025/01/08:10:30:45 io: [info] socket ready");
    }

    #[test]
    fn test_render_with_thread_tag() {
        let line = render(&record("io", "(1a2b) ", Level::Error, "lost peer"));
        assert_eq!(line, "2025/01/08:10:30:45 io: (1a2b) [error] lost peer");
    }

    #[test]
    fn test_render_root_has_no_separator() {
        let line = render(&record("", "", Level::Warning, "shutting down"));
        assert_eq!(line, "2025/01/08:10:30:45 [warning] shutting down");
    }

    #[test]
    fn test_module_truncated_to_display_width() {
        let line = render(&record("handshake", "", Level::Debug, "hello"));
        assert_eq!(line, "2025/01/08:10:30:45 handshak: [debug] hello");
    }

    #[test]
    fn test_message_truncated_to_byte_cap() {
        let long = "x".repeat(MAX_MESSAGE_LEN + 50);
        let line = render(&record("m", "", Level::Info, &long));
        assert!(line.ends_with(&"x".repeat(MAX_MESSAGE_LEN)));
        assert!(!line.ends_with(&"x".repeat(MAX_MESSAGE_LEN + 1)));
    }

    #[test]
    fn test_truncate_message_respects_char_boundaries() {
        // 'é' is two bytes; build a string whose byte cap lands mid-char.
        let msg = "é".repeat(MAX_MESSAGE_LEN);
        let truncated = truncate_message(&msg);
        assert!(truncated.len() <= MAX_MESSAGE_LEN);
        assert!(msg.starts_with(truncated));
    }

    #[test]
    fn test_truncate_module_counts_chars() {
        assert_eq!(truncate_module("éééééééééé"), "éééééééé");
        assert_eq!(truncate_module("short"), "short");
    }
}
