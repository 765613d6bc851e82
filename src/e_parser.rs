use crate::e_types::{DiagnosticEntry, Severity};
use serde_json::Value;

/// The `reason` cargo attaches to rustc diagnostics in `--message-format=json`.
pub const COMPILER_MESSAGE_REASON: &str = "compiler-message";

const UNKNOWN_FILE: &str = "unknown";
const UNKNOWN_LINE: &str = "0";

/// Decodes one trimmed line as JSON. Malformed lines yield `None`.
///
/// # Example
/// ```
/// use cargo_ediag::e_parser::parse_record;
///
/// assert!(parse_record(r#"{"reason":"build-finished"}"#).is_some());
/// assert!(parse_record("not json").is_none());
/// ```
pub fn parse_record(line: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(line) {
        Ok(value) => Some(value),
        Err(e) => {
            log::trace!("Skipping malformed line ({}): {}", e, line);
            None
        }
    }
}

/// Looks up `key` on a JSON object. Non-objects and `null` values read as absent.
fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| !v.is_null())
}

/// Text of a scalar field: strings verbatim, anything else as compact JSON.
fn field_text(value: &Value, key: &str, default: &str) -> String {
    match field(value, key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => default.to_string(),
    }
}

/// Extracts a diagnostic entry from a decoded cargo message.
///
/// Only `compiler-message` records whose level is exactly `error` or
/// `warning` and which carry at least one span qualify. The first span
/// supplies the location; missing location fields fall back to
/// `unknown` and `0`, a missing message to empty text.
///
/// # Example
/// ```
/// use cargo_ediag::e_parser::{extract_entry, parse_record};
///
/// let record = parse_record(
///     r#"{"reason":"compiler-message","message":{"level":"warning","message":"unused","spans":[{"line_start":7}]}}"#,
/// )
/// .unwrap();
/// let entry = extract_entry(&record).unwrap();
/// assert_eq!(entry.formatted(), "warning|unknown:7|unused");
/// ```
pub fn extract_entry(record: &Value) -> Option<DiagnosticEntry> {
    if field(record, "reason").and_then(Value::as_str) != Some(COMPILER_MESSAGE_REASON) {
        return None;
    }

    let empty = Value::Null;
    let message = field(record, "message").unwrap_or(&empty);

    let level = field(message, "level").and_then(Value::as_str)?;
    let Some(severity) = Severity::from_level(level) else {
        log::trace!("Ignoring diagnostic with level {:?}", level);
        return None;
    };

    let Some(span) = field(message, "spans")
        .and_then(Value::as_array)
        .and_then(|spans| spans.first())
    else {
        log::trace!("Dropping {} without a span", severity);
        return None;
    };

    Some(DiagnosticEntry {
        severity,
        file_name: field_text(span, "file_name", UNKNOWN_FILE),
        line_start: field_text(span, "line_start", UNKNOWN_LINE),
        message: field_text(message, "message", ""),
    })
}

/// Trims a raw input line and runs it through [`parse_record`] and
/// [`extract_entry`]. Blank lines yield `None` without being decoded.
pub fn parse_line(line: &str) -> Option<DiagnosticEntry> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_record(trimmed).as_ref().and_then(extract_entry)
}
