//! Toolkit warnings with colored terminal output.
//!
//! Legacy and hand-edited documents routinely carry attribute values the
//! datatype parsers tolerate but cannot represent. Those values are dropped,
//! not errors, so the only trace they leave is a warning here. Deduplication
//! keeps a document with ten thousand bad borders from printing ten thousand
//! lines.

use std::collections::HashSet;
use std::sync::Mutex;

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Messages already printed, for deduplication.
static SEEN: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a tolerated-but-ignored value (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("ODF", "ignoring unknown border line style 'wavy'");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let first_time = SEEN
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if first_time {
        eprintln!("{YELLOW}[Vellum {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call when loading a new document).
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = SEEN.lock().unwrap();
    if let Some(seen) = guard.as_mut() {
        seen.clear();
    }
}
