//! crates/severity/src/table.rs
//! Name table for severities and the lookups that report failures.
//!
//! Matching is ASCII case-insensitive and exact: a candidate only matches
//! when the input has the same length, so prefixes such as `"war"` and
//! overlong inputs such as `"warnings are neat"` are both rejected. A
//! canonical name may be written with the [`SEVERITY_NAME_PREFIX`]; the
//! deprecated aliases may not.

use diagnostics::{clear_error, raise_invalid_severity, raise_invalid_severity_name};

use super::level::Severity;

/// Optional prefix accepted in front of canonical names, e.g. `SEVERITY_ERR`.
pub const SEVERITY_NAME_PREFIX: &str = "SEVERITY_";

/// Returned by [`severity_to_string`] for values outside `0..=7`.
pub const NO_SUCH_SEVERITY: &str = "NO_SUCH_SEVERITY";

/// Canonical names, indexed by severity value.
pub const SEVERITY_NAMES: [(&str, Severity); 8] = [
    ("EMERG", Severity::Emerg),
    ("ALERT", Severity::Alert),
    ("CRIT", Severity::Crit),
    ("ERR", Severity::Err),
    ("WARNING", Severity::Warning),
    ("NOTICE", Severity::Notice),
    ("INFO", Severity::Info),
    ("DEBUG", Severity::Debug),
];

/// Deprecated names still accepted on input. They are never produced.
pub const DEPRECATED_ALIASES: [(&str, Severity); 3] = [
    ("PANIC", Severity::Emerg),
    ("ERROR", Severity::Err),
    ("WARN", Severity::Warning),
];

fn strip_name_prefix(name: &[u8]) -> &[u8] {
    let prefix = SEVERITY_NAME_PREFIX.as_bytes();
    match name.split_at_checked(prefix.len()) {
        Some((head, rest)) if !rest.is_empty() && head.eq_ignore_ascii_case(prefix) => rest,
        _ => name,
    }
}

fn find(candidates: &[(&str, Severity)], name: &[u8]) -> Option<Severity> {
    candidates
        .iter()
        .find(|(candidate, _)| candidate.as_bytes().eq_ignore_ascii_case(name))
        .map(|&(_, severity)| severity)
}

/// Resolves a name without touching the error slot.
pub(crate) fn lookup(name: &[u8]) -> Option<Severity> {
    find(&SEVERITY_NAMES, strip_name_prefix(name)).or_else(|| find(&DEPRECATED_ALIASES, name))
}

/// Returns the canonical name of a numeric severity.
///
/// Values outside `0..=7` raise
/// [`ErrorId::InvalidSeverity`](diagnostics::ErrorId::InvalidSeverity) with
/// the value as the error code and return [`NO_SUCH_SEVERITY`]. A valid value
/// clears any pending error.
///
/// # Examples
///
/// ```
/// use diagnostics::{ErrorId, get_error};
/// use severity::severity_to_string;
///
/// assert_eq!(severity_to_string(4), "WARNING");
/// assert_eq!(severity_to_string(8), "NO_SUCH_SEVERITY");
/// assert_eq!(get_error().map(|e| e.id()), Some(ErrorId::InvalidSeverity));
/// ```
pub fn severity_to_string(severity: i32) -> &'static str {
    if let Some(level) = Severity::from_value(severity) {
        clear_error();
        level.as_str()
    } else {
        raise_invalid_severity(severity);
        NO_SUCH_SEVERITY
    }
}

/// Looks up a severity by name.
///
/// Accepts the canonical names (optionally prefixed with
/// [`SEVERITY_NAME_PREFIX`]) and the deprecated aliases `panic`, `error` and
/// `warn`, ignoring ASCII case. On failure an invalid-severity error is
/// raised and `None` is returned; on success any pending error is cleared.
///
/// # Examples
///
/// ```
/// use severity::{Severity, string_to_severity};
///
/// assert_eq!(string_to_severity("notice"), Some(Severity::Notice));
/// assert_eq!(string_to_severity("warn"), Some(Severity::Warning));
/// assert_eq!(string_to_severity("war"), None);
/// ```
pub fn string_to_severity(name: &str) -> Option<Severity> {
    string_to_severity_from_buffer(name.as_bytes(), name.len())
}

/// Looks up a severity named by the first `length` bytes of `buffer`.
///
/// Applies the rules of [`string_to_severity`] to
/// `buffer[..min(length, buffer.len())]`, so a level embedded at the start of
/// a larger line can be resolved without copying it out.
///
/// # Examples
///
/// ```
/// use severity::{Severity, string_to_severity_from_buffer};
///
/// let line = b"warning: disk almost full";
/// assert_eq!(string_to_severity_from_buffer(line, 7), Some(Severity::Warning));
/// assert_eq!(string_to_severity_from_buffer(line, 8), None);
/// ```
pub fn string_to_severity_from_buffer(buffer: &[u8], length: usize) -> Option<Severity> {
    let name = &buffer[..length.min(buffer.len())];
    if let Some(severity) = lookup(name) {
        clear_error();
        Some(severity)
    } else {
        raise_invalid_severity_name();
        None
    }
}
