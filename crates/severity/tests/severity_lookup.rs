//! Integration tests for severity name and value lookups.
//!
//! Covers the canonical table, deprecated aliases, and the exactness rules
//! that keep typos from being silently accepted.

use diagnostics::{ErrorId, clear_error, get_error};
use severity::{
    NO_SUCH_SEVERITY, SEVERITY_NAMES, Severity, severity_to_string, string_to_severity,
    string_to_severity_from_buffer,
};

fn assert_invalid_severity_raised() {
    assert_eq!(
        get_error().map(|record| record.id()),
        Some(ErrorId::InvalidSeverity)
    );
    clear_error();
}

// ============================================================================
// severity_to_string
// ============================================================================

#[test]
fn to_string_each_valid_severity() {
    for (name, severity) in SEVERITY_NAMES {
        assert_eq!(severity_to_string(i32::from(severity)), name);
        assert_eq!(get_error(), None);
    }
}

#[test]
fn to_string_one_past_the_table() {
    let past_end = SEVERITY_NAMES.len() as i32;
    assert_eq!(severity_to_string(past_end), NO_SUCH_SEVERITY);
    assert_invalid_severity_raised();

    assert_eq!(severity_to_string(past_end + 1), NO_SUCH_SEVERITY);
    assert_invalid_severity_raised();
}

// ============================================================================
// string_to_severity
// ============================================================================

#[test]
fn to_enum_each_canonical_name() {
    for (name, severity) in SEVERITY_NAMES {
        assert_eq!(string_to_severity(name), Some(severity), "{name}");
    }
}

#[test]
fn to_enum_lowercase_names() {
    let cases = [
        ("emerg", Severity::Emerg),
        ("alert", Severity::Alert),
        ("crit", Severity::Crit),
        ("err", Severity::Err),
        ("warning", Severity::Warning),
        ("notice", Severity::Notice),
        ("info", Severity::Info),
        ("debug", Severity::Debug),
    ];
    for (name, expected) in cases {
        assert_eq!(string_to_severity(name), Some(expected), "{name}");
    }
}

#[test]
fn to_enum_deprecated_aliases() {
    assert_eq!(string_to_severity("panic"), Some(Severity::Emerg));
    assert_eq!(string_to_severity("error"), Some(Severity::Err));
    assert_eq!(string_to_severity("warn"), Some(Severity::Warning));
    assert_eq!(string_to_severity("PANIC"), Some(Severity::Emerg));
}

#[test]
fn to_enum_mixed_case() {
    assert_eq!(string_to_severity("WaRnInG"), Some(Severity::Warning));
    assert_eq!(string_to_severity("Severity_Notice"), Some(Severity::Notice));
}

#[test]
fn to_enum_no_such_severity() {
    assert_eq!(string_to_severity("an_invalid_severity"), None);
    assert_invalid_severity_raised();
}

#[test]
fn to_enum_incomplete_names_are_rejected() {
    for name in ["war", "not", "em", "deb", "pan", "erro"] {
        assert_eq!(string_to_severity(name), None, "{name}");
        assert_invalid_severity_raised();
    }
}

#[test]
fn to_enum_overextended_names_are_rejected() {
    for name in [
        "warnings are neat",
        "notices are bad",
        "panic you should not",
        "info ",
        " info",
    ] {
        assert_eq!(string_to_severity(name), None, "{name}");
        assert_invalid_severity_raised();
    }
}

#[test]
fn round_trip_every_value() {
    for value in 0..=7 {
        let name = severity_to_string(value);
        assert_eq!(string_to_severity(name).map(i32::from), Some(value));
    }
}

// ============================================================================
// string_to_severity_from_buffer
// ============================================================================

#[test]
fn from_buffer_invalid_prefix() {
    assert_eq!(
        string_to_severity_from_buffer(b"an_invalid_severity", 10),
        None
    );
    assert_invalid_severity_raised();
}

#[test]
fn from_buffer_reads_leading_level_of_a_line() {
    let line = b"notice: link up on eth0";
    assert_eq!(
        string_to_severity_from_buffer(line, 6),
        Some(Severity::Notice)
    );
    assert_eq!(get_error(), None);
}

#[test]
fn from_buffer_respects_length_exactly() {
    let buffer = b"warning";
    assert_eq!(string_to_severity_from_buffer(buffer, 4), Some(Severity::Warning));
    assert_eq!(string_to_severity_from_buffer(buffer, 3), None);
    assert_invalid_severity_raised();
    assert_eq!(string_to_severity_from_buffer(buffer, 7), Some(Severity::Warning));
}

#[test]
fn from_buffer_handles_non_utf8_bytes() {
    assert_eq!(string_to_severity_from_buffer(&[0xff, 0xfe, b'x'], 3), None);
    assert_invalid_severity_raised();
}
