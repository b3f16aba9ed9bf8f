//! crates/diagnostics/src/raise.rs
//! The raise family: record a failure in the calling thread's error slot.
//!
//! [`raise`] is the canonical entry point. The typed helpers below it fix the
//! id and explanatory text for the failures library components detect, so
//! call sites only pass the context that varies. None of these functions
//! allocate; the optional stream and tracing hooks run after the slot has
//! been written.

use super::error_id::ErrorId;
use super::record::{ErrorRecord, ErrorSeverity};
use super::stream::write_record;
use super::thread_local::{current_config, store};

/// Overwrite the calling thread's error with an unclassified record.
///
/// `code` is only meaningful to readers when `code_type` is `Some`.
pub fn raise(
    id: ErrorId,
    message: Option<&'static str>,
    code: i32,
    code_type: Option<&'static str>,
) {
    raise_record(ErrorRecord::new(id, message, code, code_type));
}

/// Overwrite the calling thread's error with a classified record.
pub fn raise_with_severity(
    id: ErrorId,
    severity: ErrorSeverity,
    message: Option<&'static str>,
    code: i32,
    code_type: Option<&'static str>,
) {
    raise_record(ErrorRecord::new(id, message, code, code_type).with_severity(severity));
}

/// Overwrite the calling thread's error with a prepared record.
pub fn raise_record(record: ErrorRecord) {
    store(record);

    let config = current_config();
    if config.stream_on_raise {
        write_record("", &record);
    }
    #[cfg(feature = "tracing")]
    if config.trace_on_raise {
        super::tracing_bridge::emit(&record);
    }
}

fn saturating_code(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn raise_message(id: ErrorId, message: &'static str) {
    raise(id, Some(message), 0, None);
}

/// A network address could not be used.
#[cold]
pub fn raise_address_failure(
    message: Option<&'static str>,
    code: i32,
    code_type: Option<&'static str>,
) {
    raise(ErrorId::AddressFailure, message, code, code_type);
}

/// A hostname could not be resolved to an address.
#[cold]
pub fn raise_resolve_hostname_failure(message: &'static str) {
    raise_message(ErrorId::AddressFailure, message);
}

/// A required argument was empty.
#[cold]
pub fn raise_argument_empty(message: &'static str) {
    raise_message(ErrorId::ArgumentEmpty, message);
}

/// An argument did not fit its destination; `arg_size` saturates at `i32::MAX`.
#[cold]
pub fn raise_argument_too_big(message: &'static str, arg_size: usize, arg_type: &'static str) {
    raise(
        ErrorId::ArgumentTooBig,
        Some(message),
        saturating_code(arg_size),
        Some(arg_type),
    );
}

/// An element with the same name already exists.
#[cold]
pub fn raise_duplicate_element() {
    raise_message(
        ErrorId::DuplicateElement,
        "an element with the given name already exists",
    );
}

/// No element matched the lookup.
#[cold]
pub fn raise_element_not_found() {
    raise_message(
        ErrorId::ElementNotFound,
        "no element with the given characteristics exists",
    );
}

/// A file could not be opened.
#[cold]
pub fn raise_file_open_failure() {
    raise_message(ErrorId::FileOpenFailure, "file could not be opened");
}

/// A file could not be written.
#[cold]
pub fn raise_file_write_failure() {
    raise_message(ErrorId::FileWriteFailure, "file could not be written");
}

/// A function target's callback returned a failure `code`.
#[cold]
pub fn raise_function_target_failure(code: i32) {
    raise(
        ErrorId::FunctionTargetFailure,
        Some("the log function of a function target failed"),
        code,
        Some("return code of the log function"),
    );
}

/// The local hostname could not be retrieved.
#[cold]
pub fn raise_gethostname_failure(
    message: Option<&'static str>,
    code: i32,
    code_type: Option<&'static str>,
) {
    raise(ErrorId::GethostnameFailure, message, code, code_type);
}

/// An index was out of range; `index` saturates at `i32::MAX`.
#[cold]
pub fn raise_index_out_of_bounds(message: &'static str, index: usize) {
    raise(
        ErrorId::IndexOutOfBounds,
        Some(message),
        saturating_code(index),
        Some("the invalid index"),
    );
}

/// Input did not conform to its declared encoding.
#[cold]
pub fn raise_invalid_encoding(message: &'static str) {
    raise_message(ErrorId::InvalidEncoding, message);
}

/// A multibyte to wide string conversion failed with `code`.
#[cold]
pub fn raise_mb_conversion_failure(code: i32) {
    raise(
        ErrorId::InvalidEncoding,
        Some("multibyte string could not be converted to a wide string"),
        code,
        Some("error code of the conversion"),
    );
}

/// A wide to multibyte string conversion failed with `code`.
#[cold]
pub fn raise_wide_conversion_failure(code: i32, code_type: &'static str) {
    raise(
        ErrorId::InvalidEncoding,
        Some("wide string could not be converted to a multibyte string"),
        code,
        Some(code_type),
    );
}

/// A numeric facility was out of range; the value is kept as the code.
#[cold]
pub fn raise_invalid_facility(facility: i32) {
    raise(
        ErrorId::InvalidFacility,
        Some("facility is not valid"),
        facility,
        Some("the invalid facility"),
    );
}

/// An id did not refer to a live object.
#[cold]
pub fn raise_invalid_id() {
    raise_message(ErrorId::InvalidId, "the given id does not refer to a valid object");
}

/// A param string was malformed.
#[cold]
pub fn raise_invalid_param() {
    raise_message(
        ErrorId::InvalidParamString,
        "param string is not formatted as name=\"value\"",
    );
}

/// A numeric severity fell outside `0..=7`; the value is kept as the code.
#[cold]
pub fn raise_invalid_severity(severity: i32) {
    raise(
        ErrorId::InvalidSeverity,
        Some("severity is not valid"),
        severity,
        Some("the invalid severity"),
    );
}

/// A severity name did not match any known level.
#[cold]
pub fn raise_invalid_severity_name() {
    raise_message(
        ErrorId::InvalidSeverity,
        "severity name does not match any known severity",
    );
}

/// A journald submission failed with `code`.
#[cold]
pub fn raise_journald_failure(code: i32) {
    raise(
        ErrorId::JournaldFailure,
        Some("sd_journal_sendv failed"),
        code,
        Some("return code of sd_journal_sendv"),
    );
}

/// An allocation failed.
#[cold]
pub fn raise_memory_allocation_failure() {
    raise_message(ErrorId::MemoryAllocationFailure, "memory allocation failed");
}

/// The peer closed the network connection.
#[cold]
pub fn raise_network_closed(message: &'static str) {
    raise_message(ErrorId::NetworkClosed, message);
}

/// The requested layer 3 protocol is unavailable.
#[cold]
pub fn raise_network_protocol_unsupported() {
    raise_message(
        ErrorId::NetworkProtocolUnsupported,
        "network protocol is not supported by this build",
    );
}

/// The requested layer 4 protocol is unavailable.
#[cold]
pub fn raise_transport_protocol_unsupported() {
    raise_message(
        ErrorId::TransportProtocolUnsupported,
        "transport protocol is not supported by this build",
    );
}

/// No param matched the lookup.
#[cold]
pub fn raise_param_not_found() {
    raise_message(
        ErrorId::ParamNotFound,
        "no param with the given characteristics exists",
    );
}

/// A socket could not be bound.
#[cold]
pub fn raise_socket_bind_failure(
    message: Option<&'static str>,
    code: i32,
    code_type: Option<&'static str>,
) {
    raise(ErrorId::SocketBindFailure, message, code, code_type);
}

/// A socket could not be connected.
#[cold]
pub fn raise_socket_connect_failure(
    message: Option<&'static str>,
    code: i32,
    code_type: Option<&'static str>,
) {
    raise(ErrorId::SocketConnectFailure, message, code, code_type);
}

/// A socket could not be created.
#[cold]
pub fn raise_socket_failure(
    message: Option<&'static str>,
    code: i32,
    code_type: Option<&'static str>,
) {
    raise(ErrorId::SocketFailure, message, code, code_type);
}

/// A socket send failed.
#[cold]
pub fn raise_socket_send_failure(
    message: Option<&'static str>,
    code: i32,
    code_type: Option<&'static str>,
) {
    raise(ErrorId::SocketSendFailure, message, code, code_type);
}

/// SQLite3 reported `SQLITE_BUSY`.
#[cold]
pub fn raise_sqlite3_busy() {
    raise_message(ErrorId::Sqlite3Busy, "the database is busy");
}

/// SQLite3 returned a failing result `code`.
#[cold]
pub fn raise_sqlite3_failure(message: &'static str, code: i32) {
    raise(
        ErrorId::Sqlite3Failure,
        Some(message),
        code,
        Some("sqlite3 result code"),
    );
}

/// A stream write failed.
#[cold]
pub fn raise_stream_write_failure() {
    raise_message(ErrorId::StreamWriteFailure, "stream could not be written");
}

/// The operation does not apply to the target type.
#[cold]
pub fn raise_target_incompatible(message: &'static str) {
    raise_message(ErrorId::TargetIncompatible, message);
}

/// The target type is not available in this build.
#[cold]
pub fn raise_target_unsupported(message: &'static str) {
    raise_message(ErrorId::TargetUnsupported, message);
}

/// The Windows Event Log handle could not be closed.
#[cold]
pub fn raise_wel_close_failure() {
    raise_message(
        ErrorId::WindowsEventLogCloseFailure,
        "the Windows Event Log could not be closed",
    );
}

/// The Windows Event Log could not be opened.
#[cold]
pub fn raise_wel_open_failure() {
    raise_message(
        ErrorId::WindowsEventLogOpenFailure,
        "the Windows Event Log could not be opened",
    );
}

/// A Windows API call failed.
#[cold]
pub fn raise_windows_failure(
    message: Option<&'static str>,
    code: i32,
    code_type: Option<&'static str>,
) {
    raise(ErrorId::WindowsFailure, message, code, code_type);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clear_error, get_error};

    #[test]
    fn raise_overwrites_previous_error() {
        raise(ErrorId::FileOpenFailure, None, 0, None);
        raise(ErrorId::SocketFailure, Some("socket"), 97, Some("errno"));

        let record = get_error().unwrap();
        assert_eq!(record.id(), ErrorId::SocketFailure);
        assert_eq!(record.message(), Some("socket"));
        assert_eq!(record.code(), Some(97));
        assert_eq!(record.severity(), None);
        clear_error();
    }

    #[test]
    fn raise_with_severity_keeps_classification() {
        raise_with_severity(
            ErrorId::MemoryAllocationFailure,
            ErrorSeverity::Critical,
            None,
            0,
            None,
        );
        assert_eq!(
            get_error().and_then(|record| record.severity()),
            Some(ErrorSeverity::Critical)
        );
        clear_error();
    }

    #[test]
    fn invalid_severity_records_value_as_code() {
        raise_invalid_severity(9);
        let record = get_error().unwrap();
        assert_eq!(record.id(), ErrorId::InvalidSeverity);
        assert_eq!(record.code(), Some(9));
        assert_eq!(record.code_type(), Some("the invalid severity"));
        clear_error();
    }

    #[test]
    fn invalid_severity_name_has_no_code() {
        raise_invalid_severity_name();
        let record = get_error().unwrap();
        assert_eq!(record.id(), ErrorId::InvalidSeverity);
        assert_eq!(record.code(), None);
        clear_error();
    }

    #[test]
    fn oversized_arguments_saturate() {
        raise_argument_too_big("message too long", usize::MAX, "message length");
        let record = get_error().unwrap();
        assert_eq!(record.id(), ErrorId::ArgumentTooBig);
        assert_eq!(record.code(), Some(i32::MAX));
        assert_eq!(record.code_type(), Some("message length"));

        raise_index_out_of_bounds("no element at index", 12);
        assert_eq!(get_error().and_then(|record| record.code()), Some(12));
        clear_error();
    }

    #[test]
    fn helpers_pick_expected_ids() {
        let cases: [(fn(), ErrorId); 16] = [
            (raise_duplicate_element, ErrorId::DuplicateElement),
            (raise_element_not_found, ErrorId::ElementNotFound),
            (raise_file_open_failure, ErrorId::FileOpenFailure),
            (raise_file_write_failure, ErrorId::FileWriteFailure),
            (raise_invalid_id, ErrorId::InvalidId),
            (raise_invalid_param, ErrorId::InvalidParamString),
            (raise_memory_allocation_failure, ErrorId::MemoryAllocationFailure),
            (
                raise_network_protocol_unsupported,
                ErrorId::NetworkProtocolUnsupported,
            ),
            (
                raise_transport_protocol_unsupported,
                ErrorId::TransportProtocolUnsupported,
            ),
            (raise_param_not_found, ErrorId::ParamNotFound),
            (raise_sqlite3_busy, ErrorId::Sqlite3Busy),
            (raise_stream_write_failure, ErrorId::StreamWriteFailure),
            (raise_wel_close_failure, ErrorId::WindowsEventLogCloseFailure),
            (raise_wel_open_failure, ErrorId::WindowsEventLogOpenFailure),
            (|| raise_journald_failure(-5), ErrorId::JournaldFailure),
            (|| raise_function_target_failure(-1), ErrorId::FunctionTargetFailure),
        ];

        for (raise_fn, expected) in cases {
            clear_error();
            raise_fn();
            let record = get_error().unwrap();
            assert_eq!(record.id(), expected);
            assert!(record.message().is_some(), "{expected} has no message");
        }
        clear_error();
    }

    #[test]
    fn conversion_failures_report_invalid_encoding() {
        raise_mb_conversion_failure(1113);
        assert_eq!(get_error().map(|r| r.id()), Some(ErrorId::InvalidEncoding));

        raise_wide_conversion_failure(122, "GetLastError value");
        let record = get_error().unwrap();
        assert_eq!(record.id(), ErrorId::InvalidEncoding);
        assert_eq!(record.code_type(), Some("GetLastError value"));
        clear_error();
    }

    #[test]
    fn hostname_resolution_is_an_address_failure() {
        raise_resolve_hostname_failure("could not resolve example.invalid");
        let record = get_error().unwrap();
        assert_eq!(record.id(), ErrorId::AddressFailure);
        assert_eq!(record.code(), None);
        clear_error();
    }
}
