//! crates/diagnostics/src/error_id.rs
//! Closed enumeration of the failures the library can report.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identifier of the kind of failure recorded in an [`ErrorRecord`].
///
/// The numeric values are stable and dense (`0..=33`), so an id can be
/// stored in or recovered from a plain integer with [`ErrorId::value`] and
/// [`ErrorId::from_value`]. The same id may be raised from different contexts
/// with a different ultimate cause; the message, code and code type of the
/// record carry the details.
///
/// [`ErrorRecord`]: crate::ErrorRecord
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ErrorId {
    /// A provided network address was not valid.
    AddressFailure = 0,
    /// A required argument was empty.
    ArgumentEmpty = 1,
    /// A provided argument was too big for its destination.
    ArgumentTooBig = 2,
    /// A duplicate of an existing element was detected.
    DuplicateElement = 3,
    /// No element with the requested characteristics was found.
    ElementNotFound = 4,
    /// A file could not be opened.
    FileOpenFailure = 5,
    /// A file could not be written.
    FileWriteFailure = 6,
    /// A provided index was outside the valid range.
    IndexOutOfBounds = 7,
    /// A facility code did not conform to RFC 5424.
    InvalidFacility = 8,
    /// A target or entry id was not valid.
    InvalidId = 9,
    /// A severity code did not conform to RFC 5424.
    InvalidSeverity = 10,
    /// A memory allocation failed.
    MemoryAllocationFailure = 11,
    /// The requested layer 3 protocol is not supported.
    NetworkProtocolUnsupported = 12,
    /// No param with the requested characteristics was found.
    ParamNotFound = 13,
    /// A socket could not be bound.
    SocketBindFailure = 14,
    /// A socket could not be connected.
    SocketConnectFailure = 15,
    /// A socket could not be created.
    SocketFailure = 16,
    /// Data could not be sent over a socket.
    SocketSendFailure = 17,
    /// A stream could not be written.
    StreamWriteFailure = 18,
    /// The operation is not valid for the given target type.
    TargetIncompatible = 19,
    /// The target type is not supported by this build.
    TargetUnsupported = 20,
    /// The requested layer 4 protocol is not supported.
    TransportProtocolUnsupported = 21,
    /// The Windows Event Log could not be closed.
    WindowsEventLogCloseFailure = 22,
    /// The Windows Event Log could not be opened.
    WindowsEventLogOpenFailure = 23,
    /// A provided encoding does not conform to its standard.
    InvalidEncoding = 24,
    /// The current hostname could not be retrieved.
    GethostnameFailure = 25,
    /// A function target's log callback reported a failure.
    FunctionTargetFailure = 26,
    /// A call into systemd journald failed.
    JournaldFailure = 27,
    /// A Windows API call failed.
    WindowsFailure = 28,
    /// A param string was not formatted correctly.
    InvalidParamString = 29,
    /// SQLite3 was busy and could not complete the request.
    Sqlite3Busy = 30,
    /// A custom SQLite3 callback failed.
    Sqlite3CallbackFailure = 31,
    /// SQLite3 reported a failure.
    Sqlite3Failure = 32,
    /// The network connection has been closed.
    NetworkClosed = 33,
}

/// Error returned when parsing an [`ErrorId`] from its canonical name fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown error id name: \"{invalid_name}\"")]
pub struct ParseErrorIdError {
    invalid_name: String,
}

impl ParseErrorIdError {
    /// Creates a parse error that records the rejected name.
    #[must_use]
    pub fn new(invalid_name: &str) -> Self {
        Self {
            invalid_name: invalid_name.to_owned(),
        }
    }

    /// Returns the name that failed to parse.
    #[must_use]
    pub fn invalid_name(&self) -> &str {
        &self.invalid_name
    }
}

impl ErrorId {
    /// Every id in ascending numeric order.
    pub const ALL: [Self; 34] = [
        Self::AddressFailure,
        Self::ArgumentEmpty,
        Self::ArgumentTooBig,
        Self::DuplicateElement,
        Self::ElementNotFound,
        Self::FileOpenFailure,
        Self::FileWriteFailure,
        Self::IndexOutOfBounds,
        Self::InvalidFacility,
        Self::InvalidId,
        Self::InvalidSeverity,
        Self::MemoryAllocationFailure,
        Self::NetworkProtocolUnsupported,
        Self::ParamNotFound,
        Self::SocketBindFailure,
        Self::SocketConnectFailure,
        Self::SocketFailure,
        Self::SocketSendFailure,
        Self::StreamWriteFailure,
        Self::TargetIncompatible,
        Self::TargetUnsupported,
        Self::TransportProtocolUnsupported,
        Self::WindowsEventLogCloseFailure,
        Self::WindowsEventLogOpenFailure,
        Self::InvalidEncoding,
        Self::GethostnameFailure,
        Self::FunctionTargetFailure,
        Self::JournaldFailure,
        Self::WindowsFailure,
        Self::InvalidParamString,
        Self::Sqlite3Busy,
        Self::Sqlite3CallbackFailure,
        Self::Sqlite3Failure,
        Self::NetworkClosed,
    ];

    /// Returns the stable numeric value of the id.
    #[must_use]
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Recovers an id from its numeric value.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if (value as usize) < Self::ALL.len() {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// Returns the canonical upper-case name of the id.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddressFailure => "ADDRESS_FAILURE",
            Self::ArgumentEmpty => "ARGUMENT_EMPTY",
            Self::ArgumentTooBig => "ARGUMENT_TOO_BIG",
            Self::DuplicateElement => "DUPLICATE_ELEMENT",
            Self::ElementNotFound => "ELEMENT_NOT_FOUND",
            Self::FileOpenFailure => "FILE_OPEN_FAILURE",
            Self::FileWriteFailure => "FILE_WRITE_FAILURE",
            Self::IndexOutOfBounds => "INDEX_OUT_OF_BOUNDS",
            Self::InvalidFacility => "INVALID_FACILITY",
            Self::InvalidId => "INVALID_ID",
            Self::InvalidSeverity => "INVALID_SEVERITY",
            Self::MemoryAllocationFailure => "MEMORY_ALLOCATION_FAILURE",
            Self::NetworkProtocolUnsupported => "NETWORK_PROTOCOL_UNSUPPORTED",
            Self::ParamNotFound => "PARAM_NOT_FOUND",
            Self::SocketBindFailure => "SOCKET_BIND_FAILURE",
            Self::SocketConnectFailure => "SOCKET_CONNECT_FAILURE",
            Self::SocketFailure => "SOCKET_FAILURE",
            Self::SocketSendFailure => "SOCKET_SEND_FAILURE",
            Self::StreamWriteFailure => "STREAM_WRITE_FAILURE",
            Self::TargetIncompatible => "TARGET_INCOMPATIBLE",
            Self::TargetUnsupported => "TARGET_UNSUPPORTED",
            Self::TransportProtocolUnsupported => "TRANSPORT_PROTOCOL_UNSUPPORTED",
            Self::WindowsEventLogCloseFailure => "WINDOWS_EVENT_LOG_CLOSE_FAILURE",
            Self::WindowsEventLogOpenFailure => "WINDOWS_EVENT_LOG_OPEN_FAILURE",
            Self::InvalidEncoding => "INVALID_ENCODING",
            Self::GethostnameFailure => "GETHOSTNAME_FAILURE",
            Self::FunctionTargetFailure => "FUNCTION_TARGET_FAILURE",
            Self::JournaldFailure => "JOURNALD_FAILURE",
            Self::WindowsFailure => "WINDOWS_FAILURE",
            Self::InvalidParamString => "INVALID_PARAM_STRING",
            Self::Sqlite3Busy => "SQLITE3_BUSY",
            Self::Sqlite3CallbackFailure => "SQLITE3_CALLBACK_FAILURE",
            Self::Sqlite3Failure => "SQLITE3_FAILURE",
            Self::NetworkClosed => "NETWORK_CLOSED",
        }
    }
}

impl fmt::Display for ErrorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorId {
    type Err = ParseErrorIdError;

    /// Parses a canonical name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseErrorIdError::new(s))
    }
}

impl From<ErrorId> for u8 {
    fn from(id: ErrorId) -> Self {
        id.value()
    }
}
