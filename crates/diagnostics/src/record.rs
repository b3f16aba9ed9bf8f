//! crates/diagnostics/src/record.rs
//! The error record stored in each thread's last-error slot.

use std::fmt;

use super::error_id::ErrorId;

/// Optional classification attached to a raised error.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Diagnostic detail only.
    Debug,
    /// Informational; the operation may still have succeeded.
    Info,
    /// The operation degraded but produced a result.
    Warning,
    /// The operation failed.
    Error,
    /// The failure leaves the caller unable to continue logging.
    Critical,
}

impl ErrorSeverity {
    /// Returns the lower-case name of the classification.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of the most recent failure detected on the current thread.
///
/// Only [`id`](Self::id) is guaranteed to be meaningful. The message and
/// classification are optional, and [`code`](Self::code) is only valid when a
/// [`code_type`](Self::code_type) is present. All text is `'static` so a
/// record can be copied in and out of the thread-local slot without
/// allocating.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ErrorRecord {
    id: ErrorId,
    message: Option<&'static str>,
    code: i32,
    code_type: Option<&'static str>,
    severity: Option<ErrorSeverity>,
}

impl ErrorRecord {
    /// Creates an unclassified record.
    #[must_use]
    pub const fn new(
        id: ErrorId,
        message: Option<&'static str>,
        code: i32,
        code_type: Option<&'static str>,
    ) -> Self {
        Self {
            id,
            message,
            code,
            code_type,
            severity: None,
        }
    }

    /// Returns a copy of the record carrying the given classification.
    #[must_use]
    pub const fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Returns the error family.
    #[must_use]
    pub const fn id(&self) -> ErrorId {
        self.id
    }

    /// Returns the human-readable explanation, if one was provided.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        self.message
    }

    /// Returns the secondary code, or `None` when no code type describes it.
    #[must_use]
    pub const fn code(&self) -> Option<i32> {
        match self.code_type {
            Some(_) => Some(self.code),
            None => None,
        }
    }

    /// Returns the raw secondary code regardless of validity.
    #[must_use]
    pub const fn raw_code(&self) -> i32 {
        self.code
    }

    /// Returns the description of what [`code`](Self::code) means.
    #[must_use]
    pub const fn code_type(&self) -> Option<&'static str> {
        self.code_type
    }

    /// Returns the classification, if one was attached.
    #[must_use]
    pub const fn severity(&self) -> Option<ErrorSeverity> {
        self.severity
    }
}

impl fmt::Display for ErrorRecord {
    /// Renders `ID: message (code type: code)`, omitting absent parts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id.as_str())?;
        if let Some(message) = self.message {
            write!(f, ": {message}")?;
        }
        if let Some(code_type) = self.code_type {
            write!(f, " ({code_type}: {})", self.code)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorRecord {}
