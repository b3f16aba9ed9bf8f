//! crates/diagnostics/src/tracing_bridge.rs
//! Mirrors raised errors into the `tracing` ecosystem.
//!
//! When the `tracing` feature is enabled and the thread's
//! [`ReportConfig::trace_on_raise`](crate::ReportConfig::trace_on_raise) is
//! set, every raise emits one event with target [`RAISE_TARGET`]. The event
//! level follows the record's [`ErrorSeverity`]; unclassified records log at
//! `DEBUG` because the caller still receives the sentinel and decides whether
//! the failure matters.
//!
//! ```rust,ignore
//! use diagnostics::{ErrorId, raise};
//!
//! tracing_subscriber::fmt().init();
//! raise(ErrorId::InvalidSeverity, Some("severity is not valid"), 9, Some("severity"));
//! // DEBUG logkit::error: severity is not valid id="INVALID_SEVERITY" code=Some(9) ...
//! ```

use tracing::Level;

use super::record::{ErrorRecord, ErrorSeverity};

/// Target attached to every raise event.
pub const RAISE_TARGET: &str = "logkit::error";

impl From<ErrorSeverity> for Level {
    fn from(severity: ErrorSeverity) -> Self {
        match severity {
            ErrorSeverity::Debug => Self::DEBUG,
            ErrorSeverity::Info => Self::INFO,
            ErrorSeverity::Warning => Self::WARN,
            ErrorSeverity::Error | ErrorSeverity::Critical => Self::ERROR,
        }
    }
}

/// Returns the level a record with the given classification is logged at.
pub fn level_for(severity: Option<ErrorSeverity>) -> Level {
    severity.map_or(Level::DEBUG, Level::from)
}

macro_rules! raise_event {
    ($macro:ident, $record:expr) => {
        ::tracing::$macro!(
            target: RAISE_TARGET,
            id = $record.id().as_str(),
            code = $record.code(),
            code_type = $record.code_type(),
            "{}",
            $record.message().unwrap_or("error raised")
        )
    };
}

pub(crate) fn emit(record: &ErrorRecord) {
    match record.severity() {
        Some(ErrorSeverity::Error | ErrorSeverity::Critical) => raise_event!(error, record),
        Some(ErrorSeverity::Warning) => raise_event!(warn, record),
        Some(ErrorSeverity::Info) => raise_event!(info, record),
        Some(ErrorSeverity::Debug) | None => raise_event!(debug, record),
    }
}
