#![deny(unsafe_code)]
#![deny(missing_docs)]

//! # Overview
//!
//! `logkit` bundles the two diagnostic utilities shared by the logging
//! library's components:
//!
//! - [`diagnostics`]: the per-thread last-error slot, the raise family and
//!   the optional error stream.
//! - [`severity`]: syslog severity names, lookups and prival decoding.
//!
//! Both crates are re-exported whole, and their common entry points are
//! available at the crate root.
//!
//! # Examples
//!
//! ```
//! use logkit::{ErrorId, Severity, get_error, string_to_severity};
//!
//! assert_eq!(string_to_severity("warn"), Some(Severity::Warning));
//!
//! assert_eq!(string_to_severity("warnings are neat"), None);
//! assert_eq!(get_error().map(|e| e.id()), Some(ErrorId::InvalidSeverity));
//! ```

pub use diagnostics;
pub use severity;

pub use diagnostics::{
    ErrorId, ErrorRecord, ErrorSeverity, ErrorStream, ReportConfig, clear_error, get_error,
    has_error, perror, set_error_stream, take_error,
};
pub use severity::{
    NO_SUCH_SEVERITY, Severity, severity_from_prival, severity_is_invalid, severity_to_string,
    string_to_severity, string_to_severity_from_buffer,
};
