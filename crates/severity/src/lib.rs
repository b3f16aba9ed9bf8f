#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `severity` maps between the eight syslog severity levels, their canonical
//! names and the packed priority values ("privals") that carry them.
//!
//! # Design
//!
//! [`Severity`] is a `#[repr(u8)]` enum whose discriminants are the RFC 5424
//! values. Its canonical names live in a `const` table indexed by value,
//! alongside three deprecated input aliases (`PANIC`, `ERROR`, `WARN`).
//!
//! The free functions keep the sentinel-returning contract of the logging
//! library: a bad value or name never panics, it raises
//! [`ErrorId::InvalidSeverity`](diagnostics::ErrorId::InvalidSeverity) in the
//! calling thread's error slot and returns [`NO_SUCH_SEVERITY`] or `None`.
//! The trait implementations ([`FromStr`](std::str::FromStr),
//! [`TryFrom<i32>`]) return typed errors instead and leave the slot alone.
//!
//! # Examples
//!
//! ```
//! use severity::{Severity, severity_from_prival, severity_to_string, string_to_severity};
//!
//! let prival = 16 * 8 + 3; // local0.err
//! let level = severity_from_prival(prival);
//! assert_eq!(level, Severity::Err);
//!
//! let name = severity_to_string(i32::from(level));
//! assert_eq!(name, "ERR");
//! assert_eq!(string_to_severity(name), Some(level));
//! ```

mod level;
mod prival;
mod table;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use level::{InvalidSeverityValue, ParseSeverityError, Severity};
pub use prival::{SEVERITY_MASK, severity_from_prival, severity_is_invalid};
pub use table::{
    DEPRECATED_ALIASES, NO_SUCH_SEVERITY, SEVERITY_NAME_PREFIX, SEVERITY_NAMES,
    severity_to_string, string_to_severity, string_to_severity_from_buffer,
};
