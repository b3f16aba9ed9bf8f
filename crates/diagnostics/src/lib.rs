#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `diagnostics` records the most recent failure detected by the logging
//! utilities in a per-thread slot. Library code that detects bad input calls
//! one of the `raise_*` functions and returns a sentinel to its caller; the
//! caller inspects [`get_error`] for the details.
//!
//! # Design
//!
//! Each thread owns one [`ErrorRecord`] slot. A record is a `Copy` value made
//! of an [`ErrorId`], optional `'static` text, a secondary code and an
//! optional [`ErrorSeverity`], so raising a failure is a single store into a
//! thread-local `Cell` with no allocation and no locking.
//!
//! Two optional hooks observe raises, selected per thread with
//! [`ReportConfig`]:
//!
//! - `stream_on_raise` writes one line per raise to the process-wide
//!   [`ErrorStream`] (standard error by default).
//! - `trace_on_raise` emits a `tracing` event with target `logkit::error`
//!   when the `tracing` feature is enabled.
//!
//! # Invariants
//!
//! - Threads never observe each other's records.
//! - [`get_error`] never modifies the slot.
//! - A record's code is only exposed when it has a code type.
//!
//! # Examples
//!
//! ```
//! use diagnostics::{ErrorId, clear_error, get_error, raise_invalid_severity};
//!
//! raise_invalid_severity(12);
//!
//! let record = get_error().expect("error pending");
//! assert_eq!(record.id(), ErrorId::InvalidSeverity);
//! assert_eq!(record.code(), Some(12));
//!
//! clear_error();
//! assert!(get_error().is_none());
//! ```

mod config;
mod error_id;
mod raise;
mod record;
mod stream;
mod thread_local;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::ReportConfig;
pub use error_id::{ErrorId, ParseErrorIdError};
pub use raise::*;
pub use record::{ErrorRecord, ErrorSeverity};
pub use stream::{ErrorStream, perror, set_error_stream, write_to_error_stream};
pub use thread_local::{clear_error, current_config, get_error, has_error, init, take_error};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{RAISE_TARGET, level_for};
