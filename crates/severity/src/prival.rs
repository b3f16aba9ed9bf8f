//! crates/severity/src/prival.rs
//! Severity extraction from packed priority values.
//!
//! A prival is `facility * 8 + severity`, so the severity lives in the low
//! three bits. Decoding the facility half is left to the components that
//! build and parse full priorities.

use super::level::Severity;

/// Mask selecting the severity bits of a prival.
pub const SEVERITY_MASK: i32 = 0x7;

/// Returns the severity encoded in the low three bits of `prival`.
///
/// Every integer decodes to a severity; no validation is performed.
#[must_use]
pub const fn severity_from_prival(prival: i32) -> Severity {
    Severity::ALL[(prival & SEVERITY_MASK) as usize]
}

/// Returns `true` when `severity` is outside `0..=7`.
///
/// This predicate never raises; callers that reject the value decide whether
/// to record an error.
#[must_use]
pub const fn severity_is_invalid(severity: i32) -> bool {
    severity < 0 || severity > 7
}

impl Severity {
    /// Equivalent to [`severity_from_prival`].
    #[must_use]
    pub const fn from_prival(prival: i32) -> Self {
        severity_from_prival(prival)
    }
}
