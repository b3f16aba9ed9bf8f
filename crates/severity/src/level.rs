//! crates/severity/src/level.rs
//! The eight syslog severity levels.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::table;

/// Syslog severity, from `Emerg` (0, most urgent) to `Debug` (7, least).
///
/// The numeric values are those of RFC 5424 and occupy the low three bits of
/// a prival.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(u8)]
pub enum Severity {
    /// System is unusable.
    #[doc(alias = "LOG_EMERG")]
    Emerg = 0,
    /// Action must be taken immediately.
    #[doc(alias = "LOG_ALERT")]
    Alert = 1,
    /// Critical conditions.
    #[doc(alias = "LOG_CRIT")]
    Crit = 2,
    /// Error conditions.
    #[doc(alias = "LOG_ERR")]
    Err = 3,
    /// Warning conditions.
    #[doc(alias = "LOG_WARNING")]
    Warning = 4,
    /// Normal but significant condition.
    #[doc(alias = "LOG_NOTICE")]
    Notice = 5,
    /// Informational messages.
    #[doc(alias = "LOG_INFO")]
    Info = 6,
    /// Debug-level messages.
    #[doc(alias = "LOG_DEBUG")]
    Debug = 7,
}

/// Error returned when a string names no severity.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown severity name: \"{invalid_name}\"")]
pub struct ParseSeverityError {
    invalid_name: String,
}

impl ParseSeverityError {
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

/// Error returned when an integer lies outside `0..=7`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("severity value {0} is outside the range 0..=7")]
pub struct InvalidSeverityValue(pub i32);

impl Severity {
    /// Every severity in ascending numeric order (most urgent first).
    pub const ALL: [Self; 8] = [
        Self::Emerg,
        Self::Alert,
        Self::Crit,
        Self::Err,
        Self::Warning,
        Self::Notice,
        Self::Info,
        Self::Debug,
    ];

    /// Returns the RFC 5424 numeric value.
    #[must_use]
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the severity with the given numeric value, if it is in range.
    #[must_use]
    pub const fn from_value(value: i32) -> Option<Self> {
        if value >= 0 && value < Self::ALL.len() as i32 {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// Returns the canonical upper-case name, e.g. `"WARNING"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        table::SEVERITY_NAMES[self as usize].0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses a name with the same rules as
    /// [`string_to_severity`](crate::string_to_severity), without touching the
    /// thread's error slot.
    fn from_str(s: &str) -> Result<Self, ParseSeverityError> {
        table::lookup(s.as_bytes()).ok_or_else(|| ParseSeverityError::new(s))
    }
}

impl TryFrom<i32> for Severity {
    type Error = InvalidSeverityValue;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(InvalidSeverityValue(value))
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.value()
    }
}

impl From<Severity> for i32 {
    fn from(severity: Severity) -> Self {
        Self::from(severity.value())
    }
}
