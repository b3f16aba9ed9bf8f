//! crates/severity/src/tracing_bridge.rs
//! Conversions between syslog severities and `tracing` levels.
//!
//! Syslog has eight levels and `tracing` five, so the mapping is lossy in
//! both directions: every level more urgent than `WARNING` becomes `ERROR`,
//! `NOTICE` folds into `INFO`, and `TRACE` is reported as `DEBUG`.

use tracing::Level;

use super::level::Severity;

impl From<Severity> for Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Emerg | Severity::Alert | Severity::Crit | Severity::Err => Self::ERROR,
            Severity::Warning => Self::WARN,
            Severity::Notice | Severity::Info => Self::INFO,
            Severity::Debug => Self::DEBUG,
        }
    }
}

impl Severity {
    /// Returns the syslog severity a `tracing` level is logged at.
    #[must_use]
    pub fn from_level(level: Level) -> Self {
        if level == Level::ERROR {
            Self::Err
        } else if level == Level::WARN {
            Self::Warning
        } else if level == Level::INFO {
            Self::Info
        } else {
            Self::Debug
        }
    }
}
