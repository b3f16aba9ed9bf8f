//! crates/diagnostics/src/config.rs
//! Per-thread reporting configuration for raised errors.

/// Controls which diagnostic hooks run when an error is raised.
///
/// Storing the error in the thread's slot always happens; these switches only
/// govern the optional side channels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReportConfig {
    /// Write a line describing each raised error to the error stream.
    pub stream_on_raise: bool,
    /// Emit a `tracing` event for each raised error (requires the `tracing`
    /// feature).
    pub trace_on_raise: bool,
}

impl ReportConfig {
    /// Configuration with every hook switched off.
    pub const SILENT: Self = Self {
        stream_on_raise: false,
        trace_on_raise: false,
    };

    /// Configuration with every hook switched on.
    pub const VERBOSE: Self = Self {
        stream_on_raise: true,
        trace_on_raise: true,
    };

    /// Returns a copy with `stream_on_raise` set.
    #[must_use]
    pub const fn with_stream_on_raise(mut self, enabled: bool) -> Self {
        self.stream_on_raise = enabled;
        self
    }

    /// Returns a copy with `trace_on_raise` set.
    #[must_use]
    pub const fn with_trace_on_raise(mut self, enabled: bool) -> Self {
        self.trace_on_raise = enabled;
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            stream_on_raise: false,
            trace_on_raise: true,
        }
    }
}
