//! crates/diagnostics/src/thread_local.rs
//! Thread-local storage for the last-error slot and reporting configuration.
//!
//! Both slots are `Cell`s holding `Copy` values, so every access is a plain
//! load or store. Nothing here borrows, allocates or locks, which keeps the
//! slot usable from re-entrant code on the same thread. Accesses made while
//! the thread's storage is being torn down are ignored instead of panicking.

use std::cell::Cell;

use super::config::ReportConfig;
use super::record::ErrorRecord;

thread_local! {
    static LAST_ERROR: Cell<Option<ErrorRecord>> = const { Cell::new(None) };
    static REPORT_CONFIG: Cell<ReportConfig> = const {
        Cell::new(ReportConfig {
            stream_on_raise: false,
            trace_on_raise: true,
        })
    };
}

/// Install the reporting configuration for the current thread.
pub fn init(config: ReportConfig) {
    let _ = REPORT_CONFIG.try_with(|slot| slot.set(config));
}

/// Returns the reporting configuration of the current thread.
pub fn current_config() -> ReportConfig {
    REPORT_CONFIG
        .try_with(Cell::get)
        .unwrap_or(ReportConfig::SILENT)
}

/// Returns a copy of the error raised most recently on this thread.
///
/// `None` means no error is pending. Reading the slot never changes it, so
/// this can be called while diagnosing a failure without losing the record.
pub fn get_error() -> Option<ErrorRecord> {
    LAST_ERROR.try_with(Cell::get).ok().flatten()
}

/// Returns `true` when an error is pending on this thread.
pub fn has_error() -> bool {
    get_error().is_some()
}

/// Reset this thread's slot to "no error". Calling it repeatedly is harmless.
pub fn clear_error() {
    let _ = LAST_ERROR.try_with(|slot| slot.set(None));
}

/// Returns the pending error and clears the slot.
pub fn take_error() -> Option<ErrorRecord> {
    LAST_ERROR.try_with(Cell::take).ok().flatten()
}

pub(crate) fn store(record: ErrorRecord) {
    let _ = LAST_ERROR.try_with(|slot| slot.set(Some(record)));
}
