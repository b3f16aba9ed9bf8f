//! crates/diagnostics/src/stream.rs
//! Process-wide error stream used by [`perror`] and the `stream_on_raise` hook.
//!
//! Writes are best effort. The stream is guarded by a mutex that raise paths
//! only ever `try_lock`, so a write that would contend with another thread is
//! dropped rather than blocking the caller.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError, TryLockError};

use super::record::ErrorRecord;
use super::thread_local::get_error;

/// Destination for diagnostic lines describing raised errors.
#[derive(Default)]
pub enum ErrorStream {
    /// Write to the process's standard error.
    #[default]
    Stderr,
    /// Discard every write.
    Disabled,
    /// Write to a caller-provided sink.
    Writer(Box<dyn Write + Send>),
}

impl ErrorStream {
    /// Wraps an arbitrary writer.
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::Writer(Box::new(writer))
    }

    /// Returns `true` when writes are discarded.
    pub const fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

impl fmt::Debug for ErrorStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stderr => f.write_str("Stderr"),
            Self::Disabled => f.write_str("Disabled"),
            Self::Writer(_) => f.debug_tuple("Writer").finish_non_exhaustive(),
        }
    }
}

static ERROR_STREAM: Mutex<ErrorStream> = Mutex::new(ErrorStream::Stderr);

/// Replace the process-wide error stream, returning the previous one.
pub fn set_error_stream(stream: ErrorStream) -> ErrorStream {
    let mut guard = ERROR_STREAM.lock().unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *guard, stream)
}

/// Write raw bytes to the error stream.
///
/// Returns `true` if the bytes were handed to the stream and flushed. A
/// disabled stream, a contended lock or an I/O failure all yield `false`.
pub fn write_to_error_stream(bytes: &[u8]) -> bool {
    with_stream(|out| out.write_all(bytes))
}

/// Write the current thread's error to the error stream, prefixed by `prefix`.
///
/// The line has the form `prefix: ID: message (code type: code)`; the prefix
/// is omitted when empty. Nothing is written when no error is pending, and
/// the error slot is left untouched.
pub fn perror(prefix: &str) {
    if let Some(record) = get_error() {
        write_record(prefix, &record);
    }
}

pub(crate) fn write_record(prefix: &str, record: &ErrorRecord) -> bool {
    with_stream(|out| {
        if prefix.is_empty() {
            writeln!(out, "{record}")
        } else {
            writeln!(out, "{prefix}: {record}")
        }
    })
}

fn with_stream<F>(write: F) -> bool
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let mut guard = match ERROR_STREAM.try_lock() {
        Ok(guard) => guard,
        Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        Err(TryLockError::WouldBlock) => return false,
    };

    let result = match &mut *guard {
        ErrorStream::Disabled => return false,
        ErrorStream::Stderr => {
            let mut stderr = io::stderr().lock();
            write(&mut stderr).and_then(|()| stderr.flush())
        }
        ErrorStream::Writer(writer) => write(writer.as_mut()).and_then(|()| writer.flush()),
    };
    result.is_ok()
}
