//! Diagnostic logging.
//!
//! The library never prints on its own. Every log line funnels through a single
//! **backend** function that the embedding application registers; until one is
//! registered, lines are dropped. Only failure paths log, so the formatting and
//! parsing fast paths cost nothing beyond what they already do.
//!
//! # Backend contract
//!
//! The backend receives the level and pre-formatted arguments for a **single
//! log line** and is responsible for terminating the line itself.
//!
//! ```ignore
//! fn to_stderr(level: LogLevel, args: core::fmt::Arguments<'_>) {
//!     eprintln!("[decfmt {:?}] {}", level, args);
//! }
//!
//! decfmt_lib::log::log_register_backend(to_stderr);
//! decfmt_lib::log::log_set_level(LogLevel::Debug);
//! ```

use core::fmt;
use core::sync::atomic::{AtomicU8, Ordering};

use spin::RwLock;

/// Severity of a log line. Lower values are more severe.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl LogLevel {
    /// Lower-case name, for backends that prefix lines with the level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Anything above `Trace` saturates to `Trace`.
impl From<u8> for LogLevel {
    fn from(raw: u8) -> Self {
        match raw {
            0 => Self::Error,
            1 => Self::Warn,
            2 => Self::Info,
            3 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

/// Most verbose level that still reaches the backend.
static MAX_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Warn as u8);

/// Signature of a log backend.
pub type LogBackend = fn(LogLevel, fmt::Arguments<'_>);

/// `None` drops every line.
static BACKEND: RwLock<Option<LogBackend>> = RwLock::new(None);

/// Install `backend` as the sink for all subsequent log lines.
pub fn log_register_backend(backend: LogBackend) {
    *BACKEND.write() = Some(backend);
}

/// Remove the registered backend; later lines are dropped.
pub fn log_clear_backend() {
    *BACKEND.write() = None;
}

/// Let lines at `level` and every more severe level through. Defaults to
/// [`LogLevel::Warn`], which keeps the failure diagnostics (logged at
/// `Debug`) silent.
pub fn log_set_level(level: LogLevel) {
    MAX_LEVEL.store(level as u8, Ordering::Relaxed);
}

/// The level last passed to [`log_set_level`].
pub fn log_get_level() -> LogLevel {
    LogLevel::from(MAX_LEVEL.load(Ordering::Relaxed))
}

/// Whether a line at `level` would pass the level filter. Says nothing about
/// whether a backend is registered.
#[inline]
pub fn log_is_enabled(level: LogLevel) -> bool {
    level as u8 <= MAX_LEVEL.load(Ordering::Relaxed)
}

/// Hand one line to the backend if `level` passes the filter.
///
/// The lock is only taken after the level check, so filtered lines cost a
/// single atomic load.
pub fn log_args(level: LogLevel, args: fmt::Arguments<'_>) {
    if !log_is_enabled(level) {
        return;
    }
    let backend = *BACKEND.read();
    if let Some(backend) = backend {
        backend(level, args);
    }
}

/// Log at an explicit [`LogLevel`]: `decfmt_log!(LogLevel::Info, "n = {}", n)`.
#[macro_export]
macro_rules! decfmt_log {
    ($level:expr, $($arg:tt)*) => {
        $crate::log::log_args($level, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! decfmt_warn {
    ($($arg:tt)*) => { $crate::decfmt_log!($crate::log::LogLevel::Warn, $($arg)*) };
}

#[macro_export]
macro_rules! decfmt_debug {
    ($($arg:tt)*) => { $crate::decfmt_log!($crate::log::LogLevel::Debug, $($arg)*) };
}

#[macro_export]
macro_rules! decfmt_trace {
    ($($arg:tt)*) => { $crate::decfmt_log!($crate::log::LogLevel::Trace, $($arg)*) };
}
