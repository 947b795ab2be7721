#![deny(missing_docs)]
//! Shared logging utilities for the review form workspace.
//!
//! This crate provides the `form_*` logging macros used by the controller and
//! a minimal test initializer for the global logger.

use std::cell::Cell;

thread_local! {
    /// Sequence number of the UI event currently being dispatched.
    static EVENT_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// Records the sequence number of the event being dispatched on this thread.
pub fn set_event_seq(seq: u64) {
    EVENT_SEQ.with(|v| v.set(seq));
}

/// Returns the sequence number of the event being dispatched on this thread.
/// Returns 0 before the first event.
pub fn get_event_seq() -> u64 {
    EVENT_SEQ.with(|v| v.get())
}

/// Logs a trace-level message, tagged with the current event sequence number.
#[macro_export]
macro_rules! form_trace {
    ($($arg:tt)*) => {{
        log::trace!("[ev {}] {}", $crate::get_event_seq(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message, tagged with the current event sequence number.
#[macro_export]
macro_rules! form_debug {
    ($($arg:tt)*) => {{
        log::debug!("[ev {}] {}", $crate::get_event_seq(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! form_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! form_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! form_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may have installed the logger already.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
