//! Display macros for ergonomic tagged printing.
//!
//! These macros pack their trailing arguments into [`ParamValue`]s and call
//! [`Printer::display`], replacing the dynamic tag-as-method shorthand with
//! compile-time dispatch.
//!
//! # Examples
//!
//! ```no_run
//! use cli_printer::prelude::*;
//! use cli_printer::{display, info, error};
//!
//! let mut printer = Printer::new();
//!
//! // Arbitrary tag
//! display!(printer, "header", "deployment report")?;
//!
//! // Level tags
//! info!(printer, "service %s is up", "api")?;
//! error!(printer, "exit code %d", 3)?;
//! # Ok::<(), PrinterError>(())
//! ```
//!
//! [`ParamValue`]: crate::core::ParamValue
//! [`Printer::display`]: crate::core::Printer::display

/// Display a message with an explicit tag.
///
/// # Examples
///
/// ```no_run
/// # use cli_printer::prelude::*;
/// # let mut printer = Printer::new();
/// use cli_printer::display;
/// display!(printer, "tag", "plain message")?;
/// display!(printer, "tag", "user %s logged in", "ada")?;
/// # Ok::<(), PrinterError>(())
/// ```
#[macro_export]
macro_rules! display {
    ($printer:expr, $tag:expr, $message:expr $(, $param:expr)* $(,)?) => {
        $printer.display($tag, $message, &[$($crate::ParamValue::from($param)),*])
    };
}

/// Display a debug-tagged message.
#[macro_export]
macro_rules! debug {
    ($printer:expr, $message:expr $(, $param:expr)* $(,)?) => {
        $crate::display!($printer, "debug", $message $(, $param)*)
    };
}

/// Display an info-tagged message.
#[macro_export]
macro_rules! info {
    ($printer:expr, $message:expr $(, $param:expr)* $(,)?) => {
        $crate::display!($printer, "info", $message $(, $param)*)
    };
}

/// Display a notice-tagged message.
#[macro_export]
macro_rules! notice {
    ($printer:expr, $message:expr $(, $param:expr)* $(,)?) => {
        $crate::display!($printer, "notice", $message $(, $param)*)
    };
}

/// Display a warning-tagged message.
#[macro_export]
macro_rules! warning {
    ($printer:expr, $message:expr $(, $param:expr)* $(,)?) => {
        $crate::display!($printer, "warning", $message $(, $param)*)
    };
}

/// Display an error-tagged message.
#[macro_export]
macro_rules! error {
    ($printer:expr, $message:expr $(, $param:expr)* $(,)?) => {
        $crate::display!($printer, "error", $message $(, $param)*)
    };
}

/// Display a critical-tagged message.
#[macro_export]
macro_rules! critical {
    ($printer:expr, $message:expr $(, $param:expr)* $(,)?) => {
        $crate::display!($printer, "critical", $message $(, $param)*)
    };
}

/// Display an alert-tagged message.
#[macro_export]
macro_rules! alert {
    ($printer:expr, $message:expr $(, $param:expr)* $(,)?) => {
        $crate::display!($printer, "alert", $message $(, $param)*)
    };
}

/// Display an emergency-tagged message.
#[macro_export]
macro_rules! emergency {
    ($printer:expr, $message:expr $(, $param:expr)* $(,)?) => {
        $crate::display!($printer, "emergency", $message $(, $param)*)
    };
}
