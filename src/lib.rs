//! # CLI Printer
//!
//! A small command-line message printer: colorized tags, message templates,
//! printf-style formatting and optional forwarding to a log recorder.
//!
//! ## Features
//!
//! - **Colored Tags**: Messages carry an uppercased tag on an ANSI background
//!   color, configurable per tag
//! - **Templates**: Messages can be referenced by ID instead of being passed
//!   literally
//! - **Log Forwarding**: Each displayed message can be handed to an external
//!   recorder at a level inferred from the tag name
//! - **Testable Output**: The output sink and the printing switch are
//!   explicit state, injectable at construction
//!
//! ## Quick start
//!
//! ```no_run
//! use cli_printer::prelude::*;
//!
//! let mut printer = Printer::new();
//! printer
//!     .set_tag_color("success", Color::Green)
//!     .display("success", "deployed %s in %d seconds", &[
//!         ParamValue::from("api-gateway"),
//!         ParamValue::from(12),
//!     ])?;
//! # Ok::<(), PrinterError>(())
//! ```

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Color, LineBreaks, LogLevel, LogRecorder, MemoryRecorder, ParamValue, Printer,
        PrinterError, Record, Result, RESET,
    };
}

pub use crate::core::{
    Color, LineBreaks, LogLevel, LogRecorder, MemoryRecorder, ParamValue, Printer, PrinterError,
    Record, Result, RESET,
};
