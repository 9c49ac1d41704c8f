//! Core printer types and traits

pub mod color;
pub mod error;
pub mod format;
pub mod log_level;
pub mod params;
pub mod printer;
pub mod recorder;

pub use color::Color;
pub use error::{PrinterError, Result};
pub use log_level::LogLevel;
pub use params::ParamValue;
pub use printer::{LineBreaks, Printer, RESET};
pub use recorder::{LogRecorder, MemoryRecorder, Record};
