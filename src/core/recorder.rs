//! Log recorder capability
//!
//! The printer does not implement logging itself. Anything that can accept
//! a level, a message and the message parameters can be installed with
//! [`Printer::use_logger`](super::printer::Printer::use_logger) and will
//! receive one record per displayed message.

use super::log_level::LogLevel;
use super::params::ParamValue;

/// Capability required of an external logging collaborator.
///
/// Only [`record`](LogRecorder::record) must be implemented; the per-level
/// methods and the by-name entry point are provided on top of it.
pub trait LogRecorder: Send {
    /// Add a record at the given level.
    fn record(&mut self, level: LogLevel, message: &str, params: &[ParamValue]);

    /// Add a record for a level given by name, falling back to debug when
    /// the name is not a known level.
    fn record_named(&mut self, name: &str, message: &str, params: &[ParamValue]) {
        let level = LogLevel::from_tag(name).unwrap_or_default();
        self.record(level, message, params);
    }

    fn debug(&mut self, message: &str, params: &[ParamValue]) {
        self.record(LogLevel::Debug, message, params);
    }

    fn info(&mut self, message: &str, params: &[ParamValue]) {
        self.record(LogLevel::Info, message, params);
    }

    fn notice(&mut self, message: &str, params: &[ParamValue]) {
        self.record(LogLevel::Notice, message, params);
    }

    fn warning(&mut self, message: &str, params: &[ParamValue]) {
        self.record(LogLevel::Warning, message, params);
    }

    fn error(&mut self, message: &str, params: &[ParamValue]) {
        self.record(LogLevel::Error, message, params);
    }

    fn critical(&mut self, message: &str, params: &[ParamValue]) {
        self.record(LogLevel::Critical, message, params);
    }

    fn alert(&mut self, message: &str, params: &[ParamValue]) {
        self.record(LogLevel::Alert, message, params);
    }

    fn emergency(&mut self, message: &str, params: &[ParamValue]) {
        self.record(LogLevel::Emergency, message, params);
    }
}

/// A single captured record.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub level: LogLevel,
    pub message: String,
    pub params: Vec<ParamValue>,
}

/// In-memory recorder that keeps every record it receives.
///
/// Useful in tests and as a reference implementation of [`LogRecorder`].
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    records: Vec<Record>,
}

impl MemoryRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All records captured so far, oldest first.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl LogRecorder for MemoryRecorder {
    fn record(&mut self, level: LogLevel, message: &str, params: &[ParamValue]) {
        self.records.push(Record {
            level,
            message: message.to_string(),
            params: params.to_vec(),
        });
    }
}
