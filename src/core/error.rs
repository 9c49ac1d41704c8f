//! Error types for the printer

pub type Result<T> = std::result::Result<T, PrinterError>;

#[derive(Debug, thiserror::Error)]
pub enum PrinterError {
    /// IO error while writing to the output sink
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Template references an argument that was not supplied
    #[error("Format error: missing argument {index} for '%{directive}'")]
    MissingArgument { index: usize, directive: char },

    /// Supplied argument cannot satisfy the placeholder type
    #[error("Format error: argument {index} for '%{directive}' has incompatible type {found}")]
    ArgumentType {
        index: usize,
        directive: char,
        found: &'static str,
    },

    /// Placeholder uses a conversion the formatter does not support
    #[error("Format error: unknown directive '%{directive}'")]
    UnknownDirective { directive: char },

    /// Template ends in the middle of a placeholder
    #[error("Format error: truncated directive at end of template")]
    TruncatedDirective,

    /// Invalid argument with operation context
    #[error("Invalid argument for {operation}: {message}")]
    InvalidArgument { operation: String, message: String },
}

impl PrinterError {
    /// Create a missing argument error
    pub fn missing_argument(index: usize, directive: char) -> Self {
        PrinterError::MissingArgument { index, directive }
    }

    /// Create an argument type mismatch error
    pub fn argument_type(index: usize, directive: char, found: &'static str) -> Self {
        PrinterError::ArgumentType {
            index,
            directive,
            found,
        }
    }

    /// Create an unknown directive error
    pub fn unknown_directive(directive: char) -> Self {
        PrinterError::UnknownDirective { directive }
    }

    /// Create an invalid argument error with operation context
    pub fn invalid_argument(operation: impl Into<String>, message: impl Into<String>) -> Self {
        PrinterError::InvalidArgument {
            operation: operation.into(),
            message: message.into(),
        }
    }
}
