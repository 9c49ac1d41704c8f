//! Main printer implementation

use super::{
    color::Color,
    error::{PrinterError, Result},
    format,
    log_level::LogLevel,
    params::ParamValue,
    recorder::LogRecorder,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// ANSI reset sequence terminating a colored tag block.
pub const RESET: &str = "\x1b[0m";

/// Number of blank lines written around each message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBreaks {
    pub before: u32,
    pub after: u32,
}

impl Default for LineBreaks {
    fn default() -> Self {
        Self { before: 1, after: 1 }
    }
}

/// Prints tagged, colorized messages on the command line.
///
/// A message is displayed with an uppercased tag on a colored background,
/// surrounded by a configurable number of blank lines. The tag also selects
/// the severity used when forwarding the message to an installed
/// [`LogRecorder`].
///
/// # Example
///
/// ```no_run
/// use cli_printer::prelude::*;
///
/// let mut printer = Printer::new();
/// printer
///     .set_tag_color("error", Color::Red)
///     .display("error", "the %s failed after %d attempts", &[
///         ParamValue::from("upload"),
///         ParamValue::from(3),
///     ])?;
/// # Ok::<(), PrinterError>(())
/// ```
pub struct Printer {
    messages: HashMap<String, String>,
    tag_colors: HashMap<String, Color>,
    default_color: Color,
    line_breaks: LineBreaks,
    recorder: Option<Arc<Mutex<dyn LogRecorder>>>,
    out: Box<dyn Write + Send>,
    printing: bool,
}

impl Printer {
    /// Create a printer writing to standard output.
    ///
    /// Printing is enabled only when standard output is attached to a
    /// terminal; when piped or redirected, `display` produces no output
    /// (log forwarding still happens).
    #[must_use]
    pub fn new() -> Self {
        Self::with_messages(HashMap::new())
    }

    /// Create a printer with a message template table.
    ///
    /// When `display` receives a message equal to one of the table's keys,
    /// the associated template is printed instead:
    ///
    /// ```no_run
    /// use cli_printer::prelude::*;
    /// use std::collections::HashMap;
    ///
    /// let messages = HashMap::from([
    ///     ("user.missing".to_string(), "user %s not found".to_string()),
    /// ]);
    /// let mut printer = Printer::with_messages(messages);
    /// printer.display("error", "user.missing", &[ParamValue::from("ada")])?;
    /// # Ok::<(), PrinterError>(())
    /// ```
    #[must_use]
    pub fn with_messages(messages: HashMap<String, String>) -> Self {
        Self {
            messages,
            tag_colors: HashMap::new(),
            default_color: Color::default(),
            line_breaks: LineBreaks::default(),
            recorder: None,
            out: Box::new(io::stdout()),
            printing: atty::is(atty::Stream::Stdout),
        }
    }

    /// Replace the output sink.
    #[must_use]
    pub fn with_writer(mut self, out: Box<dyn Write + Send>) -> Self {
        self.out = out;
        self
    }

    /// Force printing on or off, overriding the terminal detection done at
    /// construction.
    #[must_use]
    pub fn with_printing(mut self, printing: bool) -> Self {
        self.printing = printing;
        self
    }

    /// Display a message on the console.
    ///
    /// The tag name is lowercased, the message is resolved against the
    /// template table, formatted with `params` (printf-style, see
    /// [`format::sprintf`](crate::core::format::sprintf)), forwarded to the
    /// recorder, and printed with its colored tag prefix.
    pub fn display(
        &mut self,
        tag_name: &str,
        message: &str,
        params: &[ParamValue],
    ) -> Result<&mut Self> {
        let tag = tag_name.to_lowercase();
        let template = self
            .messages
            .get(message)
            .map(String::as_str)
            .unwrap_or(message);
        let formatted = format::sprintf(template, params)?;

        self.record_log(&tag, &formatted, params);
        self.print_message(&tag, &formatted)?;

        Ok(self)
    }

    /// Install a log recorder; replaces any previous one.
    ///
    /// The printer shares the recorder, it does not own it: the caller may
    /// keep a clone of the `Arc` and inspect the recorder afterwards.
    pub fn use_logger(&mut self, recorder: Arc<Mutex<dyn LogRecorder>>) -> &mut Self {
        self.recorder = Some(recorder);
        self
    }

    /// Print new lines on the console.
    pub fn new_line(&mut self, times: i32) -> Result<&mut Self> {
        if times < 0 {
            return Err(PrinterError::invalid_argument(
                "newLine",
                "times must be non-negative",
            ));
        }
        self.write_newlines(times as u32)?;
        self.out.flush()?;
        Ok(self)
    }

    /// Set the number of line breaks before and after a message.
    pub fn set_line_breaks(&mut self, before: i32, after: i32) -> Result<&mut Self> {
        if before < 0 {
            return Err(PrinterError::invalid_argument(
                "setLineBreaks",
                "before must be non-negative",
            ));
        }
        if after < 0 {
            return Err(PrinterError::invalid_argument(
                "setLineBreaks",
                "after must be non-negative",
            ));
        }
        self.line_breaks = LineBreaks {
            before: before as u32,
            after: after as u32,
        };
        Ok(self)
    }

    /// Set the default color used for tags without an explicit mapping.
    pub fn set_default_tag_color(&mut self, color: Color) -> &mut Self {
        self.default_color = color;
        self
    }

    /// Set the color for a message tag. Tag names are case-insensitive.
    pub fn set_tag_color(&mut self, tag_name: &str, color: Color) -> &mut Self {
        self.tag_colors.insert(tag_name.to_lowercase(), color);
        self
    }

    /// The color a tag would currently render with.
    #[must_use]
    pub fn tag_color(&self, tag_name: &str) -> Color {
        self.tag_colors
            .get(&tag_name.to_lowercase())
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Current line break configuration.
    #[must_use]
    pub fn line_breaks(&self) -> LineBreaks {
        self.line_breaks
    }

    /// Whether `display` currently writes to the sink.
    #[must_use]
    pub fn is_printing(&self) -> bool {
        self.printing
    }

    // Named wrappers for the recorder levels, replacing the dynamic
    // tag-as-method shorthand.

    pub fn debug(&mut self, message: &str, params: &[ParamValue]) -> Result<&mut Self> {
        self.display("debug", message, params)
    }

    pub fn info(&mut self, message: &str, params: &[ParamValue]) -> Result<&mut Self> {
        self.display("info", message, params)
    }

    pub fn notice(&mut self, message: &str, params: &[ParamValue]) -> Result<&mut Self> {
        self.display("notice", message, params)
    }

    pub fn warning(&mut self, message: &str, params: &[ParamValue]) -> Result<&mut Self> {
        self.display("warning", message, params)
    }

    pub fn error(&mut self, message: &str, params: &[ParamValue]) -> Result<&mut Self> {
        self.display("error", message, params)
    }

    pub fn critical(&mut self, message: &str, params: &[ParamValue]) -> Result<&mut Self> {
        self.display("critical", message, params)
    }

    pub fn alert(&mut self, message: &str, params: &[ParamValue]) -> Result<&mut Self> {
        self.display("alert", message, params)
    }

    pub fn emergency(&mut self, message: &str, params: &[ParamValue]) -> Result<&mut Self> {
        self.display("emergency", message, params)
    }

    /// Forward a displayed message to the installed recorder, if any.
    ///
    /// The level is the exact tag name when it matches a level; every other
    /// tag records at debug.
    fn record_log(&self, tag: &str, message: &str, params: &[ParamValue]) {
        if let Some(recorder) = &self.recorder {
            let level = LogLevel::from_tag(tag).unwrap_or_default();
            recorder.lock().record(level, message, params);
        }
    }

    /// Print a message with its tag prefix. No-op when printing is off.
    fn print_message(&mut self, tag: &str, message: &str) -> Result<()> {
        if !self.printing {
            return Ok(());
        }

        let prefix = if tag.is_empty() {
            RESET.to_string()
        } else {
            let color = self.tag_colors.get(tag).copied().unwrap_or(self.default_color);
            format!("\x1b[{}m {} {} ", color.code(), tag.to_uppercase(), RESET)
        };

        self.write_newlines(self.line_breaks.before)?;
        // Prefix and message go out in one write
        self.out
            .write_all(format!("{}{}", prefix, message).as_bytes())?;
        self.write_newlines(self.line_breaks.after)?;
        self.out.flush()?;

        Ok(())
    }

    fn write_newlines(&mut self, times: u32) -> Result<()> {
        for _ in 0..times {
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Printer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Printer")
            .field("messages", &self.messages)
            .field("tag_colors", &self.tag_colors)
            .field("default_color", &self.default_color)
            .field("line_breaks", &self.line_breaks)
            .field("recorder", &self.recorder.as_ref().map(|_| "LogRecorder"))
            .field("printing", &self.printing)
            .finish_non_exhaustive()
    }
}
