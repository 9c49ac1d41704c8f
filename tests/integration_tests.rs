//! Integration tests for the printer
//!
//! These tests verify:
//! - Tag prefix rendering and color selection
//! - Case-insensitive tag color mappings
//! - Line break configuration
//! - Message template resolution
//! - Log forwarding and level fallback
//! - Output suppression

use cli_printer::prelude::*;
use cli_printer::{display, error, info};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::Arc;

/// Writer that exposes everything written through it.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("output is valid UTF-8")
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn printer_with(buf: &SharedBuf) -> Printer {
    Printer::new()
        .with_writer(Box::new(buf.clone()))
        .with_printing(true)
}

#[test]
fn test_tag_color_applies_case_insensitively() {
    let buf = SharedBuf::default();
    let mut printer = printer_with(&buf);
    printer.set_line_breaks(0, 0).unwrap();

    printer.set_tag_color("Notice", Color::Yellow);
    printer.display("notice", "a", &[]).unwrap();
    printer.display("NOTICE", "b", &[]).unwrap();

    assert_eq!(
        buf.contents(),
        "\x1b[43m NOTICE \x1b[0m a\x1b[43m NOTICE \x1b[0m b"
    );
}

#[test]
fn test_default_color_change_affects_subsequent_output_only() {
    let buf = SharedBuf::default();
    let mut printer = printer_with(&buf);
    printer.set_line_breaks(0, 0).unwrap();

    printer.display("tag", "first", &[]).unwrap();
    let first = buf.contents();
    assert!(first.starts_with("\x1b[44m"));

    printer.set_default_tag_color(Color::Red);
    printer.display("tag", "second", &[]).unwrap();

    let all = buf.contents();
    // Earlier output is untouched, later output uses the new default
    assert!(all.starts_with(&first));
    assert!(all[first.len()..].starts_with("\x1b[41m"));
}

#[test]
fn test_empty_tag_has_no_padding() {
    let buf = SharedBuf::default();
    let mut printer = printer_with(&buf);
    printer.set_line_breaks(0, 0).unwrap();

    printer.set_tag_color("", Color::Red);
    printer.display("", "X", &[]).unwrap();

    // Reset sequence only, regardless of any color configuration
    assert_eq!(buf.contents(), "\x1b[0mX");
}

#[test]
fn test_empty_message_renders_prefix_only() {
    let buf = SharedBuf::default();
    let mut printer = printer_with(&buf);
    printer.set_line_breaks(0, 0).unwrap();

    printer.display("tag", "", &[]).unwrap();

    assert_eq!(buf.contents(), "\x1b[44m TAG \x1b[0m ");
}

#[test]
fn test_default_line_breaks_are_one_and_one() {
    let buf = SharedBuf::default();
    let mut printer = printer_with(&buf);

    assert_eq!(printer.line_breaks(), LineBreaks { before: 1, after: 1 });

    printer.display("tag", "msg", &[]).unwrap();
    let output = buf.contents();
    assert!(output.starts_with('\n'));
    assert!(output.ends_with('\n'));
    assert!(!output.starts_with("\n\n"));
    assert!(!output.ends_with("\n\n"));
}

#[test]
fn test_configured_line_breaks_surround_message() {
    let buf = SharedBuf::default();
    let mut printer = printer_with(&buf);

    printer.set_line_breaks(2, 3).unwrap();
    printer.display("tag", "msg", &[]).unwrap();

    let output = buf.contents();
    assert!(output.starts_with("\n\n"));
    assert!(!output.starts_with("\n\n\n"));
    assert!(output.ends_with("\n\n\n"));
    assert!(!output.ends_with("\n\n\n\n"));
}

#[test]
fn test_message_template_substitution() {
    let buf = SharedBuf::default();
    let messages = HashMap::from([("foo.bar".to_string(), "the %s".to_string())]);
    let mut printer = Printer::with_messages(messages)
        .with_writer(Box::new(buf.clone()))
        .with_printing(true);

    printer
        .display("tag", "foo.bar", &[ParamValue::from("x")])
        .unwrap();

    assert!(buf.contents().contains("the x"));
}

#[test]
fn test_unknown_message_id_used_literally() {
    let buf = SharedBuf::default();
    let mut printer = printer_with(&buf);

    printer.display("tag", "no.such.id", &[]).unwrap();

    assert!(buf.contents().contains("no.such.id"));
}

#[test]
fn test_logging_dispatch_by_tag() {
    let buf = SharedBuf::default();
    let recorder = Arc::new(Mutex::new(MemoryRecorder::new()));
    let mut printer = printer_with(&buf);
    printer.use_logger(recorder.clone());

    printer.display("info", "m", &[]).unwrap();
    printer.display("custom", "m", &[]).unwrap();

    let recorder = recorder.lock();
    assert_eq!(recorder.records()[0].level, LogLevel::Info);
    // Tags that are not level names fall back to debug
    assert_eq!(recorder.records()[1].level, LogLevel::Debug);
}

#[test]
fn test_logger_receives_formatted_message_and_raw_params() {
    let buf = SharedBuf::default();
    let recorder = Arc::new(Mutex::new(MemoryRecorder::new()));
    let mut printer = printer_with(&buf);
    printer.use_logger(recorder.clone());

    let params = vec![ParamValue::from("disk"), ParamValue::from(93)];
    printer
        .display("warning", "%s usage at %d%%", &params)
        .unwrap();

    let recorder = recorder.lock();
    let record = &recorder.records()[0];
    assert_eq!(record.level, LogLevel::Warning);
    assert_eq!(record.message, "disk usage at 93%");
    assert_eq!(record.params, params);
}

#[test]
fn test_params_without_placeholders_still_reach_logger() {
    let buf = SharedBuf::default();
    let recorder = Arc::new(Mutex::new(MemoryRecorder::new()));
    let mut printer = printer_with(&buf);
    printer.use_logger(recorder.clone());

    let params = vec![ParamValue::from("ctx")];
    printer.display("info", "static message", &params).unwrap();

    assert!(buf.contents().contains("static message"));
    assert_eq!(recorder.lock().records()[0].params, params);
}

#[test]
fn test_use_logger_replaces_previous() {
    let buf = SharedBuf::default();
    let first = Arc::new(Mutex::new(MemoryRecorder::new()));
    let second = Arc::new(Mutex::new(MemoryRecorder::new()));
    let mut printer = printer_with(&buf);

    printer.use_logger(first.clone());
    printer.use_logger(second.clone());
    printer.display("info", "m", &[]).unwrap();

    assert!(first.lock().is_empty());
    assert_eq!(second.lock().len(), 1);
}

#[test]
fn test_disabled_printing_produces_zero_bytes() {
    let buf = SharedBuf::default();
    let mut printer = Printer::new()
        .with_writer(Box::new(buf.clone()))
        .with_printing(false);

    printer.display("info", "hidden", &[]).unwrap();
    printer.display("", "also hidden", &[]).unwrap();

    assert!(buf.contents().is_empty());
}

#[test]
fn test_new_line_counts() {
    let buf = SharedBuf::default();
    let mut printer = printer_with(&buf);

    printer.new_line(0).unwrap();
    assert_eq!(buf.contents(), "");

    printer.new_line(3).unwrap();
    assert_eq!(buf.contents(), "\n\n\n");

    let err = printer.new_line(-1).unwrap_err();
    assert!(matches!(err, PrinterError::InvalidArgument { .. }));
}

#[test]
fn test_format_error_is_reported_not_truncated() {
    let buf = SharedBuf::default();
    let mut printer = printer_with(&buf);

    let err = printer
        .display("tag", "%s and %s", &[ParamValue::from("one")])
        .unwrap_err();

    assert!(matches!(err, PrinterError::MissingArgument { .. }));
    assert!(buf.contents().is_empty());
}

#[test]
fn test_display_macros() {
    let buf = SharedBuf::default();
    let recorder = Arc::new(Mutex::new(MemoryRecorder::new()));
    let mut printer = printer_with(&buf);
    printer.set_line_breaks(0, 0).unwrap();
    printer.use_logger(recorder.clone());

    display!(printer, "header", "report").unwrap();
    info!(printer, "service %s is up", "api").unwrap();
    error!(printer, "exit code %d", 3).unwrap();

    let output = buf.contents();
    assert!(output.contains(" HEADER \x1b[0m report"));
    assert!(output.contains(" INFO \x1b[0m service api is up"));
    assert!(output.contains(" ERROR \x1b[0m exit code 3"));

    let recorder = recorder.lock();
    assert_eq!(recorder.records()[0].level, LogLevel::Debug);
    assert_eq!(recorder.records()[1].level, LogLevel::Info);
    assert_eq!(recorder.records()[2].level, LogLevel::Error);
}

#[test]
fn test_chained_configuration_and_display() {
    let buf = SharedBuf::default();
    let mut printer = printer_with(&buf);

    printer
        .set_line_breaks(0, 1)
        .unwrap()
        .set_default_tag_color(Color::Cyan)
        .set_tag_color("step", Color::Purple)
        .display("step", "one", &[])
        .unwrap()
        .display("other", "two", &[])
        .unwrap();

    assert_eq!(
        buf.contents(),
        "\x1b[45m STEP \x1b[0m one\n\x1b[46m OTHER \x1b[0m two\n"
    );
}
