//! Basic printer usage example
//!
//! Demonstrates tagged output, tag colors, templates and log forwarding.
//!
//! Run with: cargo run --example basic_usage

use cli_printer::prelude::*;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

fn main() -> Result<()> {
    let messages = HashMap::from([
        ("deploy.start".to_string(), "deploying %s".to_string()),
        ("deploy.done".to_string(), "%s deployed in %d seconds".to_string()),
    ]);

    let recorder = Arc::new(Mutex::new(MemoryRecorder::new()));

    let mut printer = Printer::with_messages(messages).with_printing(true);
    printer
        .use_logger(recorder.clone())
        .set_tag_color("success", Color::Green)
        .set_tag_color("failure", Color::Red)
        .set_default_tag_color(Color::Cyan);

    // Tags that match recorder levels forward at that level
    printer.display("info", "starting deployment run", &[])?;

    // Message IDs resolve against the template table
    printer.display("notice", "deploy.start", &[ParamValue::from("api-gateway")])?;
    printer.display(
        "success",
        "deploy.done",
        &[ParamValue::from("api-gateway"), ParamValue::from(12)],
    )?;

    // An empty tag prints the message without a colored block
    printer.display("", "plain trailing note", &[])?;

    // Spacing is configurable
    printer.set_line_breaks(0, 1)?;
    printer.display("header", "records captured by the logger", &[])?;
    printer.new_line(1)?;

    for record in recorder.lock().records() {
        println!("  [{}] {}", record.level, record.message);
    }

    Ok(())
}
