//! Criterion benchmarks for cli_printer

use cli_printer::core::format::sprintf;
use cli_printer::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::io;

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_sprintf(c: &mut Criterion) {
    let mut group = c.benchmark_group("sprintf");
    group.throughput(Throughput::Elements(1));

    group.bench_function("no_placeholders", |b| {
        b.iter(|| sprintf(black_box("a plain message with no placeholders"), &[]))
    });

    let params = vec![ParamValue::from("upload"), ParamValue::from(3)];
    group.bench_function("two_placeholders", |b| {
        b.iter(|| sprintf(black_box("the %s failed after %d attempts"), &params))
    });

    let padded = vec![ParamValue::from(-42)];
    group.bench_function("width_and_flags", |b| {
        b.iter(|| sprintf(black_box("value: %08d"), &padded))
    });

    group.finish();
}

// ============================================================================
// Display Benchmarks
// ============================================================================

fn bench_display(c: &mut Criterion) {
    let mut group = c.benchmark_group("display");
    group.throughput(Throughput::Elements(1));

    group.bench_function("tagged_message", |b| {
        let mut printer = Printer::new()
            .with_writer(Box::new(io::sink()))
            .with_printing(true);
        printer.set_tag_color("bench", Color::Cyan);
        b.iter(|| {
            printer
                .display(black_box("bench"), black_box("message body"), &[])
                .unwrap();
        });
    });

    group.bench_function("suppressed_message", |b| {
        let mut printer = Printer::new()
            .with_writer(Box::new(io::sink()))
            .with_printing(false);
        b.iter(|| {
            printer
                .display(black_box("bench"), black_box("message body"), &[])
                .unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_sprintf, bench_display);
criterion_main!(benches);
