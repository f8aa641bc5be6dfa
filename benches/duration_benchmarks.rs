//! Criterion benchmarks for the parse and format hot paths.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use humanspan::{millis, seconds, FormatOptions};

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("millis_short", |b| {
        b.iter(|| millis::parse(black_box("1.5h")));
    });
    group.bench_function("millis_spelled_out", |b| {
        b.iter(|| millis::parse(black_box("53 milliseconds")));
    });
    group.bench_function("millis_grammar_miss", |b| {
        b.iter(|| millis::parse(black_box("not a duration")));
    });
    group.bench_function("seconds_short", |b| {
        b.iter(|| seconds::parse(black_box("100ms")));
    });

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    let long = FormatOptions { long: true };
    let short = FormatOptions::default();

    group.bench_function("millis_short", |b| {
        b.iter(|| millis::format(black_box(5_400_000.0), short));
    });
    group.bench_function("millis_long", |b| {
        b.iter(|| millis::format(black_box(5_400_000.0), long));
    });
    group.bench_function("seconds_sub_second", |b| {
        b.iter(|| seconds::format(black_box(0.1), short));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_format);
criterion_main!(benches);
