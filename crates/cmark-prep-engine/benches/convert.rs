use cmark_prep_engine::{ReaderOptions, convert, convert_reader_with, expand_tabs};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.sample_size(20);

    let content = common::generate_markdown_content(500);
    group.bench_function("in_memory", |b| {
        b.iter(|| std::hint::black_box(convert(std::hint::black_box(&content))));
    });

    for buffer_size in [64, 4096] {
        group.bench_function(format!("reader_buffer_{buffer_size}"), |b| {
            let options = ReaderOptions::with_buffer_size(buffer_size);
            b.iter(|| {
                let out = convert_reader_with(std::hint::black_box(&content[..]), &options);
                std::hint::black_box(out)
            });
        });
    }

    group.finish();
}

fn bench_expand_tabs(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_tabs");

    let tabbed = common::generate_tab_heavy_line(200);
    group.bench_function("tab_heavy", |b| {
        b.iter(|| std::hint::black_box(expand_tabs(std::hint::black_box(&tabbed)).len()));
    });

    let plain = common::generate_plain_line(200);
    group.bench_function("no_tabs", |b| {
        b.iter(|| std::hint::black_box(expand_tabs(std::hint::black_box(&plain)).len()));
    });

    group.finish();
}

criterion_group!(benches, bench_convert, bench_expand_tabs);
criterion_main!(benches);
