use std::collections::BTreeMap;

use affirm_render::{render, Renderer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn render_bench(c: &mut Criterion) {
    let short: Vec<u32> = (0..10).collect();
    let long: Vec<u32> = (1_000..1_500).collect();
    let nested: Vec<Vec<u32>> = (0..50).map(|row| (row..row + 20).collect()).collect();
    let map: BTreeMap<String, u64> = (0..200).map(|i| (format!("key-{i}"), i)).collect();
    let renderer = Renderer::default();

    c.bench_function("render_inline_items", |b| {
        b.iter(|| black_box(render(&short)));
    });

    c.bench_function("render_multiline_items", |b| {
        b.iter(|| black_box(renderer.render(&long)));
    });

    c.bench_function("render_nested_items", |b| {
        b.iter(|| black_box(renderer.render(&nested)));
    });

    c.bench_function("render_pair_block", |b| {
        b.iter(|| black_box(renderer.render(&map)));
    });
}

criterion_group!(benches, render_bench);
criterion_main!(benches);
