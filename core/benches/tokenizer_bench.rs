use criterion::{criterion_group, criterion_main, Criterion};
use sift_core::postings::{intersect, union};
use sift_core::tokenizer::tokenize;

const TEXT: &str = "The quick brown fox jumps over the lazy dog. \
    Sphinx of black quartz, judge my vow! Pack my box with five dozen liquor jugs. \
    How vexingly quick daft zebras jump; the five boxing wizards jump quickly.";

fn bench_tokenize(c: &mut Criterion) {
    let text = TEXT.repeat(64);
    c.bench_function("tokenize_paragraphs", |b| b.iter(|| tokenize(&text)));
}

fn bench_merge(c: &mut Criterion) {
    let evens: Vec<u32> = (0..100_000).step_by(2).collect();
    let thirds: Vec<u32> = (0..100_000).step_by(3).collect();
    c.bench_function("intersect_100k", |b| b.iter(|| intersect(&evens, &thirds)));
    c.bench_function("union_100k", |b| b.iter(|| union(&evens, &thirds)));
}

criterion_group!(benches, bench_tokenize, bench_merge);
criterion_main!(benches);
