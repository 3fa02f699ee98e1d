//! Throughput of the morpheme-driven and table-driven segmenters

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hanseg_core::{split_analyzed, split_fast, Morpheme, RuleToggles, SplitOptions};
use std::hint::black_box;

/// Generate roughly `size_kb` kilobytes of Korean prose
fn generate_text(size_kb: usize) -> String {
    let base = "오늘은 날씨가 좋았다. 그래서 \"산책을 하자.\" 라고 했어요! 정말요? 네, 맞아요. ";
    let target = size_kb * 1024;
    let mut text = String::with_capacity(target + base.len());
    while text.len() < target {
        text.push_str(base);
    }
    text
}

fn bench_punctuation(c: &mut Criterion) {
    let mut group = c.benchmark_group("punctuation_split");
    let options = SplitOptions {
        rules: RuleToggles::punctuation_only(),
        ..SplitOptions::default()
    };

    for size_kb in [1, 10, 100] {
        let text = generate_text(size_kb);
        let morphemes = Morpheme::per_character(&text);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size_kb}KB")),
            &text,
            |b, text| b.iter(|| split_analyzed(black_box(text), &morphemes, &options)),
        );
    }
    group.finish();
}

fn bench_fast(c: &mut Criterion) {
    let mut group = c.benchmark_group("fast_split");
    let options = SplitOptions::default();

    for size_kb in [1, 10, 100] {
        let text = generate_text(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size_kb}KB")),
            &text,
            |b, text| b.iter(|| split_fast(black_box(text), &options)),
        );
    }
    group.finish();
}

/// Unclosed quotes force realignment on every level.
fn bench_realignment(c: &mut Criterion) {
    let options = SplitOptions {
        rules: RuleToggles::punctuation_only(),
        ..SplitOptions::default()
    };
    let text = "'가나. 다라. ".repeat(40);
    let morphemes = Morpheme::per_character(&text);
    c.bench_function("unbalanced_quotes", |b| {
        b.iter(|| split_analyzed(black_box(&text), &morphemes, &options))
    });
}

criterion_group!(benches, bench_punctuation, bench_fast, bench_realignment);
criterion_main!(benches);
