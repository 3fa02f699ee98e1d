//! Sequential versus pooled batch splitting

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hanseg_engine::{Backend, SentenceSplitter};
use std::hint::black_box;

fn documents(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            format!(
                "{i}번 문서입니다. 오늘은 날씨가 좋았다. 그래서 \"산책을 하자.\" 라고 했어요! 정말요? 네, 맞아요."
            )
        })
        .collect()
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_split");

    for workers in [1, 4] {
        // Caching would turn every iteration after the first into lookups.
        let splitter = SentenceSplitter::builder()
            .backend(Backend::Punct)
            .num_workers(Some(workers))
            .cache_capacity(0)
            .build()
            .expect("splitter");
        let docs = documents(256);
        let bytes: usize = docs.iter().map(String::len).sum();
        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{workers}_workers")),
            &docs,
            |b, docs| b.iter(|| splitter.split_sentences(black_box(docs.clone()))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_batch);
criterion_main!(benches);
