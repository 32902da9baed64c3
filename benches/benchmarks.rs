//! Performance benchmarks for SFX
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sfx::SuffixTree;

/// Deterministic pseudo-random DNA
fn dna(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            b"ACGT"[(state >> 33) as usize % 4]
        })
        .collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for len in [10_000, 100_000, 1_000_000] {
        let text = dna(len, 1);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("dna", len), &text, |b, text| {
            b.iter(|| SuffixTree::build(black_box(text)).unwrap())
        });
    }

    // Degenerate input: one internal node per length
    let run = vec![b'a'; 100_000];
    group.throughput(Throughput::Bytes(run.len() as u64));
    group.bench_function("single_char_run_100k", |b| {
        b.iter(|| SuffixTree::build(black_box(&run)).unwrap())
    });

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let text = dna(1_000_000, 2);
    let tree = SuffixTree::build(&text).expect("Failed to build tree");
    let pattern = text[500_000..500_012].to_vec();
    let short = b"ACG".to_vec();

    let mut group = c.benchmark_group("queries");

    group.bench_function("contains_12", |b| {
        b.iter(|| tree.contains(black_box(&pattern)).unwrap())
    });

    group.bench_function("count_3", |b| {
        b.iter(|| tree.count_occurrences(black_box(&short)).unwrap())
    });

    group.bench_function("find_all_3", |b| {
        b.iter(|| tree.find_all_occurrences(black_box(&short)).unwrap())
    });

    let patterns: Vec<Vec<u8>> = (0..1000)
        .map(|i| text[i * 997..i * 997 + 8].to_vec())
        .collect();
    group.bench_function("count_batch_1000", |b| {
        b.iter(|| tree.count_batch(black_box(&patterns)).unwrap())
    });

    group.finish();
}

fn bench_derived(c: &mut Criterion) {
    let text = dna(200_000, 3);
    let other = dna(200_000, 4);
    let tree = SuffixTree::build(&text).expect("Failed to build tree");

    let mut group = c.benchmark_group("derived");

    group.bench_function("longest_repeat_200k", |b| {
        b.iter(|| black_box(&tree).longest_repeat())
    });

    group.bench_function("longest_common_200k", |b| {
        b.iter(|| tree.longest_common_match(black_box(&other)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_queries, bench_derived);
criterion_main!(benches);
