//! Benchmarks pour la recherche d'ORFs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seqtools_core::{reverse_complement, OrfConfig, OrfFinder, SequenceRecord};
use std::time::Duration;

/// Séquence pseudo-aléatoire reproductible (LCG)
fn synthetic_sequence(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            b"ACGT"[(state >> 62) as usize]
        })
        .collect()
}

fn benchmark_six_frames(c: &mut Criterion) {
    let test_data = vec![
        ("10kb", synthetic_sequence(10_000, 1)),
        ("100kb", synthetic_sequence(100_000, 2)),
        ("1mb", synthetic_sequence(1_000_000, 3)),
    ];

    let mut group = c.benchmark_group("ORF Search");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    for (name, data) in test_data {
        let finder = OrfFinder::new(OrfConfig::default());
        let record = SequenceRecord::new(name, data);

        group.bench_function(format!("analyze_{}", name), |b| {
            b.iter(|| {
                let _ = finder.analyze(black_box(&record));
            });
        });
    }

    group.finish();
}

fn benchmark_reverse_complement(c: &mut Criterion) {
    let data = synthetic_sequence(1_000_000, 4);

    c.bench_function("reverse_complement_1mb", |b| {
        b.iter(|| reverse_complement(black_box(&data)));
    });
}

criterion_group!(benches, benchmark_six_frames, benchmark_reverse_complement);
criterion_main!(benches);
