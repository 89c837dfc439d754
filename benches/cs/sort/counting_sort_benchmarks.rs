use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use linear_order::sort::{counting_sort, counting_sort_improved};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Bounded domain every benchmark input is drawn from.
const COUNTING_SORT_DOMAIN: usize = 20;

// Each value of the domain appears 2^k times.
const REPEATS_LOG2: std::ops::Range<u32> = 8..16;

fn shuffled_domain(repeats: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data: Vec<usize> = (0..repeats)
        .flat_map(|_| 0..COUNTING_SORT_DOMAIN)
        .collect();
    data.shuffle(&mut rng);
    data
}

fn bench_counting_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("counting_sort");
    group.sample_size(20);

    for k in REPEATS_LOG2 {
        let repeats = 1usize << k;
        let base = shuffled_domain(repeats, u64::from(k));

        group.bench_with_input(BenchmarkId::new("basic", repeats), &base, |b, base| {
            b.iter_batched(
                || base.clone(),
                |mut data| {
                    counting_sort(&mut data, COUNTING_SORT_DOMAIN);
                    debug_assert!(data.is_sorted());
                    black_box(data)
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("improved", repeats), &base, |b, base| {
            b.iter_batched(
                || base.clone(),
                |mut data| {
                    counting_sort_improved(&mut data, COUNTING_SORT_DOMAIN);
                    debug_assert!(data.is_sorted());
                    black_box(data)
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_counting_sort);
criterion_main!(benches);
