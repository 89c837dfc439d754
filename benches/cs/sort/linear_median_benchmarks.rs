use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use linear_order::sort::linear_median_with_rng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn shuffled_permutation(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data: Vec<u64> = (0..n as u64).collect();
    data.shuffle(&mut rng);
    data
}

fn bench_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("median");
    group.sample_size(10);

    for k in 8u32..18 {
        let n = (1usize << k) + 1;
        let base = shuffled_permutation(n, u64::from(k));
        let expected = (n / 2) as u64;

        group.bench_with_input(BenchmarkId::new("linear_median", n), &base, |b, base| {
            let mut rng = ChaCha8Rng::seed_from_u64(0xBA5E_0001);
            b.iter_batched(
                || base.clone(),
                |mut data| {
                    let median = linear_median_with_rng(&mut data, &mut rng);
                    assert_eq!(median, Ok(expected));
                    black_box(data)
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("sort_median", n), &base, |b, base| {
            b.iter_batched(
                || base.clone(),
                |mut data| {
                    data.sort();
                    assert_eq!(data[n / 2], expected);
                    black_box(data)
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_median);
criterion_main!(benches);
