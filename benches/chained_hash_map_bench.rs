use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use spellmap::{ByteSum, ChainedHashMap, WeightedByteSum};
use std::hash::BuildHasher;
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

// Dictionary-like keys: 3..10 lowercase letters.
fn word(n: u64) -> String {
    let len = 3 + (n % 8) as usize;
    (0..len)
        .map(|i| (b'a' + ((n >> (i * 5)) % 26) as u8) as char)
        .collect()
}

fn fill<S: BuildHasher>(m: &mut ChainedHashMap<S>, seed: u64, n: usize) -> Vec<String> {
    let keys: Vec<String> = lcg(seed).take(n).map(word).collect();
    for k in &keys {
        m.put(k, -1);
    }
    keys
}

fn bench_put_fresh_10k(c: &mut Criterion) {
    c.bench_function("chained::put_fresh_10k_weighted", |b| {
        b.iter_batched(
            || ChainedHashMap::new(1000).unwrap(),
            |mut m| {
                fill(&mut m, 1, 10_000);
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("chained::put_fresh_10k_byte_sum", |b| {
        b.iter_batched(
            || ChainedHashMap::with_hasher(1000, ByteSum).unwrap(),
            |mut m| {
                fill(&mut m, 1, 10_000);
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit_miss(c: &mut Criterion) {
    c.bench_function("chained::get_hit_10k", |b| {
        let mut m = ChainedHashMap::with_hasher(1000, WeightedByteSum).unwrap();
        let keys = fill(&mut m, 7, 10_000);
        b.iter(|| {
            for k in &keys {
                black_box(m.get(k));
            }
        })
    });

    c.bench_function("chained::contains_miss_10k", |b| {
        let mut m = ChainedHashMap::with_hasher(1000, WeightedByteSum).unwrap();
        fill(&mut m, 11, 10_000);
        let misses: Vec<String> = lcg(0xdead_beef)
            .take(10_000)
            .map(|x| format!("{}'", word(x)))
            .collect();
        b.iter(|| {
            for k in &misses {
                black_box(m.contains_key(k));
            }
        })
    });
}

fn bench_remove_all_10k(c: &mut Criterion) {
    c.bench_function("chained::remove_all_10k", |b| {
        b.iter_batched(
            || {
                let mut m = ChainedHashMap::new(1000).unwrap();
                let keys = fill(&mut m, 5, 10_000);
                (m, keys)
            },
            |(mut m, keys)| {
                for k in &keys {
                    black_box(m.remove(k));
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(12)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches_put;
    config = bench_config();
    targets = bench_put_fresh_10k
}
criterion_group! {
    name = benches_ops;
    config = bench_config();
    targets = bench_get_hit_miss, bench_remove_all_10k
}
criterion_main!(benches_put, benches_ops);
