use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use long_keyed_map::LongKeyedMap;
use std::collections::HashMap;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn sequential_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for a deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_sequential");

    group.bench_function(BenchmarkId::new("LongKeyedMap", N), |b| {
        b.iter(|| {
            let mut map = LongKeyedMap::new();
            for i in 0..N as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for i in 0..N as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("LongKeyedMap", N), |b| {
        b.iter(|| {
            let mut map = LongKeyedMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

// ─── Get ────────────────────────────────────────────────────────────────────

fn bench_get_sequential(c: &mut Criterion) {
    let keys = sequential_keys(N);
    let lk_map: LongKeyedMap<i64> = keys.iter().map(|&k| (k, k)).collect();
    let std_map: HashMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("get_sequential");

    group.bench_function(BenchmarkId::new("LongKeyedMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &keys {
                if let Some(&v) = lk_map.get(k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &keys {
                if let Some(&v) = std_map.get(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.finish();
}

fn bench_get_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let lk_map: LongKeyedMap<i64> = keys.iter().map(|&k| (k, k)).collect();
    let std_map: HashMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("get_random");

    group.bench_function(BenchmarkId::new("LongKeyedMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &keys {
                if let Some(&v) = lk_map.get(k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &k in &keys {
                if let Some(&v) = std_map.get(&k) {
                    sum = sum.wrapping_add(v);
                }
            }
            sum
        });
    });

    group.finish();
}

// ─── Remove ─────────────────────────────────────────────────────────────────

fn bench_remove_sequential(c: &mut Criterion) {
    let keys = sequential_keys(N);

    let mut group = c.benchmark_group("remove_sequential");

    group.bench_function(BenchmarkId::new("LongKeyedMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<LongKeyedMap<i64>>(),
            |mut map| {
                for &k in &keys {
                    map.remove(k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<HashMap<i64, i64>>(),
            |mut map| {
                for &k in &keys {
                    map.remove(&k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);

    let mut group = c.benchmark_group("remove_random");

    group.bench_function(BenchmarkId::new("LongKeyedMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<LongKeyedMap<i64>>(),
            |mut map| {
                for &k in &keys {
                    map.remove(k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("HashMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<HashMap<i64, i64>>(),
            |mut map| {
                for &k in &keys {
                    map.remove(&k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(insert_benches, bench_insert_sequential, bench_insert_random);

criterion_group!(get_benches, bench_get_sequential, bench_get_random);

criterion_group!(remove_benches, bench_remove_sequential, bench_remove_random);

criterion_main!(insert_benches, get_benches, remove_benches);
