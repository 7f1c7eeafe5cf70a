use byteset::ByteSet;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [100u32, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(u64::from(*size)));
        group.bench_with_input(BenchmarkId::new("growing_from_min", size), size, |b, &size| {
            b.iter(|| {
                let mut set = ByteSet::new(4, 16).unwrap();
                for key in 0..size {
                    black_box(set.insert(&key.to_le_bytes()).unwrap());
                }
                black_box(set.len())
            });
        });
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");

    for size in [1000u32, 10_000].iter() {
        let mut set = ByteSet::new(4, 16).unwrap();
        for key in 0..*size {
            set.insert(&key.to_le_bytes()).unwrap();
        }

        group.throughput(Throughput::Elements(u64::from(*size * 2)));
        group.bench_with_input(BenchmarkId::new("hits_and_misses", size), size, |b, &size| {
            b.iter(|| {
                for key in 0..size * 2 {
                    black_box(set.contains(&key.to_le_bytes()));
                }
            });
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    for size in [1000u32, 10_000].iter() {
        let mut populated = ByteSet::new(4, 16).unwrap();
        for key in 0..*size {
            populated.insert(&key.to_le_bytes()).unwrap();
        }

        group.throughput(Throughput::Elements(u64::from(*size)));
        group.bench_with_input(BenchmarkId::new("drain", size), size, |b, &size| {
            b.iter(|| {
                let mut set = populated.clone();
                for key in 0..size {
                    black_box(set.remove(&key.to_le_bytes()).unwrap());
                }
                black_box(set.is_empty())
            });
        });
    }
    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    c.bench_function("insert_remove_churn", |b| {
        let mut set = ByteSet::new(8, 1024).unwrap();
        let mut next = 0u64;
        b.iter(|| {
            set.insert(&next.to_le_bytes()).unwrap();
            if next >= 500 {
                set.remove(&(next - 500).to_le_bytes()).unwrap();
            }
            next += 1;
            black_box(set.len())
        });
    });
}

criterion_group!(benches, bench_insert, bench_contains, bench_remove, bench_churn);
criterion_main!(benches);
