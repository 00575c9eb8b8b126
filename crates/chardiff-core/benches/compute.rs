use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chardiff_core::compute;

fn sample(len: usize, seed: u8) -> String {
    (0..len)
        .map(|i| (b'a' + ((i * 7 + seed as usize) % 5) as u8) as char)
        .collect()
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    for len in [16usize, 128, 512, 1024] {
        let old = sample(len, 0);
        let new = sample(len, 3);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| compute(black_box(&old), black_box(&new)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
