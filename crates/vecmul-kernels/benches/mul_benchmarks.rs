//! Criterion benchmarks comparing the kernel strategies.
//!
//! Measures element-wise multiply throughput for each available provider
//! across a range of buffer sizes, enabling regression detection between
//! the scalar, unrolled, and vectorized paths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vecmul_kernels::{KernelManager, KernelProvider};

fn operand(len: usize, stride: usize) -> Vec<f32> {
    (0..len).map(|i| (i % stride) as f32 + 1.0).collect()
}

fn bench_mul_f32(c: &mut Criterion) {
    let manager = KernelManager::new();
    let mut group = c.benchmark_group("mul_f32");

    // Sizes chosen to cover L1-resident through memory-bound regimes,
    // plus a non-multiple-of-8 size to keep the tail loop honest.
    let sizes = vec![1 << 10, 1 << 14, (1 << 18) + 3, 1 << 22];

    for &size in &sizes {
        let a = operand(size, 97);
        let b = operand(size, 89);
        let mut out = vec![0.0f32; size];

        group.throughput(Throughput::Elements(size as u64));

        for provider in manager.providers() {
            if !provider.is_available() {
                continue;
            }
            group.bench_with_input(
                BenchmarkId::new(provider.name(), size),
                &size,
                |bench, _| {
                    bench.iter(|| {
                        provider
                            .mul_f32(black_box(&a), black_box(&b), black_box(&mut out))
                            .unwrap();
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_mul_f32);
criterion_main!(benches);
