use std::hint::black_box;
use std::num::NonZeroUsize;

use checksums::RollingChecksum;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn sample_data(len: usize) -> Vec<u8> {
    (0..len)
        .map(|index| (index as u8).wrapping_mul(31).wrapping_add(7))
        .collect()
}

fn bench_init(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling_init");
    for &block in &[16usize, 512, 4096] {
        let data = sample_data(block);
        group.throughput(Throughput::Bytes(block as u64));
        group.bench_with_input(BenchmarkId::from_parameter(block), &data, |b, data| {
            let mut checksum = RollingChecksum::new(NonZeroUsize::new(block).unwrap());
            b.iter(|| {
                checksum.init(black_box(data)).unwrap();
                black_box(checksum.value())
            });
        });
    }
    group.finish();
}

fn bench_slide(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling_slide");
    let data = sample_data(64 * 1024);
    for &block in &[16usize, 512, 4096] {
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(block), &data, |b, data| {
            b.iter(|| {
                let mut checksum = RollingChecksum::new(NonZeroUsize::new(block).unwrap());
                let mut acc = 0u32;
                for &byte in data {
                    acc ^= checksum.ingest(byte);
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_init, bench_slide);
criterion_main!(benches);
