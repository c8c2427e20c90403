//! Ring buffer throughput benchmarks
//!
//! Compares moving data through the buffer as contiguous runs against
//! moving it one element at a time.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ring_buffer::RingBuffer;

const CAPACITY: usize = 4096;

fn bench_bulk_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_transfer");

    for run in [16usize, 256, 2048].iter() {
        group.throughput(Throughput::Elements(*run as u64));
        group.bench_with_input(BenchmarkId::from_parameter(run), run, |b, &run| {
            let mut buffer: RingBuffer<u64> = RingBuffer::new(CAPACITY);
            let src: Vec<u64> = (0..run as u64).collect();
            let mut dst = vec![0u64; run];
            b.iter(|| {
                buffer.put_slice(black_box(&src)).unwrap();
                buffer.get(black_box(&mut dst), run).unwrap();
            });
        });
    }

    group.finish();
}

fn bench_single_element(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_element");

    for run in [16usize, 256, 2048].iter() {
        group.throughput(Throughput::Elements(*run as u64));
        group.bench_with_input(BenchmarkId::from_parameter(run), run, |b, &run| {
            let mut buffer: RingBuffer<u64> = RingBuffer::new(CAPACITY);
            b.iter(|| {
                for i in 0..run as u64 {
                    buffer.push(black_box(i)).unwrap();
                }
                for _ in 0..run {
                    black_box(buffer.pop().unwrap());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bulk_transfer, bench_single_element);
criterion_main!(benches);
