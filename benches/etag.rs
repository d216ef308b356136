//! Benchmark: ETag rendering across digest sizes and lengths

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use etag::{Accumulator, Etag};
use sha2::{Digest, Sha512_256};

// Benchmark fixture: reports a fixed digest of the given size
struct FixedDigest(Vec<u8>);

impl Accumulator for FixedDigest {
    type Output = Vec<u8>;

    fn write(&mut self, _data: &[u8]) {}

    fn reset(&mut self) {}

    fn size(&self) -> usize {
        self.0.len()
    }

    fn sum(&self) -> Vec<u8> {
        self.0.clone()
    }
}

fn bench_fixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_digest");
    let mut size = 16;
    while size <= 128 {
        let hash = FixedDigest(vec![0; size]);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let etag = Etag::with_length(&hash, size);
            b.iter(|| black_box(etag.strong()));
        });
        size *= 2;
    }
    group.finish();
}

fn bench_sha512_256(c: &mut Criterion) {
    let hash = Sha512_256::new_with_prefix(b"benchmark body");
    let mut group = c.benchmark_group("sha512_256");
    let mut length = 16;
    while length <= 2 * hash.size() {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            let etag = Etag::with_length(&hash, length);
            b.iter(|| black_box(etag.strong()));
        });
        length *= 2;
    }
    group.finish();
}

criterion_group!(benches, bench_fixed, bench_sha512_256);
criterion_main!(benches);
