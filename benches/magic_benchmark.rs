extern crate uttt_tables;

use bit_vec::BitVec;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use uttt_tables::board::*;
use uttt_tables::magic::*;

fn criterion_benchmark(c: &mut Criterion) {
    let keys = encoded_boards();
    let mut used = BitVec::from_elem(1 << 18, false);
    c.bench_function("encode boards", |b| b.iter(|| encoded_boards()));
    // a perfect candidate walks every key
    c.bench_function("check perfect candidate", |b| {
        b.iter(|| is_perfect_with(black_box(&keys), black_box(536887361), 18, &mut used))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
