use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lowbit_core::{radix, BitSequence};

pub fn radix_conversion(c: &mut Criterion) {
    let data: Vec<u8> = (0..64 * 1024).map(|i| (i * 31) as u8).collect();
    let bits = BitSequence::from_bytes(&data);

    c.bench_function("Radix Compress width 3", |b| {
        b.iter(|| radix::compress(black_box(&bits), 3).expect("Cannot compress"))
    });

    let digits = radix::compress(&bits, 3).expect("Cannot compress");
    c.bench_function("Radix Expand width 3", |b| {
        b.iter(|| {
            radix::expand_to(black_box(digits.iter().copied()), 3, bits.len())
                .expect("Cannot expand")
        })
    });
}

criterion_group!(benches, radix_conversion);
criterion_main!(benches);
