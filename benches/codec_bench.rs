//! Codec micro-benchmarks

use bytewire::{append_val, append_var_int, extract_val, extract_var_int, ByteOrder};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_fixed_width(c: &mut Criterion) {
    let mut buf = [0u8; 8];

    c.bench_function("append_u32_swapped", |b| {
        b.iter(|| append_val(ByteOrder::Big, black_box(&mut buf), black_box(0xDEAD_BEEFu32)))
    });

    c.bench_function("append_u32_native", |b| {
        b.iter(|| {
            append_val(
                ByteOrder::native(),
                black_box(&mut buf),
                black_box(0xDEAD_BEEFu32),
            )
        })
    });

    let encoded = [0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x02, 0x03, 0x04];
    c.bench_function("extract_u64_swapped", |b| {
        b.iter(|| extract_val::<u64>(ByteOrder::Big, black_box(&encoded)))
    });
}

fn bench_var_int(c: &mut Criterion) {
    let mut buf = [0u8; 10];

    c.bench_function("append_var_int_small", |b| {
        b.iter(|| append_var_int(black_box(&mut buf), black_box(42u32)))
    });

    c.bench_function("append_var_int_large", |b| {
        b.iter(|| append_var_int(black_box(&mut buf), black_box(u64::MAX - 1)))
    });

    let five_bytes = [0x80, 0x80, 0x80, 0x80, 0x01];
    c.bench_function("extract_var_int_u32", |b| {
        b.iter(|| extract_var_int::<u32>(black_box(&five_bytes)))
    });
}

criterion_group!(benches, bench_fixed_width, bench_var_int);
criterion_main!(benches);
