use apihash_resolver::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn hash_names(c: &mut Criterion) {
    let names = (0..1024).map(|i| format!("ApiName{}", i)).collect::<Vec<_>>();

    c.bench_function("hash_1024_names", |b| {
        b.iter(|| {
            for name in &names {
                black_box(compute_hash("KERNEL32.DLL", black_box(name)));
            }
        })
    });
}

pub fn scan_records_bench(c: &mut Criterion) {
    let names = (0..1024).map(|i| format!("ApiName{}", i)).collect::<Vec<_>>();
    let table = NameTable::build("KERNEL32.DLL", names);
    let records = (0..4096u64)
        .map(|i| OperandRecord::new(0x1000 + i * 4, vec![i.wrapping_mul(0x9E37_79B9)]))
        .collect::<Vec<_>>();

    c.bench_function("scan_4096_records", |b| {
        b.iter(|| black_box(scan_records(&table, black_box(&records))))
    });
}

criterion_group!(benches, hash_names, scan_records_bench);

criterion_main!(benches);
