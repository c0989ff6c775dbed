use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use warehousedb::{Catalog, Placement, Record, ProductId};

/// Catalog with every bucket full, demands spread so evictions sift.
fn full_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for id in 0u32..50 {
        catalog.add_product(id, "item", 1_000, 1, u64::from(id * 37 % 23));
    }
    catalog
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_into_full");

    for placement in [Placement::Home, Placement::Probing] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{placement:?}")),
            &placement,
            |b, &placement| {
                let mut catalog = full_catalog();
                let mut next = 50u32;
                b.iter(|| {
                    let record = Record::new(ProductId::new(next), "item", 10, 2, u64::from(next % 31));
                    next = next.wrapping_add(1);
                    black_box(catalog.insert_with(placement, record));
                });
            },
        );
    }
    group.finish();
}

fn bench_purchase(c: &mut Criterion) {
    c.bench_function("purchase_repair", |b| {
        let mut catalog = full_catalog();
        let mut id = 0u32;
        b.iter(|| {
            black_box(catalog.purchase_product(id % 50, 3, 1));
            id = id.wrapping_add(7);
        });
    });
}

fn bench_delete_readd(c: &mut Criterion) {
    c.bench_function("delete_then_add", |b| {
        let mut catalog = full_catalog();
        let mut id = 0u32;
        b.iter(|| {
            let target = id % 50;
            if let Some(record) = catalog.delete_product(target) {
                catalog.insert_with(Placement::Home, record);
            }
            id = id.wrapping_add(3);
        });
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let catalog = full_catalog();
    c.bench_function("snapshot", |b| b.iter(|| black_box(catalog.snapshot())));
}

criterion_group!(benches, bench_add, bench_purchase, bench_delete_readd, bench_snapshot);
criterion_main!(benches);
