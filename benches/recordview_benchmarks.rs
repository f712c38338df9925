use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use recordview::*;

fn account_columns() -> ColumnSet {
    ColumnSet::new(vec![
        Column::text("Name", "Account Name").sortable(),
        Column::number("AnnualRevenue", "Annual Revenue")
            .sortable()
            .editable(),
    ])
}

fn accounts(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let mut record = Record::new();
            record.insert(
                "Name".to_string(),
                FieldValue::Text(format!("Account {:05}", (i * 7919) % count)),
            );
            record.insert(
                "AnnualRevenue".to_string(),
                FieldValue::Number(((i * 31) % 1000) as f64),
            );
            record
        })
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_records");
    let columns = account_columns();

    for size in [100, 1000, 10000].iter() {
        let records = accounts(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                sort_records(
                    black_box(&records),
                    "Name",
                    SortDirection::Ascending,
                    &columns,
                )
            });
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_records");

    for size in [100, 1000, 10000].iter() {
        let records = accounts(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| filter_records(black_box(&records), "account 00", "Name"));
        });
    }
    group.finish();
}

fn bench_paginate(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice_page");

    for size in [100, 1000, 10000].iter() {
        let records = accounts(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| slice_page(black_box(&records), size / 20, 10).unwrap());
        });
    }
    group.finish();
}

fn bench_full_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_rederive");

    for size in [100, 1000, 10000].iter() {
        let records = accounts(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut store = RecordStore::new(account_columns(), 10).unwrap();
                store.set_all(black_box(records.clone()));
                store.set_search("account 0", "Name");
                store.set_sort("AnnualRevenue", SortDirection::Descending);
                store.page().len()
            });
        });
    }
    group.finish();
}

fn bench_apply_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_edits");

    for size in [100, 1000].iter() {
        let records = accounts(*size);
        let edits: Vec<RecordEdit> = (0..*size / 10)
            .map(|i| RecordEdit::new(i * 10).set("AnnualRevenue", FieldValue::Number(i as f64)))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut store = RecordStore::new(account_columns(), 10).unwrap();
                store.set_all(records.clone());
                store.apply_edits(black_box(&edits))
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sort,
    bench_filter,
    bench_paginate,
    bench_full_derivation,
    bench_apply_edits
);
criterion_main!(benches);
