use criterion::{criterion_group, criterion_main, Criterion};
use mockbase_core::record::Record;
use mockbase_query::Client;
use mockbase_store::{FixtureSet, TableStore};

fn make_client(rows: usize) -> Client {
    let records = (0..rows)
        .map(|i| {
            Record::new()
                .with("id", format!("guest_{i}"))
                .with("hotel_id", format!("hotel_{}", i % 16))
                .with("score", (i % 100) as i64)
                .with("active", i % 3 != 0)
        })
        .collect();
    let fixtures = FixtureSet::new().with_table("guests", records);
    Client::new(TableStore::from_fixtures(fixtures))
}

fn bench_resolution(c: &mut Criterion) {
    let client = make_client(10_000);

    c.bench_function("resolve_eq_many", |b| {
        b.iter(|| {
            let env = client
                .from("guests")
                .unwrap()
                .eq("hotel_id", "hotel_7")
                .resolve();
            assert!(!env.records().is_empty());
        })
    });

    c.bench_function("resolve_eq_single", |b| {
        b.iter(|| {
            let env = client
                .from("guests")
                .unwrap()
                .eq("score", 42)
                .single()
                .resolve();
            assert!(env.as_one().is_some());
        })
    });
}

criterion_group!(queries, bench_resolution);
criterion_main!(queries);
