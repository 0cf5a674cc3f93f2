use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rentstat::{aggregate_daily, rolling_mean, Dashboard, RecordStore, RentalRecord, Season};

/// Two years of daily records, shaped like the public bike-sharing dataset.
fn two_year_store() -> RecordStore {
    let first = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
    let records = (0..731u64)
        .map(|i| RentalRecord {
            date: first + Duration::days(i as i64),
            total_count: 1000 + (i * 37) % 6000,
            casual_count: 100 + (i * 13) % 2000,
            registered_count: 900 + (i * 24) % 4000,
            season: Season::ALL[((i / 91) % 4) as usize],
            temperature: 0.2 + (i % 60) as f64 / 100.0,
            feeling_temperature: 0.2 + (i % 55) as f64 / 100.0,
            humidity: 0.4 + (i % 50) as f64 / 100.0,
            windspeed: 0.05 + (i % 30) as f64 / 100.0,
        })
        .collect();
    RecordStore::from_records(records).unwrap()
}

fn bench_pipeline(c: &mut Criterion) {
    let store = two_year_store();
    let dashboard = Dashboard::builder().store(&store).build().unwrap();
    let range = dashboard.full_range().unwrap();
    let totals: Vec<u64> = store.records().iter().map(|r| r.total_count).collect();

    c.bench_function("snapshot_full_range", |b| {
        b.iter(|| dashboard.snapshot(black_box(range)))
    });
    c.bench_function("aggregate_daily", |b| {
        b.iter(|| aggregate_daily(black_box(&store.frame())).collect_rows().unwrap())
    });
    c.bench_function("rolling_mean_30", |b| {
        b.iter(|| rolling_mean(black_box(&totals), 30).unwrap())
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
