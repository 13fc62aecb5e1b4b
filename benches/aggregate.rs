use aeris::{daily_summaries, hourly_summaries, RawReading};
use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn synthetic_week() -> Vec<RawReading> {
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    (0..7 * 24 * 60)
        .map(|i| RawReading {
            timestamp: start + Duration::minutes(i),
            temperature: Some(20.0 + (i % 10) as f64 * 0.3),
            humidity: Some(50.0 + (i % 20) as f64),
            co2: Some(450.0 + (i % 300) as f64),
            pm25: Some(10.0 + (i % 25) as f64 * 0.5),
            pm10: Some(25.0 + (i % 40) as f64 * 0.5),
            voc: if i % 7 == 0 { None } else { Some(1.2) },
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let readings = synthetic_week();
    c.bench_function("hourly_summaries", |b| {
        b.iter(|| hourly_summaries(black_box(&readings)))
    });
    c.bench_function("daily_summaries", |b| {
        b.iter(|| daily_summaries(black_box(&readings)))
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
