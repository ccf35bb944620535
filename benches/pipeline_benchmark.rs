use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use record_temps::models::{Extreme, RawReading};
use record_temps::processors::{DailyAggregator, Normalizer, RecordPipeline, YearWindows};

// Two readings per day for 2005-2015, the size of a typical station record
fn create_station_record() -> Vec<RawReading> {
    let mut readings = Vec::new();
    let mut date = NaiveDate::from_ymd_opt(2005, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2015, 12, 31).unwrap();
    let mut step = 0i32;

    while date <= end {
        let value = (step * 37) % 600 - 250;
        readings.push(RawReading::new(date.to_string(), value));
        readings.push(RawReading::new(date.to_string(), value - 80));
        step += 1;
        date = date.succ_opt().unwrap();
    }

    readings
}

fn benchmark_normalizer(c: &mut Criterion) {
    let raw = create_station_record();
    let normalizer = Normalizer::new();

    c.bench_function("normalize_station_record", |b| {
        b.iter(|| normalizer.normalize(black_box(&raw)).unwrap())
    });
}

fn benchmark_aggregator(c: &mut Criterion) {
    let normalized = Normalizer::new().normalize(&create_station_record()).unwrap();
    let aggregator = DailyAggregator::new();

    c.bench_function("aggregate_daily_max", |b| {
        b.iter(|| aggregator.aggregate(black_box(&normalized), Extreme::Max))
    });
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let raw = create_station_record();
    let pipeline = RecordPipeline::new(YearWindows::new(2005, 2014, 2015).unwrap());

    c.bench_function("record_pipeline", |b| {
        b.iter(|| pipeline.run(black_box(&raw), None).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_normalizer,
    benchmark_aggregator,
    benchmark_full_pipeline
);
criterion_main!(benches);
