use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ridership_stats::aggregate::summarize;
use ridership_stats::config::{default_time_buckets, RidershipConfig};
use ridership_stats::processing::{average_for_label, split_by_bucket};
use ridership_stats::types::Table;

const LINES: [&str; 4] = ["Green", "Blue", "Red", "Orange"];

fn synthetic_table(rows: usize) -> Table {
    let buckets = default_time_buckets();
    Table::from_records((0..rows).map(|i| {
        let mut fields = vec![String::new(); 14];
        fields[3] = LINES[i % LINES.len()].to_string();
        fields[8] = buckets[i % buckets.len()].clone();
        fields[12] = (i % 250).to_string();
        fields[13] = (i % 90).to_string();
        fields
    }))
}

fn bench_aggregation(c: &mut Criterion) {
    let table = synthetic_table(50_000);
    let config = RidershipConfig::default();

    c.bench_function("average_for_label/50k", |b| {
        b.iter(|| average_for_label(black_box(&table), "Red", 3, 12).unwrap())
    });

    c.bench_function("split_by_bucket/50k", |b| {
        b.iter(|| split_by_bucket(black_box(&table), "time_period_06", 8).unwrap())
    });

    c.bench_function("summarize/50k", |b| {
        b.iter(|| summarize(black_box(&table), &config).unwrap())
    });
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
