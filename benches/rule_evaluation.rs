//! Rule evaluation benchmarks
//!
//! Run with: cargo bench --bench rule_evaluation

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use esg_data_checker::constants::SAMPLE_TEXT;
use esg_data_checker::{extract, parse, score, validate_table};
use std::hint::black_box;

/// Build a disclosure table with `rows` rows, every fifth row inconsistent
fn sample_table(rows: usize) -> String {
    let mut csv = String::from(
        "company,year,scope1_tco2e,scope2_tco2e,scope3_tco2e,total_tco2e,energy_mwh,water_m3,female_pct\n",
    );
    for idx in 0..rows {
        let total = if idx % 5 == 0 { 9000 } else { 7600 };
        csv.push_str(&format!(
            "Company {idx},2023,1200,800,5600,{total},120000,34000,{}\n",
            30 + idx % 40
        ));
    }
    csv
}

fn bench_validate_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_table");
    for rows in [10, 100, 1000] {
        let table = parse(&sample_table(rows));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &table, |b, table| {
            b.iter(|| {
                let issues = validate_table(black_box(table));
                score(&issues)
            })
        });
    }
    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let long_text = SAMPLE_TEXT.repeat(50);
    let mut group = c.benchmark_group("extract");
    group.bench_function("sample_text", |b| b.iter(|| extract(black_box(SAMPLE_TEXT))));
    group.bench_function("sample_text_x50", |b| b.iter(|| extract(black_box(&long_text))));
    group.finish();
}

criterion_group!(benches, bench_validate_table, bench_extract);
criterion_main!(benches);
