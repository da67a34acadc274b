//! Performance benchmarks for the Attendance Punch Reconciliation Engine.
//!
//! Classification runs once per employee per day in payroll batch jobs,
//! so per-call cost matters at roster scale. This suite covers the
//! classifier at several punch counts, the meridiem repair pass, and the
//! paginated fetch aggregator over an in-memory store.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use std::collections::HashMap;

use attendance_engine::config::EngineConfig;
use attendance_engine::error::EngineResult;
use attendance_engine::fetch::{PunchStore, fetch_punches};
use attendance_engine::models::{DailyAttendanceRecord, EmployeeDescriptor, PunchRow, RawPunch};
use attendance_engine::reconcile::{classify_punches, classify_punches_formatted, normalize_meridiem};

use chrono::NaiveDate;

fn bench_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 17).unwrap()
}

/// A typical day plus extra noise punches spread across the morning.
fn create_punches(count: usize) -> Vec<RawPunch> {
    let date = bench_date();
    let base = [(8, 1), (12, 3), (12, 58), (17, 2)];
    (0..count)
        .map(|i| {
            let (h, m) = base[i % base.len()];
            RawPunch {
                timestamp: date
                    .and_hms_opt(h, m, (i / base.len()) as u32 % 60)
                    .unwrap(),
                reported_state: Some("Time In".to_string()),
            }
        })
        .collect()
}

struct MemoryStore {
    rows: HashMap<String, Vec<PunchRow>>,
}

impl PunchStore for MemoryStore {
    fn fetch_page(
        &self,
        identifier: &str,
        offset: usize,
        limit: usize,
    ) -> EngineResult<Vec<PunchRow>> {
        let all = self.rows.get(identifier).cloned().unwrap_or_default();
        let end = (offset + limit).min(all.len());
        Ok(all.get(offset..end).unwrap_or(&[]).to_vec())
    }
}

fn create_store(row_count: usize) -> MemoryStore {
    let rows = (0..row_count)
        .map(|i| PunchRow {
            timestamp: format!("2025-03-17 {:02}:{:02}:00", 6 + (i % 12), i % 60),
            state: None,
        })
        .collect();
    let mut map = HashMap::new();
    map.insert("123".to_string(), rows);
    MemoryStore { rows: map }
}

fn bench_classification(c: &mut Criterion) {
    let cfg = EngineConfig::default();
    let mut group = c.benchmark_group("classify_punches");

    for count in [4usize, 16, 64] {
        let punches = create_punches(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &punches, |b, punches| {
            b.iter(|| classify_punches(black_box(bench_date()), black_box(punches), &cfg));
        });
    }

    group.finish();
}

fn bench_formatted_projection(c: &mut Criterion) {
    let cfg = EngineConfig::default();
    let punches = create_punches(4);

    c.bench_function("classify_punches_formatted/4", |b| {
        b.iter(|| classify_punches_formatted(black_box(bench_date()), black_box(&punches), &cfg));
    });
}

fn bench_meridiem_normalization(c: &mut Criterion) {
    let date = bench_date();
    let mut record = DailyAttendanceRecord::empty(date);
    record.time_in = date.and_hms_opt(8, 1, 0);
    record.break_out = date.and_hms_opt(0, 3, 0);
    record.break_in = date.and_hms_opt(1, 2, 0);
    record.time_out = date.and_hms_opt(5, 4, 0);

    c.bench_function("normalize_meridiem", |b| {
        b.iter(|| normalize_meridiem(black_box(&record), black_box(date)));
    });
}

fn bench_fetch_aggregation(c: &mut Criterion) {
    let cfg = EngineConfig::default();
    let descriptor = EmployeeDescriptor {
        employee_id: "EMP-00123".to_string(),
        normalized_id: Some("123".to_string()),
        alternate_number: None,
    };

    let mut group = c.benchmark_group("fetch_punches");

    for row_count in [100usize, 1000] {
        let store = create_store(row_count);
        group.throughput(Throughput::Elements(row_count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(row_count), &store, |b, store| {
            b.iter(|| fetch_punches(black_box(store), black_box(&descriptor), &cfg));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_classification,
    bench_formatted_projection,
    bench_meridiem_normalization,
    bench_fetch_aggregation
);
criterion_main!(benches);
