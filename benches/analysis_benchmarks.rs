//! Performance benchmarks for employee reporting.
//!
//! Measures parsing, validation and both analyses over synthetic registries
//! shaped as a balanced tree with a fan-out of four.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use employee_reporting::analysis::{assess_manager_salaries, find_depth_breaches};
use employee_reporting::models::Employee;
use employee_reporting::registry::{parse_registry_from_reader, validate_registry};
use rust_decimal::Decimal;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

/// Builds a registry as CSV text, without a header row.
fn create_registry_csv(size: usize) -> String {
    let mut csv = String::with_capacity(size * 40);
    for index in 0..size {
        let manager = if index == 0 {
            String::new()
        } else {
            ((index - 1) / 4).to_string()
        };
        csv.push_str(&format!(
            "{},First{},Last{},{}.50,{}\n",
            index,
            index,
            index,
            40_000 + (index * 37) % 60_000,
            manager
        ));
    }
    csv
}

fn create_employees(size: usize) -> Vec<Employee> {
    let csv = create_registry_csv(size);
    parse_registry_from_reader(csv.as_bytes(), false)
        .expect("Failed to parse synthetic registry")
        .employees
        .iter()
        .map(|draft| draft.complete().expect("Synthetic row is complete"))
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_registry");
    for size in SIZES {
        let csv = create_registry_csv(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("rows", size), &csv, |b, csv| {
            b.iter(|| parse_registry_from_reader(black_box(csv.as_bytes()), false))
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_registry");
    for size in SIZES {
        let csv = create_registry_csv(size);
        let drafts = parse_registry_from_reader(csv.as_bytes(), false)
            .expect("Failed to parse synthetic registry")
            .employees;
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("employees", size), &drafts, |b, drafts| {
            b.iter(|| validate_registry(black_box(drafts), size))
        });
    }
    group.finish();
}

fn bench_analyses(c: &mut Criterion) {
    let min = Some(Decimal::new(20, 2));
    let max = Some(Decimal::new(50, 2));

    let mut group = c.benchmark_group("analysis");
    for size in SIZES {
        let employees = create_employees(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("depth_breaches", size),
            &employees,
            |b, employees| b.iter(|| find_depth_breaches(black_box(employees), 3)),
        );
        group.bench_with_input(
            BenchmarkId::new("manager_salaries", size),
            &employees,
            |b, employees| b.iter(|| assess_manager_salaries(black_box(employees), min, max)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_validate, bench_analyses);
criterion_main!(benches);
