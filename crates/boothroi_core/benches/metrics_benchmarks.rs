//! Criterion benchmarks for boothroi_core
//!
//! Run with: cargo bench -p boothroi_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use boothroi_core::analysis::sweep;
use boothroi_core::config::{InputField, ReturnField};
use boothroi_core::export::export_csv;
use boothroi_core::model::{Investment, Returns};
use boothroi_core::{Session, compute_metrics};

fn bench_compute_metrics(c: &mut Criterion) {
    let investment = Investment::default();
    let returns = Returns::default();

    c.bench_function("compute_metrics", |b| {
        b.iter(|| compute_metrics(black_box(&investment), black_box(&returns)))
    });
}

fn bench_export(c: &mut Criterion) {
    let investment = Investment::default();
    let returns = Returns::default();
    let metrics = compute_metrics(&investment, &returns);

    c.bench_function("export_csv", |b| {
        b.iter(|| export_csv(black_box(&investment), black_box(&returns), &metrics))
    });
}

fn bench_session_edits(c: &mut Criterion) {
    let leads = InputField::Returns(ReturnField::LeadsGenerated);

    c.bench_function("session_step_with_industry", |b| {
        let mut session = Session::default();
        session.select_industry("Technology");
        b.iter(|| {
            session.step_input(leads, 1);
            session.step_input(leads, -1);
            black_box(session.comparison())
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    let investment = Investment::default();
    let returns = Returns::default();
    let field = InputField::Returns(ReturnField::LeadsGenerated);

    for steps in [11, 101, 1_001] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| sweep(&investment, &returns, field, steps))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_metrics,
    bench_export,
    bench_session_edits,
    bench_sweep,
);
criterion_main!(benches);
