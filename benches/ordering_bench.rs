use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::path::PathBuf;
use webp_batch::{natural_cmp, plan, sort_paths, ConversionTarget};

fn numbered_paths(count: usize) -> Vec<PathBuf> {
    (0..count)
        .rev()
        .map(|i| PathBuf::from(format!("/photos/DSC_{}_v{}.JPG", i, i % 7)))
        .collect()
}

fn bench_natural_cmp(c: &mut Criterion) {
    c.bench_function("natural_cmp", |b| {
        b.iter(|| natural_cmp(black_box("holiday-2023-img0099.png"), black_box("holiday-2023-img100.png")))
    });
}

fn bench_sort_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_paths");
    for count in [100, 1_000, 10_000] {
        let paths = numbered_paths(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &paths, |b, paths| {
            b.iter(|| {
                let mut paths = paths.clone();
                sort_paths(&mut paths);
                paths
            })
        });
    }
    group.finish();
}

fn bench_plan(c: &mut Criterion) {
    let target = ConversionTarget::new(1280);
    c.bench_function("plan", |b| {
        b.iter(|| {
            for width in (0..4000).step_by(37) {
                black_box(plan(black_box(width), target));
            }
        })
    });
}

criterion_group!(benches, bench_natural_cmp, bench_sort_paths, bench_plan);
criterion_main!(benches);
