//! Criterion benchmarks for treeplot
//!
//! Run with: cargo bench -p treeplot

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use treeplot::{
    barplot, boxplot, histogram, lineplot, scatterplot, Canvas, CanvasKind, ColorMode, Plot,
};

fn wave(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 * 0.1).sin() * 100.0).collect()
}

// =============================================================================
// CANVAS BENCHMARKS
// =============================================================================

fn bench_canvas_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas_line");
    group.sample_size(200);
    group.throughput(Throughput::Elements(1));

    for kind in [CanvasKind::Ascii, CanvasKind::Block, CanvasKind::Braille] {
        group.bench_function(kind.to_string(), |b| {
            let mut canvas = kind.create(80, 24);
            let (w, h) = (canvas.pixel_width() as i64, canvas.pixel_height() as i64);
            b.iter(|| {
                canvas.line(0, 0, black_box(w - 1), black_box(h - 1), None);
                canvas.line(0, h - 1, w - 1, 0, None);
            });
        });
    }

    group.finish();
}

// =============================================================================
// PLOT BENCHMARKS
// =============================================================================

fn bench_plots(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(100);

    let values = wave(1_000);
    let positive: Vec<f64> = values.iter().map(|v| v.abs()).collect();
    let labels: Vec<String> = (0..20).map(|i| format!("row {i}")).collect();

    let bar = barplot(labels, positive[..20].to_vec()).expect("valid bar data");
    let line = lineplot(values.clone()).expect("valid line data");
    let hist = histogram(values.clone())
        .and_then(|h| h.with_bins(20))
        .expect("valid histogram data");
    let xs: Vec<f64> = (0..values.len()).map(|i| i as f64).collect();
    let scatter = scatterplot(xs, values.clone()).expect("valid scatter data");
    let boxes = boxplot(values.chunks(250).map(<[f64]>::to_vec).collect()).expect("valid box data");

    group.bench_function("bar_20", |b| b.iter(|| black_box(&bar).render(ColorMode::Ansi)));
    group.bench_function("line_1000", |b| b.iter(|| black_box(&line).render(ColorMode::Ansi)));
    group.bench_function("histogram_1000", |b| {
        b.iter(|| black_box(&hist).render(ColorMode::Ansi));
    });
    group.bench_function("scatter_1000", |b| {
        b.iter(|| black_box(&scatter).render(ColorMode::Ansi));
    });
    group.bench_function("box_4x250", |b| b.iter(|| black_box(&boxes).render(ColorMode::Ansi)));

    group.finish();
}

criterion_group!(benches, bench_canvas_line, bench_plots);
criterion_main!(benches);
