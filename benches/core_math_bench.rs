use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use water_charts::core::{
    DrawArea, PieItem, SeriesPalette, compute_scale, plot_line_series, plot_pie_slices_default,
};
use water_charts::render::Color;

fn generated_series(series_count: usize, len: usize) -> Vec<Vec<f64>> {
    (0..series_count)
        .map(|s| {
            (0..len)
                .map(|i| 500.0 + ((i * 37 + s * 11) % 400) as f64 * 0.75)
                .collect()
        })
        .collect()
}

fn bench_compute_scale_10k(c: &mut Criterion) {
    let readings: Vec<f64> = generated_series(1, 10_000).remove(0);

    c.bench_function("compute_scale_10k", |b| {
        b.iter(|| {
            let _ = compute_scale(black_box(&readings), black_box(5)).expect("scale");
        })
    });
}

fn bench_line_plot_4x2k(c: &mut Criterion) {
    let series = generated_series(4, 2_000);
    let labels: Vec<String> = (0..2_000).map(|i| i.to_string()).collect();
    let readings: Vec<f64> = series.iter().flatten().copied().collect();
    let scale = compute_scale(&readings, 5).expect("scale");
    let area = DrawArea::new(1920.0, 1080.0, 40.0);
    let color = Color::rgb(0.0, 0.5, 1.0);
    let palette = SeriesPalette::new(vec![color; 4], vec![color; 4]);

    c.bench_function("line_plot_4x2k", |b| {
        b.iter(|| {
            let _ = plot_line_series(
                black_box(&series),
                black_box(&labels),
                black_box(&scale),
                black_box(area),
                black_box(&palette),
            )
            .expect("plot");
        })
    });
}

fn bench_pie_slices_64(c: &mut Criterion) {
    let items: Vec<PieItem> = (0..64)
        .map(|i| PieItem::new(format!("item-{i}"), 10.0 + f64::from(i)))
        .collect();

    c.bench_function("pie_slices_64", |b| {
        b.iter(|| {
            let _ = plot_pie_slices_default(black_box(&items)).expect("pie");
        })
    });
}

criterion_group!(
    benches,
    bench_compute_scale_10k,
    bench_line_plot_4x2k,
    bench_pie_slices_64
);
criterion_main!(benches);
