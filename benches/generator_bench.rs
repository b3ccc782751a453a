use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use globe_plot_editor::{
    attack_arrow_ring, create_close_curve, hermite_spline_corner_curve, linear_spline_curve,
    GeographicCoordinate,
};
use std::hint::black_box;

/// Synthetischer Zickzack-Pfad mit `count` Kontrollpunkten.
fn build_path(count: usize) -> Vec<GeographicCoordinate> {
    (0..count)
        .map(|i| {
            let lon = 100.0 + i as f64 * 0.05;
            let lat = 30.0 + if i % 2 == 0 { 0.0 } else { 0.03 };
            GeographicCoordinate::new(lon, lat, (i % 5) as f64 * 10.0)
        })
        .collect()
}

fn bench_spline_hotpath(c: &mut Criterion) {
    let mut group = c.benchmark_group("spline_hotpath");

    for &count in &[8usize, 32, 128] {
        let path = build_path(count);

        group.bench_with_input(BenchmarkId::new("linear", count), &path, |b, path| {
            b.iter(|| black_box(linear_spline_curve(black_box(path), 10)).len())
        });

        group.bench_with_input(
            BenchmarkId::new("corner_hermite", count),
            &path,
            |b, path| b.iter(|| black_box(hermite_spline_corner_curve(black_box(path), 10, 0.5)).len()),
        );
    }

    group.finish();
}

fn bench_generator_hotpath(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator_hotpath");

    // Pointer-Move-Pfad: Neuberechnung pro gerendertem Frame
    for &count in &[4usize, 16, 64] {
        let path = build_path(count);

        group.bench_with_input(
            BenchmarkId::new("attack_arrow", count),
            &path,
            |b, path| b.iter(|| black_box(attack_arrow_ring(black_box(path))).len()),
        );

        let planar: Vec<glam::DVec2> = path.iter().map(|c| c.planar()).collect();
        group.bench_with_input(
            BenchmarkId::new("close_curve", count),
            &planar,
            |b, planar| b.iter(|| black_box(create_close_curve(black_box(planar))).len()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_spline_hotpath, bench_generator_hotpath);
criterion_main!(benches);
