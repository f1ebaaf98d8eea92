#![allow(non_snake_case)]
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::DVector;
use radar_ekf_tools::{
    consistency::calculate_rmse,
    models::{measurement::Radar, MeasurementModel},
};

fn track(K: usize, offset: f64) -> Vec<DVector<f64>> {
    (0..K)
        .map(|k| {
            let t = k as f64 * 0.05;
            DVector::from_row_slice(&[
                t.cos() * 10. + offset,
                t.sin() * 10.,
                -t.sin() * 0.5,
                t.cos() * 0.5 + offset,
            ])
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    for K in [100, 1000, 10000] {
        let estimations = track(K, 0.1);
        let ground_truth = track(K, 0.);
        c.bench_with_input(
            BenchmarkId::new("calculate_rmse", K),
            &(estimations, ground_truth),
            |b, (estimations, ground_truth)| {
                b.iter(|| calculate_rmse(black_box(estimations), black_box(ground_truth)))
            },
        );
    }

    let radar = Radar::default();
    let x = DVector::from_row_slice(&[2.47, 24.7, 0.3, -1.2]);
    c.bench_function("radar H", |b| b.iter(|| radar.H(black_box(&x))));
    c.bench_function("radar h", |b| b.iter(|| radar.h(black_box(&x))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
