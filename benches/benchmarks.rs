/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pseudo_dojo_rs::atoms::{states_from_string, AtomicConfiguration};
use pseudo_dojo_rs::radial::{CubicSpline, RadialFunction};

fn configuration_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Configurations");

    group.bench_function("states_from_string", |b| {
        b.iter(|| black_box(states_from_string(black_box("[Xe] 4f14 5d10 6s2 6p2")).unwrap()))
    });

    group.bench_function("neutral_from_z", |b| {
        b.iter(|| {
            for z in 1..=118 {
                black_box(AtomicConfiguration::neutral_from_z(black_box(z)).unwrap());
            }
        })
    });

    group.finish();
}

fn spline_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Radial Splines");

    let rmesh: Vec<f64> = (0..2000).map(|i| i as f64 * 0.01).collect();
    let values: Vec<f64> = rmesh.iter().map(|r| (2.0 - r) * (-r / 2.0).exp()).collect();

    group.bench_function("build_spline", |b| {
        b.iter(|| black_box(CubicSpline::new(black_box(&rmesh), black_box(&values)).unwrap()))
    });

    let spline = CubicSpline::new(&rmesh, &values).unwrap();
    group.bench_function("roots", |b| b.iter(|| black_box(spline.roots())));

    group.bench_function("norm_integral", |b| {
        b.iter(|| {
            let func = RadialFunction::new("2s", rmesh.clone(), values.clone()).unwrap();
            black_box(func.integral(None, None).unwrap())
        })
    });

    group.finish();
}

criterion_group!(benches, configuration_benchmark, spline_benchmark);
criterion_main!(benches);
