//! Benchmarks for full shape generation and serialization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use flapcut::io::parse_path;
use flapcut::profile::{
    build_shape, Bevel, BoxBlankParameters, DoubleTuckParameters, MirroredParameters,
    NotchedParameters, PanelParameters, ShapeParameters, TuckParameters,
};

fn all_profiles() -> Vec<ShapeParameters> {
    vec![
        ShapeParameters::Panel(PanelParameters {
            width: 100.0,
            height: 60.0,
        }),
        ShapeParameters::Tuck(TuckParameters {
            height: 150.0,
            width: 200.0,
            theta1: 60.0,
            radius: 5.0,
        }),
        ShapeParameters::DoubleTuck(DoubleTuckParameters {
            width: 200.0,
            height: 100.0,
            theta1: 60.0,
            radius: 8.0,
        }),
        ShapeParameters::Notched(NotchedParameters {
            width: 200.0,
            height: 100.0,
            theta: 60.0,
            bevel: Bevel::Angled {
                alpha1: 45.0,
                alpha2: 60.0,
            },
        }),
        ShapeParameters::Mirrored(MirroredParameters::new(200.0)),
        ShapeParameters::BoxBlank(BoxBlankParameters {
            width: 250.0,
            height: 190.0,
            theta1: 70.0,
            theta2: 70.0,
            flap_depth: 50.0,
            radius: 12.0,
            circle_radius: 45.0,
        }),
    ]
}

fn bench_build_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_shape");

    for params in all_profiles() {
        group.bench_with_input(BenchmarkId::from_parameter(params.id()), &params, |b, p| {
            b.iter(|| build_shape(black_box(p)))
        });
    }

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for params in all_profiles() {
        let Ok(shape) = build_shape(&params) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("closed", params.id()), &shape, |b, s| {
            b.iter(|| s.closed_path())
        });
        let text = shape.closed_path();
        group.bench_with_input(BenchmarkId::new("parse", params.id()), &text, |b, t| {
            b.iter(|| parse_path::<f64>(black_box(t)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_shape, bench_serialize);

criterion_main!(benches);
