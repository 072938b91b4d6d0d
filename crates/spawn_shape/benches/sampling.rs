use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use spawn_shape::prelude::*;

/// Samples drawn per iteration; throughput is reported per sample.
const SAMPLES: usize = 10_000;

fn spawn_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(30)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
}

fn shapes() -> Vec<ShapeConfig> {
    vec![
        OvalConfig::new(10.0, 4.0).into(),
        OvalConfig::new(10.0, 4.0).with_affect_rotation(true).into(),
        TorusConfig::ring(10.0, 4.0).into(),
        RectConfig::new(16.0, 9.0).into(),
    ]
}

fn sampling_shape_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/spawn_shape");
    group.throughput(Throughput::Elements(SAMPLES as u64));

    for (i, config) in shapes().into_iter().enumerate() {
        let shape = config.build();
        let id = format!("{}_{i}", shape.shape_type());
        let mut rng = StdRng::seed_from_u64(0xA11CE_u64 ^ i as u64);
        let mut target = SpawnPoint::default();

        group.bench_with_input(BenchmarkId::from_parameter(id), &i, |b, _| {
            b.iter(|| {
                for _ in 0..SAMPLES {
                    shape.sample(&mut target, &mut rng);
                }
                black_box(target);
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = spawn_criterion();
    targets = sampling_shape_benches
}
criterion_main!(benches);
