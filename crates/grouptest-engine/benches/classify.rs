use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grouptest_core::models::{Batch, LearnedProbability, StrategyKind};
use grouptest_engine::{Classifier, ThresholdOracle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_classify(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let batches: Vec<Batch> = (0..64)
        .map(|_| Batch::new((0..100).map(|_| rng.gen::<f64>()).collect()))
        .collect();

    let mut group = c.benchmark_group("classify");
    for threshold in [0.01, 0.05, 0.25] {
        let classifier = Classifier::new(ThresholdOracle::new(threshold).unwrap());
        let probability = LearnedProbability::new(threshold);
        for strategy in StrategyKind::ALL {
            group.bench_with_input(
                BenchmarkId::new(strategy.as_str(), threshold),
                &batches,
                |b, batches| {
                    b.iter(|| {
                        for batch in batches {
                            black_box(
                                classifier
                                    .classify(black_box(batch), strategy, &probability)
                                    .unwrap(),
                            );
                        }
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
