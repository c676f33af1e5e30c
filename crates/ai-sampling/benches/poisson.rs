use ai_sampling::{PoissonDiscSampler, PositionSampler, SampleDomain};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_poisson(c: &mut Criterion) {
    let mut group = c.benchmark_group("ai-sampling/poisson");

    for &width in &[10.0f32, 50.0f32] {
        let domain = SampleDomain::square(width, 1.0).expect("valid domain");
        group.bench_with_input(BenchmarkId::from_parameter(width), &domain, |b, domain| {
            let mut sampler = PoissonDiscSampler::new(1);
            b.iter(|| {
                let points = sampler.generate(domain).expect("generates");
                black_box(points.len());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_poisson);
criterion_main!(benches);
