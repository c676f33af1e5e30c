use ai_avoid::{AvoidanceConfig, Avoider, Scene, SceneAgent, SceneObject};
use ai_core::{ObjectId, Vec3};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const AGENT: ObjectId = ObjectId(1);
const THREAT: ObjectId = ObjectId(2);

/// Threat at the origin, agent exposed next to it, `pillars` small boxes scattered around.
fn make_scene(pillars: usize) -> Scene {
    let mut scene = Scene::new();
    scene.add_agent(SceneAgent::new(AGENT, Vec3::new(2.0, 0.0, 0.0), 1.0));
    scene.add_object(SceneObject::sphere(THREAT, Vec3::ZERO, 0.5));

    let side = (pillars as f32).sqrt().ceil().max(1.0) as usize;
    for i in 0..pillars {
        let x = (i % side) as f32 * 3.0 - 20.0;
        let z = (i / side) as f32 * 3.0 - 20.0;
        if x.abs() < 4.0 && z.abs() < 4.0 {
            continue;
        }
        scene.add_object(SceneObject::cuboid(
            ObjectId(100 + i as u64),
            Vec3::new(x, 0.0, z),
            Vec3::new(0.5, 1.0, 0.5),
        ));
    }
    scene
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("ai-avoid/tick");

    for &n in &[0usize, 64usize, 256usize] {
        let mut scene = make_scene(n);
        let mut avoider =
            Avoider::initialize(AGENT, Some(THREAT), AvoidanceConfig::default(), &scene)
                .expect("valid setup");
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &_n| {
            b.iter(|| {
                let outcome = avoider.tick(&mut scene);
                if let Some(agent) = scene.agent_mut(AGENT) {
                    agent.destination = None;
                }
                black_box(outcome);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
