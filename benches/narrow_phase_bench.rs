use criterion::{black_box, criterion_group, criterion_main, Criterion};
use convex_collision::{
    collision::{epa, gjk},
    math::vec2::Vec2,
    shapes::ConvexPolygon,
    world::Scene,
};

fn polygon(x: f64, y: f64, sides: usize, radius: f64) -> ConvexPolygon {
    ConvexPolygon::regular(Vec2::new(x, y), sides, radius).unwrap()
}

// --- Helper for a ring of moving polygons ---
fn build_ring_scene(num_bodies: usize) -> Scene {
    let mut scene = Scene::new();
    for i in 0..num_bodies {
        let angle = std::f64::consts::TAU * i as f64 / num_bodies as f64;
        let position = Vec2::from_angle(angle) * 3.0;
        let mut body = polygon(position.x, position.y, 3 + i % 6, 0.6);
        body.set_direction_and_speed(angle + std::f64::consts::PI, 1.0);
        scene.add_body(body);
    }
    scene
}

fn bench_gjk(c: &mut Criterion) {
    let mut group = c.benchmark_group("gjk");

    let a = polygon(0.0, 0.0, 6, 1.0);
    let separated = polygon(3.0, 0.5, 9, 1.0);
    let overlapping = polygon(1.4, 0.3, 9, 1.0).with_angle(0.2);

    group.bench_function("separated", |b| {
        b.iter(|| gjk::test_overlap(black_box(&a), black_box(&separated)))
    });
    group.bench_function("overlapping", |b| {
        b.iter(|| gjk::test_overlap(black_box(&a), black_box(&overlapping)))
    });
    group.finish();
}

fn bench_epa(c: &mut Criterion) {
    let a = polygon(0.0, 0.0, 6, 1.0);
    let b = polygon(1.4, 0.3, 9, 1.0).with_angle(0.2);
    let simplex = gjk::test_overlap(&a, &b).expect("benchmark shapes overlap");

    c.bench_function("epa_penetration", |bencher| {
        bencher.iter(|| epa::penetration(black_box(&a), black_box(&b), black_box(&simplex)))
    });
}

// Full steps: integration, wrap, all pairs through the narrow phase
fn bench_scene_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_step");

    for num_bodies in [4, 16, 64].iter() {
        group.bench_with_input(criterion::BenchmarkId::from_parameter(num_bodies), num_bodies, |b, &n| {
            b.iter(|| {
                let mut scene = build_ring_scene(black_box(n));
                let dt = 1.0 / 60.0;
                for _ in 0..30 {
                    scene.step(black_box(dt));
                }
                scene.contacts().len()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_gjk, bench_epa, bench_scene_step);
criterion_main!(benches);
