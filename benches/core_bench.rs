use coons_mesh_editor::render::{tessellate_patch, Renderer};
use coons_mesh_editor::{
    AppController, AppState, PatchMesh, PatchSettings, RenderQuality, SurfaceEvaluator,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use std::hint::black_box;

fn build_grid(size: usize) -> PatchMesh {
    PatchMesh::build_grid(
        DVec2::ZERO,
        10.0,
        10.0,
        size,
        size,
        PatchSettings::default(),
    )
}

fn build_query_points(count: usize, extent: f64) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let x = (i % 1000) as f64 / 1000.0 * extent + 0.37;
            let y = ((i * 7) % 1000) as f64 / 1000.0 * extent + 0.63;
            DVec2::new(x, y)
        })
        .collect()
}

fn bench_knot_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("knot_queries");

    for &size in &[10usize, 100usize] {
        let mesh = build_grid(size);
        let query_points = build_query_points(1024, size as f64 * 10.0);

        group.bench_with_input(BenchmarkId::new("nearest_batch", size), &mesh, |b, mesh| {
            b.iter(|| {
                let mut hits = 0usize;
                for point in &query_points {
                    if mesh.nearest_knot(black_box(*point), 5.0).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });
    }

    group.finish();
}

fn bench_knot_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("knot_moves");

    for &size in &[10usize, 50usize] {
        let mut mesh = build_grid(size);
        let knot = mesh
            .knot_id_at(size / 2, size / 2)
            .expect("Mittelknoten vorhanden");
        let base = mesh.knot(knot).expect("Knoten").position();

        group.bench_function(BenchmarkId::new("center_knot", size), |b| {
            let mut step = 0u32;
            b.iter(|| {
                step = step.wrapping_add(1);
                let offset = DVec2::new((step % 7) as f64, (step % 5) as f64);
                black_box(mesh.set_knot_position(knot, base + offset))
            })
        });
    }

    group.finish();
}

fn bench_tessellation(c: &mut Criterion) {
    let mut group = c.benchmark_group("tessellation");
    let mesh = build_grid(1);
    let patch = &mesh.patches()[0];

    for quality in [RenderQuality::Low, RenderQuality::Medium, RenderQuality::High] {
        let resolution = quality.resolution();
        for evaluator in [SurfaceEvaluator::TensorProduct, SurfaceEvaluator::CoonsBoundary] {
            let mut quads = Vec::new();
            group.bench_function(
                BenchmarkId::new(format!("{evaluator:?}"), resolution),
                |b| {
                    b.iter(|| {
                        quads.clear();
                        tessellate_patch(black_box(patch), resolution, evaluator, &mut quads);
                        black_box(quads.len())
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_render_scene(c: &mut Criterion) {
    let state = AppState::new();
    let controller = AppController::new();
    let mut renderer = Renderer::new();

    c.bench_function("render_default_scene", |b| {
        b.iter(|| {
            let scene = controller.build_render_scene(black_box(&state));
            black_box(renderer.render_scene(&scene).quads.len())
        })
    });
}

criterion_group!(
    core_benches,
    bench_knot_queries,
    bench_knot_moves,
    bench_tessellation,
    bench_render_scene
);
criterion_main!(core_benches);
