//! Benchmark for movement resolution and active-region discovery
//!
//! Measures the per-tick cost of resolving one body against a joined
//! 8x8 chunk world, and of one bounded breadth-first region scan.

use chunkfield_sim::glam::{Vec2, Vec3};
use chunkfield_sim::{
    resolve_movement, ActiveRegionScanner, Body, ChunkGraph, MovementConfig, CHUNK_AREA,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const DT: f32 = 1.0 / 60.0;

/// Deterministic rolling terrain: height varies per tile, always walkable.
fn rolling(col: usize, row: usize) -> [f32; CHUNK_AREA] {
    let mut heights = [0.0; CHUNK_AREA];
    for (i, h) in heights.iter_mut().enumerate() {
        let x = (col * 16 + i % 16) as f32;
        let z = (row * 16 + i / 16) as f32;
        *h = ((x * 0.37).sin() + (z * 0.23).cos()) * 0.2;
    }
    heights
}

fn bench_resolve_movement(c: &mut Criterion) {
    let (graph, ids) = ChunkGraph::grid(8, 8, 100.0, rolling);
    let config = MovementConfig::default();
    let start = Body::new(Vec3::new(60.5, 1.0, 60.5), ids[3 * 8 + 3], 0.25);

    c.bench_function("resolve_movement_tick", |b| {
        b.iter(|| {
            let mut body = start.clone();
            resolve_movement(&graph, &mut body, black_box(Vec2::new(0.08, 0.05)), DT, &config);
            black_box(body.position)
        })
    });

    c.bench_function("resolve_movement_oversized", |b| {
        b.iter(|| {
            let mut body = start.clone();
            // Forces the radius clamp to recurse several times.
            resolve_movement(&graph, &mut body, black_box(Vec2::new(1.2, 0.0)), DT, &config);
            black_box(body.position)
        })
    });
}

fn bench_active_region(c: &mut Criterion) {
    let (graph, ids) = ChunkGraph::grid(8, 8, 100.0, rolling);
    let origin = ids[3 * 8 + 3];
    let mut scanner = ActiveRegionScanner::new(41);

    c.bench_function("active_region_scan", |b| {
        b.iter(|| {
            scanner.scan(&graph, black_box(origin));
            black_box(scanner.len())
        })
    });
}

criterion_group!(benches, bench_resolve_movement, bench_active_region);
criterion_main!(benches);
