//! Per-tick movement and collision resolution for circular bodies
//!
//! A body is a vertical circle on the height field. Each tick it receives
//! a desired horizontal displacement; the resolver pushes it out of
//! nearby tile edges in nearest-first order, decides for each contacted
//! edge whether the far side is a wall or a step, resolves which chunk
//! the body ends up in, and integrates gravity. Displacements longer than
//! the body's radius are consumed in radius-sized increments so a thin
//! wall cannot be tunneled through in one step.

use glam::{Vec2, Vec3};
use tracing::{debug, trace};

use chunkfield_containers::{DedupQueue, SearchTree};

use crate::geometry::{closest_point_on_segment, from_xz, unclip_circle, xz};
use crate::terrain::{ChunkGraph, ChunkId, HEIGHT_CAP};

/// Candidate tile edges per tick: 4 edges for each tile of the 3×3 block
/// around the body.
const MAX_PUSHERS: usize = 4 * 9;

/// Corner x offsets of a unit tile, counter-clockwise from the northwest.
const CORNER_X: [f32; 4] = [0.0, 1.0, 1.0, 0.0];
/// Corner z offsets of a unit tile.
const CORNER_Z: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Outward edge normals, matching the corner order: north, east, south,
/// west edge of the tile.
const EDGE_NORMALS: [Vec2; 4] = [
    Vec2::new(0.0, -1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(-1.0, 0.0),
];

/// Tuning parameters for movement resolution.
#[derive(Debug, Clone, Copy)]
pub struct MovementConfig {
    /// Maximum floor height difference a body walks up without being
    /// blocked.
    pub step_height: f32,
    /// Downward acceleration applied to airborne bodies, units per
    /// second squared.
    pub gravity: f32,
    /// Margin subtracted from the radius when splitting an oversized
    /// displacement, keeping each increment strictly inside the radius.
    pub clamp_margin: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            step_height: 0.5,
            gravity: 20.0,
            clamp_margin: 1e-4,
        }
    }
}

/// A moving circular body on the height field.
#[derive(Debug, Clone)]
pub struct Body {
    /// World position; `y` is the height of the body's feet.
    pub position: Vec3,
    /// Chunk currently containing the body, resolved through the graph.
    pub chunk: ChunkId,
    /// Horizontal collision radius.
    pub radius: f32,
    /// Signed fall speed accumulator; positive is falling.
    pub fall_speed: f32,
    /// Normalized direction of the last horizontal move. Presentation
    /// state only; collision never reads it.
    pub heading: Vec3,
}

impl Body {
    /// Create a body at rest.
    pub fn new(position: Vec3, chunk: ChunkId, radius: f32) -> Self {
        Self {
            position,
            chunk,
            radius,
            fall_speed: 0.0,
            heading: Vec3::ZERO,
        }
    }
}

/// One candidate tile edge during resolution.
///
/// The closest point is recomputed whenever the tentative position moves;
/// the stored value is only valid for the position it was last computed
/// against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pusher {
    /// Segment start, in world XZ coordinates.
    pub a: Vec2,
    /// Segment end.
    pub b: Vec2,
    /// Outward unit normal of the edge, pointing away from the tile.
    pub normal: Vec2,
    /// Closest point on the segment to the tentative position.
    pub closest: Vec2,
    /// Walkable floor height on the tile side of the edge.
    pub floor: f32,
}

/// Resolve one tick of movement for `body` against the chunk graph.
///
/// `v` is the desired horizontal displacement for this tick (already
/// scaled by elapsed time); `dt` is the tick duration used for gravity
/// integration. The body is mutated in place. When the destination falls
/// off the edge of the world the tick is aborted and the body does not
/// move.
///
/// A zero displacement still runs the full pass, letting a stationary
/// body settle under gravity.
pub fn resolve_movement(
    graph: &ChunkGraph,
    body: &mut Body,
    v: Vec2,
    dt: f32,
    config: &MovementConfig,
) {
    let mut v = v;
    let mut new_pos = xz(body.position);
    let mut pos_y = body.position.y;
    let mut remaining = Vec2::ZERO;

    if v != Vec2::ZERO {
        if v.length() >= body.radius {
            // Consume at most one radius per pass; the rest recurses below.
            remaining = v;
            v = v.normalize() * (body.radius - config.clamp_margin);
            remaining -= v;
        }
        new_pos += v;
        body.heading = from_xz(v.normalize(), 0.0);
    }

    // Order the 36 candidate edges around the tentative position by
    // squared distance: resolving a near edge can change which farther
    // edges still overlap.
    let mut pushers: SearchTree<Pusher> = SearchTree::new();
    let mut lifters: DedupQueue<Pusher> = DedupQueue::new(MAX_PUSHERS);

    for dz in -1..=1 {
        for dx in -1..=1 {
            let tile = new_pos.floor() + Vec2::new(dx as f32, dz as f32);
            let probe = new_pos + Vec2::new(dx as f32, dz as f32);
            let floor = match graph.chunk_at(body.chunk, probe) {
                Some(chunk) => graph.floor_height_at(chunk, probe),
                // Past the edge of the world: an unclimbable rim.
                None => HEIGHT_CAP,
            };
            for edge in 0..4 {
                let a = tile + Vec2::new(CORNER_X[edge], CORNER_Z[edge]);
                let b = tile + Vec2::new(CORNER_X[(edge + 1) % 4], CORNER_Z[(edge + 1) % 4]);
                let pusher = Pusher {
                    a,
                    b,
                    normal: EDGE_NORMALS[edge],
                    closest: closest_point_on_segment(a, b, new_pos),
                    floor,
                };
                pushers.push(pusher.closest.distance_squared(new_pos), pusher);
            }
        }
    }

    while let Some(mut pusher) = pushers.pop_low() {
        // Earlier pushes may have moved the tentative position.
        pusher.closest = closest_point_on_segment(pusher.a, pusher.b, new_pos);
        let correction = unclip_circle(new_pos, body.radius, pusher.closest, pusher.normal);
        if correction.length_squared() == 0.0 {
            continue;
        }
        if pos_y + config.step_height < pusher.floor {
            // Wall: push out horizontally right away.
            new_pos += correction;
        } else {
            // Low enough to step onto; becomes a floor candidate instead.
            lifters.push(pusher);
        }
    }

    let Some(new_chunk) = graph.chunk_at(body.chunk, new_pos) else {
        debug!(pos = ?new_pos, "movement aborted at world edge");
        return;
    };
    if new_chunk != body.chunk {
        trace!(from = ?body.chunk, to = ?new_chunk, "chunk transition");
    }
    body.chunk = new_chunk;
    body.position = from_xz(new_pos, pos_y);

    // Highest steppable floor still within the radius of the settled
    // position; the body's own tile is always a candidate.
    let mut highest = graph.height_at(body.chunk, new_pos);
    while let Some(mut pusher) = lifters.pop() {
        pusher.closest = closest_point_on_segment(pusher.a, pusher.b, new_pos);
        if pusher.closest.distance_squared(new_pos) >= body.radius * body.radius {
            continue;
        }
        if highest < pusher.floor {
            highest = pusher.floor;
        }
    }

    let repeat = remaining != Vec2::ZERO;

    // Gravity integrates only on the final pass of the tick; lifting onto
    // a higher floor happens on every pass.
    if !repeat {
        if highest < pos_y {
            body.fall_speed += config.gravity * dt;
        }
        pos_y -= body.fall_speed * dt;
    }
    if highest > pos_y {
        body.fall_speed = 0.0;
        pos_y = highest;
    }
    body.position.y = pos_y;

    if repeat {
        resolve_movement(graph, body, remaining, dt, config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::{ChunkGraph, CHUNK_AREA};

    const DT: f32 = 1.0 / 60.0;

    fn flat(height: f32) -> [f32; CHUNK_AREA] {
        [height; CHUNK_AREA]
    }

    /// Single flat chunk at the given floor height, body above its center.
    fn flat_world(floor: f32, body_y: f32) -> (ChunkGraph, Body) {
        let (graph, ids) = ChunkGraph::grid(1, 1, 100.0, |_, _| flat(floor));
        let body = Body::new(Vec3::new(7.5, body_y, 7.5), ids[0], 0.25);
        (graph, body)
    }

    fn settle(graph: &ChunkGraph, body: &mut Body, ticks: usize) {
        let config = MovementConfig::default();
        for _ in 0..ticks {
            resolve_movement(graph, body, Vec2::ZERO, DT, &config);
        }
    }

    #[test]
    fn test_falls_and_lands_on_flat_chunk() {
        let (graph, mut body) = flat_world(1.0, 16.0);
        settle(&graph, &mut body, 600);

        assert!(
            (body.position.y - 1.0).abs() < 1e-4,
            "body should settle on the floor, ended at y={}",
            body.position.y
        );
        assert_eq!(body.fall_speed, 0.0, "fall speed resets on landing");
        assert_eq!(xz(body.position), Vec2::new(7.5, 7.5), "no horizontal drift");
    }

    #[test]
    fn test_zero_displacement_tick_is_stable_on_ground() {
        let (graph, mut body) = flat_world(2.0, 2.0);
        settle(&graph, &mut body, 10);

        assert_eq!(body.position.y, 2.0);
        assert_eq!(body.fall_speed, 0.0);
    }

    #[test]
    fn test_gravity_accelerates_while_airborne() {
        let (graph, mut body) = flat_world(0.0, 50.0);
        let config = MovementConfig::default();

        resolve_movement(&graph, &mut body, Vec2::ZERO, DT, &config);
        let speed_1 = body.fall_speed;
        resolve_movement(&graph, &mut body, Vec2::ZERO, DT, &config);
        let speed_2 = body.fall_speed;

        assert!(speed_1 > 0.0);
        assert!(speed_2 > speed_1, "fall speed must keep accumulating");
        assert!(body.position.y < 50.0);
    }

    #[test]
    fn test_high_wall_blocks_horizontally() {
        // Column of tall tiles at x = 8; everything else is flat ground.
        let (graph, ids) = ChunkGraph::grid(1, 1, 100.0, |_, _| {
            let mut h = flat(0.0);
            for z in 0..16 {
                h[z * 16 + 8] = 5.0;
            }
            h
        });
        let mut body = Body::new(Vec3::new(6.5, 0.0, 7.5), ids[0], 0.25);
        let config = MovementConfig::default();

        for _ in 0..400 {
            resolve_movement(&graph, &mut body, Vec2::new(0.05, 0.0), DT, &config);
        }

        assert!(
            body.position.x <= 8.0 - body.radius + 1e-3,
            "center must stop a radius short of the wall, got x={}",
            body.position.x
        );
        assert!((body.position.y).abs() < 1e-4, "still standing on the low floor");
    }

    #[test]
    fn test_low_ledge_is_stepped_onto() {
        // Same column, but below the step height.
        let (graph, ids) = ChunkGraph::grid(1, 1, 100.0, |_, _| {
            let mut h = flat(0.0);
            for z in 0..16 {
                h[z * 16 + 8] = 0.4;
            }
            h
        });
        let mut body = Body::new(Vec3::new(6.5, 0.0, 7.5), ids[0], 0.25);
        let config = MovementConfig::default();

        // Walk onto the column and stop on top of it.
        for _ in 0..40 {
            resolve_movement(&graph, &mut body, Vec2::new(0.05, 0.0), DT, &config);
        }

        assert!(body.position.x > 8.0, "low ledge must not block, got x={}", body.position.x);
        assert!(
            (body.position.y - 0.4).abs() < 1e-4,
            "body should stand on the ledge, got y={}",
            body.position.y
        );
    }

    #[test]
    fn test_oversized_displacement_is_fully_consumed() {
        let (graph, ids) = ChunkGraph::grid(3, 3, 100.0, |_, _| flat(0.0));
        let center = ids[4];
        let mut body = Body::new(Vec3::new(24.5, 0.0, 24.5), center, 0.25);
        let config = MovementConfig::default();

        // Four radii in one tick: consumed in clamped increments with no
        // overlap and no gap.
        resolve_movement(&graph, &mut body, Vec2::new(1.0, 0.0), DT, &config);

        assert!(
            (body.position.x - 25.5).abs() < 1e-3,
            "expected x=25.5 after a 1.0 move, got {}",
            body.position.x
        );
        assert!((body.position.z - 24.5).abs() < 1e-4);
    }

    #[test]
    fn test_heading_tracks_move_direction() {
        let (graph, mut body) = flat_world(0.0, 0.0);
        let config = MovementConfig::default();

        resolve_movement(&graph, &mut body, Vec2::new(0.0, 0.02), DT, &config);
        assert!((body.heading - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);

        // Zero displacement keeps the previous heading.
        resolve_movement(&graph, &mut body, Vec2::ZERO, DT, &config);
        assert!((body.heading - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_world_edge_stops_the_body() {
        let (graph, ids) = ChunkGraph::grid(1, 1, 100.0, |_, _| flat(1.0));
        let mut body = Body::new(Vec3::new(0.5, 1.0, 7.5), ids[0], 0.25);
        let config = MovementConfig::default();

        for _ in 0..200 {
            resolve_movement(&graph, &mut body, Vec2::new(-0.05, 0.0), DT, &config);
        }

        assert!(
            body.position.x >= body.radius - 1e-3,
            "the world rim must keep the body inside the chunk, got x={}",
            body.position.x
        );
        assert_eq!(body.chunk, ids[0]);
    }

    #[test]
    fn test_chunk_transition_at_boundary() {
        let (graph, ids) = ChunkGraph::grid(2, 1, 100.0, |_, _| flat(1.0));
        let mut body = Body::new(Vec3::new(15.0, 1.0, 7.5), ids[0], 0.25);
        let config = MovementConfig::default();

        let mut crossed_at = None;
        for _ in 0..200 {
            resolve_movement(&graph, &mut body, Vec2::new(0.05, 0.0), DT, &config);
            if body.chunk == ids[1] && crossed_at.is_none() {
                crossed_at = Some(body.position.x);
            }
        }

        let crossed_at = crossed_at.expect("body should reach the second chunk");
        assert!(
            (16.0..16.1).contains(&crossed_at),
            "transition should happen at the x=16 boundary, got {crossed_at}"
        );
        assert!(
            (body.position.y - 1.0).abs() < 1e-4,
            "height is continuous across matching edge samples"
        );
    }

    #[test]
    fn test_landing_from_fall_snaps_to_floor() {
        let (graph, mut body) = flat_world(3.0, 3.4);
        let config = MovementConfig::default();
        body.fall_speed = 60.0; // would overshoot the floor in one tick

        resolve_movement(&graph, &mut body, Vec2::ZERO, DT, &config);

        assert_eq!(body.position.y, 3.0, "overshoot snaps back up to the floor");
        assert_eq!(body.fall_speed, 0.0);
    }

    #[test]
    fn test_open_sky_tile_acts_as_wall() {
        // A sample above the chunk's max height reads as open sky and must
        // block like a wall rather than lift the body.
        let (graph, ids) = ChunkGraph::grid(1, 1, 4.0, |_, _| {
            let mut h = flat(0.0);
            for z in 0..16 {
                h[z * 16 + 8] = 50.0;
            }
            h
        });
        let mut body = Body::new(Vec3::new(6.5, 0.0, 7.5), ids[0], 0.25);
        let config = MovementConfig::default();

        for _ in 0..400 {
            resolve_movement(&graph, &mut body, Vec2::new(0.05, 0.0), DT, &config);
        }

        assert!(
            body.position.x <= 8.0 - body.radius + 1e-3,
            "open sky column must block, got x={}",
            body.position.x
        );
    }
}
