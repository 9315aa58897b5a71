//! Owning simulation context
//!
//! Bundles the chunk graph, the roster of moving bodies, the movement
//! configuration and a reusable active-region scanner into one explicit
//! object. Constructed once at startup and passed around by reference;
//! nothing in the crate keeps process-wide state.

use glam::Vec2;

use crate::movement::{resolve_movement, Body, MovementConfig};
use crate::terrain::{ActiveRegionScanner, ChunkGraph, ChunkId, DEFAULT_REGION_CAPACITY};

/// Handle to a body owned by a [`Simulation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyId(usize);

/// The world state a frame loop steps each tick.
pub struct Simulation {
    graph: ChunkGraph,
    config: MovementConfig,
    scanner: ActiveRegionScanner,
    bodies: Vec<Body>,
}

impl Simulation {
    /// Create a simulation over an already-built chunk graph.
    pub fn new(graph: ChunkGraph, config: MovementConfig) -> Self {
        Self {
            graph,
            config,
            scanner: ActiveRegionScanner::new(DEFAULT_REGION_CAPACITY),
            bodies: Vec::new(),
        }
    }

    /// The terrain this simulation runs on.
    pub fn graph(&self) -> &ChunkGraph {
        &self.graph
    }

    /// Add a body to the roster.
    pub fn spawn(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.bodies.len());
        self.bodies.push(body);
        id
    }

    /// Borrow a body by id.
    pub fn body(&self, id: BodyId) -> &Body {
        &self.bodies[id.0]
    }

    /// Mutably borrow a body by id.
    pub fn body_mut(&mut self, id: BodyId) -> &mut Body {
        &mut self.bodies[id.0]
    }

    /// Step one body by one tick.
    ///
    /// `input` is the desired horizontal velocity; it is scaled by `dt`
    /// into this tick's displacement before resolution. A zero input still
    /// settles the body under gravity.
    pub fn step(&mut self, id: BodyId, input: Vec2, dt: f32) {
        let body = &mut self.bodies[id.0];
        resolve_movement(&self.graph, body, input * dt, dt, &self.config);
    }

    /// Chunks near `origin`, bounded by the scanner's budget.
    ///
    /// The result is valid until the next call; callers needing locality
    /// (streaming, rendering) consume it immediately.
    pub fn active_chunks(&mut self, origin: ChunkId) -> impl Iterator<Item = ChunkId> + '_ {
        self.scanner.scan(&self.graph, origin);
        self.scanner.chunks()
    }
}
