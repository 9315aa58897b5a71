//! Height-field terrain simulation core
//!
//! Simulates a continuous world built from fixed-size height-field chunks
//! linked into a neighbor graph, and resolves circular agents against
//! tile-edge obstacles each tick.
//!
//! # Architecture
//!
//! - [`terrain`]: chunk storage, the cross-chunk neighbor graph, and
//!   bounded active-region discovery
//! - [`geometry`]: 2D closest-point and circle push-out primitives
//! - [`movement`]: the per-tick collision resolver for moving bodies
//! - [`simulation`]: the owning context tying graph, bodies and config
//!   together
//!
//! Rendering, input and presentation state live outside this crate; it
//! exposes body positions, heights and the active chunk set and nothing
//! else.

pub mod geometry;
mod movement;
mod simulation;
pub mod terrain;

pub use movement::{resolve_movement, Body, MovementConfig, Pusher};
pub use simulation::{BodyId, Simulation};
pub use terrain::{
    ActiveRegionScanner, Cardinal, Chunk, ChunkGraph, ChunkId, TerrainError, CHUNK_AREA,
    CHUNK_SIZE, HEIGHT_CAP,
};

// Re-export for convenience
pub use chunkfield_containers as containers;
pub use glam;
