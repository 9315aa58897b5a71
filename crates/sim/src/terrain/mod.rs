//! Height-field terrain chunks and the cross-chunk neighbor graph
//!
//! The world is a set of fixed-size chunks, each a 16×16 grid of height
//! samples, linked to up to four cardinal neighbors. Joined symmetrically,
//! the links form a planar graph consistent with Euclidean adjacency, so
//! height and chunk lookups can cross chunk boundaries transparently.
//!
//! # Architecture
//!
//! - [`Chunk`]: one height-field tile grid with neighbor links
//! - [`ChunkGraph`]: the owning chunk pool plus cross-chunk queries
//! - [`ActiveRegionScanner`]: bounded breadth-first discovery of the
//!   chunks around an origin

mod active_region;
mod chunk;
mod graph;

pub use active_region::{ActiveRegionScanner, DEFAULT_REGION_CAPACITY};
pub use chunk::{Cardinal, Chunk, ChunkId, CHUNK_AREA, CHUNK_SIZE, HEIGHT_CAP};
pub use graph::{ChunkGraph, TerrainError};
