//! Chunk pool and cross-chunk queries

use glam::{IVec2, Vec2};
use thiserror::Error;

use super::chunk::{Cardinal, Chunk, ChunkId, CHUNK_AREA, CHUNK_SIZE, HEIGHT_CAP};

/// Errors building terrain from externally supplied data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TerrainError {
    /// A height buffer did not match the chunk grid layout.
    #[error("expected {CHUNK_AREA} height samples, got {0}")]
    HeightCount(usize),
}

/// The world's chunk pool and neighbor graph.
///
/// Owns every chunk; everything else refers to chunks by [`ChunkId`].
/// Neighbor links are established with [`join`](ChunkGraph::join) and are
/// kept symmetric, so chunk and height lookups can hop across boundaries
/// in any direction the graph covers.
#[derive(Default)]
pub struct ChunkGraph {
    chunks: Vec<Chunk>,
}

impl ChunkGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self { chunks: Vec::new() }
    }

    /// Number of chunks in the pool.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// True when the pool holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Add a chunk to the pool, returning its handle.
    pub fn insert(&mut self, chunk: Chunk) -> ChunkId {
        let id = ChunkId(self.chunks.len() as u32);
        self.chunks.push(chunk);
        id
    }

    /// Build a chunk from a flat height buffer and add it to the pool.
    ///
    /// This is the loading interface for external world data: the buffer
    /// must contain exactly one sample per tile, row-major.
    pub fn insert_heights(&mut self, heights: &[f32], max_height: f32) -> Result<ChunkId, TerrainError> {
        let samples: [f32; CHUNK_AREA] = heights
            .try_into()
            .map_err(|_| TerrainError::HeightCount(heights.len()))?;
        Ok(self.insert(Chunk::from_samples(samples, max_height)))
    }

    /// Borrow a chunk by id.
    pub fn chunk(&self, id: ChunkId) -> &Chunk {
        &self.chunks[id.0 as usize]
    }

    /// Mutably borrow a chunk by id.
    pub fn chunk_mut(&mut self, id: ChunkId) -> &mut Chunk {
        &mut self.chunks[id.0 as usize]
    }

    /// Join two chunks as neighbors in the given direction.
    ///
    /// Sets the reciprocal link on `b` and assigns `b`'s world grid
    /// position relative to `a`'s, keeping the graph consistent with
    /// Euclidean adjacency.
    pub fn join(&mut self, a: ChunkId, dir: Cardinal, b: ChunkId) {
        let a_pos = self.chunk(a).world_pos;
        self.chunk_mut(a).neighbors[dir.index()] = Some(b);
        let chunk_b = self.chunk_mut(b);
        chunk_b.neighbors[dir.opposite().index()] = Some(a);
        chunk_b.world_pos = a_pos + dir.offset();
    }

    /// Find the chunk containing the world position `pos`, starting from
    /// `origin`.
    ///
    /// Walks at most one neighbor hop north/south and one east/west, so
    /// `pos` must lie within one chunk width of `origin`. Returns `None`
    /// when a required neighbor link is missing (the edge of the world).
    pub fn chunk_at(&self, origin: ChunkId, pos: Vec2) -> Option<ChunkId> {
        let grid = IVec2::new(
            (pos.x / CHUNK_SIZE as f32).floor() as i32,
            (pos.y / CHUNK_SIZE as f32).floor() as i32,
        );
        let mut id = origin;
        let diff = grid - self.chunk(id).world_pos;
        if diff.y != 0 {
            let dir = if diff.y > 0 { Cardinal::South } else { Cardinal::North };
            id = self.chunk(id).neighbor(dir)?;
        }
        if diff.x != 0 {
            let dir = if diff.x > 0 { Cardinal::East } else { Cardinal::West };
            id = self.chunk(id).neighbor(dir)?;
        }
        Some(id)
    }

    /// Raw height sample under the world position `pos`.
    ///
    /// The position is mapped to local tile indices by floor-modulo, so
    /// any world coordinate within the chunk (including negative ones)
    /// lands on a valid sample. No interpolation between samples.
    pub fn height_at(&self, id: ChunkId, pos: Vec2) -> f32 {
        let x = (pos.x.floor() as i32).rem_euclid(CHUNK_SIZE as i32) as usize;
        let z = (pos.y.floor() as i32).rem_euclid(CHUNK_SIZE as i32) as usize;
        self.chunk(id).sample(x, z)
    }

    /// Walkable floor height under the world position `pos`.
    ///
    /// Like [`height_at`](ChunkGraph::height_at), but samples above the
    /// chunk's `max_height` read as [`HEIGHT_CAP`]: open sky that nothing
    /// can stand on or step over.
    pub fn floor_height_at(&self, id: ChunkId, pos: Vec2) -> f32 {
        let h = self.height_at(id, pos);
        if h > self.chunk(id).max_height {
            HEIGHT_CAP
        } else {
            h
        }
    }

    /// Build a fully joined `cols` × `rows` rectangle of chunks.
    ///
    /// `sample` is called once per chunk with its grid column and row and
    /// must produce the chunk's height grid. Returns the graph and the
    /// chunk handles in row-major order. Chunk (0, 0) sits at the world
    /// grid origin.
    pub fn grid<F>(cols: usize, rows: usize, max_height: f32, mut sample: F) -> (Self, Vec<ChunkId>)
    where
        F: FnMut(usize, usize) -> [f32; CHUNK_AREA],
    {
        let mut graph = Self::new();
        let mut ids = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                ids.push(graph.insert(Chunk::from_samples(sample(col, row), max_height)));
            }
        }
        for row in 0..rows {
            for col in 0..cols {
                let id = ids[row * cols + col];
                if col + 1 < cols {
                    graph.join(id, Cardinal::East, ids[row * cols + col + 1]);
                }
                if row + 1 < rows {
                    graph.join(id, Cardinal::South, ids[(row + 1) * cols + col]);
                }
            }
        }
        (graph, ids)
    }
}
