//! Chunk storage and cardinal directions

use glam::IVec2;

/// Tiles along one side of a chunk.
pub const CHUNK_SIZE: usize = 16;

/// Number of height samples in a chunk.
pub const CHUNK_AREA: usize = CHUNK_SIZE * CHUNK_SIZE;

/// Sentinel floor height for open sky: samples above a chunk's
/// `max_height`, and tiles past the edge of the world, report this value.
/// Any agent comparison against it reads as an unclimbable wall.
pub const HEIGHT_CAP: f32 = 10_000.0;

/// The four cardinal neighbor directions.
///
/// North is negative z, east is positive x; the discriminant doubles as
/// the neighbor-array index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cardinal {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Cardinal {
    /// All four directions in index order.
    pub const ALL: [Cardinal; 4] = [
        Cardinal::North,
        Cardinal::East,
        Cardinal::South,
        Cardinal::West,
    ];

    /// Neighbor-array index of this direction.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The reciprocal direction.
    pub fn opposite(self) -> Cardinal {
        Cardinal::ALL[(self.index() + 2) % 4]
    }

    /// Unit offset of this direction on the world chunk grid.
    pub fn offset(self) -> IVec2 {
        match self {
            Cardinal::North => IVec2::new(0, -1),
            Cardinal::East => IVec2::new(1, 0),
            Cardinal::South => IVec2::new(0, 1),
            Cardinal::West => IVec2::new(-1, 0),
        }
    }
}

/// Handle to a chunk inside a [`ChunkGraph`](super::ChunkGraph) pool.
///
/// Plain copyable index; holders (bodies, scanners) reference chunks by
/// id and resolve them through the graph rather than owning them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkId(pub(crate) u32);

/// One height-field terrain chunk.
///
/// Holds a 16×16 grid of floor heights, the chunk's position on the world
/// grid, and links to up to four cardinal neighbors. Samples above
/// `max_height` are treated as open sky rather than walkable floor.
#[derive(Clone, Debug)]
pub struct Chunk {
    pub(crate) heights: [f32; CHUNK_AREA],
    pub(crate) max_height: f32,
    pub(crate) min_height: f32,
    pub(crate) world_pos: IVec2,
    pub(crate) neighbors: [Option<ChunkId>; 4],
}

impl Chunk {
    /// Build a chunk from a full grid of height samples.
    ///
    /// `min_height` is derived from the samples; the world position starts
    /// at the origin and is assigned when the chunk is joined into a
    /// graph.
    pub fn from_samples(heights: [f32; CHUNK_AREA], max_height: f32) -> Self {
        let min_height = heights.iter().copied().fold(f32::INFINITY, f32::min);
        Self {
            heights,
            max_height,
            min_height,
            world_pos: IVec2::ZERO,
            neighbors: [None; 4],
        }
    }

    /// Height sample at local tile coordinates.
    pub fn sample(&self, x: usize, z: usize) -> f32 {
        self.heights[z * CHUNK_SIZE + x]
    }

    /// Position of this chunk on the world chunk grid.
    pub fn world_pos(&self) -> IVec2 {
        self.world_pos
    }

    /// Neighbor link in the given direction, if joined.
    pub fn neighbor(&self, dir: Cardinal) -> Option<ChunkId> {
        self.neighbors[dir.index()]
    }

    /// Ceiling above which samples are treated as open sky.
    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    /// Lowest height sample in the chunk.
    pub fn min_height(&self) -> f32 {
        self.min_height
    }
}
