//! Bounded breadth-first discovery of the chunks around an origin

use chunkfield_containers::DedupQueue;
use tracing::trace;

use super::chunk::{Cardinal, ChunkId};
use super::graph::ChunkGraph;

/// Default chunk budget for one discovery pass.
pub const DEFAULT_REGION_CAPACITY: usize = 41;

/// Discovers the connected set of chunks reachable from an origin within
/// a fixed chunk budget.
///
/// The scanner's [`DedupQueue`] is both the frontier and the visited set:
/// pushing an already-discovered chunk is a no-op, and a failed push means
/// the budget is spent. The budget deliberately bounds work per tick; a
/// truncated region is expected behavior near dense neighborhoods, not an
/// error.
///
/// The queue is reused across scans, so a long-lived scanner performs no
/// allocation after construction.
pub struct ActiveRegionScanner {
    queue: DedupQueue<ChunkId>,
}

impl ActiveRegionScanner {
    /// Create a scanner that discovers at most `capacity` chunks per scan.
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: DedupQueue::new(capacity),
        }
    }

    /// Breadth-first walk of the neighbor graph from `origin`.
    ///
    /// Expansion stops as soon as a distinct chunk no longer fits in the
    /// budget; chunks already discovered never consume it. Afterwards the
    /// discovered set is readable through [`chunks`](Self::chunks) until
    /// the next scan.
    pub fn scan(&mut self, graph: &ChunkGraph, origin: ChunkId) {
        self.queue.reset();
        self.queue.push(origin);
        'walk: while let Some(id) = self.queue.pop() {
            for dir in Cardinal::ALL {
                let Some(neighbor) = graph.chunk(id).neighbor(dir) else {
                    continue;
                };
                if !self.queue.push(neighbor) {
                    trace!(
                        discovered = self.queue.len(),
                        capacity = self.queue.capacity(),
                        "active region truncated at budget"
                    );
                    break 'walk;
                }
            }
        }
        // Rewind so the same elements can be replayed by the consumer.
        self.queue.restore();
    }

    /// The chunks found by the most recent scan, origin first.
    pub fn chunks(&self) -> impl Iterator<Item = ChunkId> + '_ {
        self.queue.iter().copied()
    }

    /// Number of chunks found by the most recent scan.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True when no scan has run since construction or the last scan
    /// found nothing.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
