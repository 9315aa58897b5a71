//! Generic containers used by the simulation core
//!
//! Two small fixed-purpose structures:
//!
//! - [`DedupQueue`]: a bounded FIFO that silently ignores duplicate pushes,
//!   usable as a combined frontier/visited-set for bounded graph walks.
//! - [`SearchTree`]: an unbalanced binary search tree keyed by `f32`,
//!   usable as a small double-ended priority queue.
//!
//! Both are tuned for small, bounded per-frame populations rather than
//! asymptotic performance.

mod dedup_queue;
mod search_tree;

pub use dedup_queue::DedupQueue;
pub use search_tree::SearchTree;
