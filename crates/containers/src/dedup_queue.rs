//! Bounded deduplicating FIFO queue

/// A fixed-capacity FIFO queue that rejects duplicate elements.
///
/// The queue keeps a read cursor separate from its write extent, which
/// allows two usage patterns on top of plain push/pop:
///
/// - [`restore`](DedupQueue::restore) rewinds the cursor so the stored
///   elements can be replayed, turning one filling pass into several
///   consumption passes without reallocating.
/// - [`shift`](DedupQueue::shift) discards the consumed prefix and
///   compacts the remainder, reclaiming capacity for further pushes.
///
/// Because pushes deduplicate against everything still stored, the queue
/// doubles as a visited-set during breadth-first walks: pushing an element
/// that was already enqueued is a successful no-op.
#[derive(Debug)]
pub struct DedupQueue<T> {
    items: Vec<T>,
    first: usize,
    capacity: usize,
}

impl<T: Copy + PartialEq> DedupQueue<T> {
    /// Create a queue holding at most `capacity` elements.
    ///
    /// The backing storage is allocated up front; the queue never grows.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            first: 0,
            capacity,
        }
    }

    /// Push an element onto the back of the queue.
    ///
    /// Returns `true` if the element is stored after the call: either it was
    /// appended, or an equal element was already present (the push is an
    /// idempotent no-op). Returns `false` when the queue is full and the
    /// element is distinct; the element is dropped.
    pub fn push(&mut self, value: T) -> bool {
        if self.items.contains(&value) {
            return true;
        }
        if self.items.len() == self.capacity {
            return false;
        }
        self.items.push(value);
        true
    }

    /// Pop the element at the read cursor, advancing the cursor.
    ///
    /// Returns `None` once the cursor has reached the write extent. Popping
    /// does not remove the element from storage; it remains visible to
    /// deduplication and to a later [`restore`](DedupQueue::restore).
    pub fn pop(&mut self) -> Option<T> {
        if self.first == self.items.len() {
            return None;
        }
        let value = self.items[self.first];
        self.first += 1;
        Some(value)
    }

    /// Clear the queue entirely: cursor and extent both back to zero.
    pub fn reset(&mut self) {
        self.items.clear();
        self.first = 0;
    }

    /// Rewind the read cursor without clearing, replaying every stored
    /// element on subsequent pops.
    pub fn restore(&mut self) {
        self.first = 0;
    }

    /// Discard the consumed prefix and compact the unread suffix to the
    /// front, resetting the cursor. Frees capacity for further pushes at
    /// the cost of forgetting already-popped elements for deduplication.
    pub fn shift(&mut self) {
        self.items.drain(..self.first);
        self.first = 0;
    }

    /// Maximum number of elements the queue can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of elements currently stored (read and unread).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of elements still ahead of the read cursor.
    pub fn pending(&self) -> usize {
        self.items.len() - self.first
    }

    /// True when nothing is stored at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when the write extent has reached capacity.
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Iterate over the unread region without consuming it.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items[self.first..].iter()
    }
}

impl<T: Copy + PartialEq> Clone for DedupQueue<T> {
    /// Deep clone preserving the unread region, compacted to the front of
    /// the clone. Already-consumed elements are not carried over.
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items[self.first..]);
        Self {
            items,
            first: 0,
            capacity: self.capacity,
        }
    }
}
