//! Key-ordered binary search tree used as a small priority queue

struct Node<T> {
    key: f32,
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

/// An unbalanced binary search tree keyed by an `f32` priority.
///
/// Each node exclusively owns its payload and children, so dropping the
/// tree (or a removed node) tears down whole subtrees through normal
/// ownership. Supports removal from both ends of the key order, making it
/// a double-ended priority queue for small populations.
///
/// There is no rebalancing: worst-case operations are O(n). Intended for
/// transient per-frame workloads of a few dozen entries, where tree shape
/// is irrelevant in practice.
///
/// Duplicate keys are allowed and inserted to the right of the existing
/// node; among equal keys pop order follows tree shape, not insertion
/// order. NaN keys compare as ties and are not given any special meaning.
#[derive(Default)]
pub struct SearchTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> SearchTree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert `value` with priority `key`.
    ///
    /// Strictly smaller keys descend left, everything else (including
    /// ties) descends right.
    pub fn push(&mut self, key: f32, value: T) {
        insert(&mut self.root, key, value);
        self.len += 1;
    }

    /// Remove and return the payload with the lowest key.
    ///
    /// Returns `None` when the tree is empty.
    pub fn pop_low(&mut self) -> Option<T> {
        let root = self.root.take()?;
        let (root, value) = pop_low(root);
        self.root = root;
        self.len -= 1;
        Some(value)
    }

    /// Remove and return the payload with the highest key.
    ///
    /// Returns `None` when the tree is empty.
    pub fn pop_high(&mut self) -> Option<T> {
        let root = self.root.take()?;
        let (root, value) = pop_high(root);
        self.root = root;
        self.len -= 1;
        Some(value)
    }
}

impl<T: PartialEq> SearchTree<T> {
    /// True if an entry with key `key` and payload equal to `value` exists.
    ///
    /// Descends by strict key ordering; on a key match with a different
    /// payload the search continues right, where further duplicates of the
    /// same key would have been inserted.
    pub fn contains(&self, key: f32, value: &T) -> bool {
        contains(&self.root, key, value)
    }
}

fn insert<T>(slot: &mut Option<Box<Node<T>>>, key: f32, value: T) {
    match slot {
        None => {
            *slot = Some(Box::new(Node {
                key,
                value,
                left: None,
                right: None,
            }));
        }
        Some(node) => {
            if key < node.key {
                insert(&mut node.left, key, value);
            } else {
                insert(&mut node.right, key, value);
            }
        }
    }
}

/// Remove the leftmost node, re-linking its right subtree into the
/// vacated slot. Returns the new subtree root and the removed payload.
fn pop_low<T>(mut node: Box<Node<T>>) -> (Option<Box<Node<T>>>, T) {
    match node.left.take() {
        Some(left) => {
            let (left, value) = pop_low(left);
            node.left = left;
            (Some(node), value)
        }
        None => (node.right.take(), node.value),
    }
}

fn pop_high<T>(mut node: Box<Node<T>>) -> (Option<Box<Node<T>>>, T) {
    match node.right.take() {
        Some(right) => {
            let (right, value) = pop_high(right);
            node.right = right;
            (Some(node), value)
        }
        None => (node.left.take(), node.value),
    }
}

fn contains<T: PartialEq>(slot: &Option<Box<Node<T>>>, key: f32, value: &T) -> bool {
    let Some(node) = slot else {
        return false;
    };
    if key < node.key {
        contains(&node.left, key, value)
    } else if key > node.key {
        contains(&node.right, key, value)
    } else if node.value == *value {
        true
    } else {
        contains(&node.right, key, value)
    }
}
