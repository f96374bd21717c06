//! Binomial heap over an arena forest.
//!
//! The heap keeps an unordered root list with at most one tree per rank,
//! which is what bounds every operation by the number of distinct ranks,
//! O(log n). Insertion works like incrementing a binary counter: a new
//! rank-0 tree collides with an existing root of the same rank, the two
//! merge into a tree one rank higher, and the carry repeats until it finds
//! a free rank. Removal of the minimum splices the dead root's children
//! back into the forest through the same carry loop.
//!
//! Ordering is driven entirely by a caller-supplied `less` closure, which
//! must be a strict weak ordering over every item the heap ever holds. An
//! inconsistent comparator produces an unspecified forest shape and
//! extraction order, not an error.

use std::fmt;

use smallvec::SmallVec;

use crate::handle::Handle;
use crate::tree::{Forest, TreeKey};

/// Error from the validated [`BinomialHeap::decrease`] entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The replacement item compares greater than the current one.
    NotDecreased,
    /// The handle's item was already popped from the heap.
    StaleHandle,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::NotDecreased => {
                write!(f, "replacement item compares greater than the current item")
            }
            HeapError::StaleHandle => write!(f, "handle's item was already popped"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Addressable binomial min-heap.
///
/// Items are ordered by a caller-supplied strict-weak-ordering closure,
/// fixed at construction. `push` returns a [`Handle`] that stays valid
/// across all structural reshaping until the item is popped, so callers
/// can lower an item's key later and restore order with [`update`] or
/// [`decrease`].
///
/// # Example
///
/// ```rust
/// use binomial_heap::BinomialHeap;
///
/// let mut heap = BinomialHeap::new(|a: &u32, b: &u32| a < b);
/// let handle = heap.push(40);
/// heap.push(10);
/// heap.push(25);
/// assert_eq!(heap.peek(), Some(&10));
///
/// *heap.get_mut(handle).unwrap() = 5;
/// heap.update(handle);
/// assert_eq!(heap.pop(), Some(5));
/// ```
///
/// [`update`]: BinomialHeap::update
/// [`decrease`]: BinomialHeap::decrease
pub struct BinomialHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    forest: Forest<T>,
    /// Root list. Unordered; holds at most one tree per rank between
    /// public operations.
    roots: SmallVec<[TreeKey; 8]>,
    less: F,
    len: usize,
}

impl<T, F> BinomialHeap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty heap ordered by `less`.
    ///
    /// `less` must be a strict weak ordering: irreflexive, transitive, and
    /// with transitive incomparability, consistently over every item ever
    /// inserted into this heap.
    pub fn new(less: F) -> Self {
        Self {
            forest: Forest::new(),
            roots: SmallVec::new(),
            less,
            len: 0,
        }
    }

    /// Number of items on the heap.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap holds no items.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Pushes an item, returning a handle for later decrease-key.
    ///
    /// The item starts as a rank-0 tree and is combined into the forest
    /// with carry propagation. Amortized O(1) over a push sequence; a
    /// single push is O(log n) when it triggers a full carry chain.
    pub fn push(&mut self, item: T) -> Handle {
        let (tree, node) = self.forest.new_tree(item);
        self.combine(tree);
        self.len += 1;
        #[cfg(debug_assertions)]
        self.verify();
        Handle(node)
    }

    /// Minimum item, or `None` on an empty heap.
    ///
    /// Scans the O(log n) root list. Ties go to the first minimal root in
    /// list order, which is deterministic for a fixed operation history.
    pub fn peek(&self) -> Option<&T> {
        self.min_root().map(|i| self.forest.root_item(self.roots[i]))
    }

    /// Handle of the current minimum item, or `None` on an empty heap.
    ///
    /// Same scan and tie-breaking as [`peek`](BinomialHeap::peek), but
    /// returns the handle so the caller can address the item later.
    pub fn peek_handle(&self) -> Option<Handle> {
        self.min_root()
            .map(|i| Handle(self.forest.occupant(self.roots[i])))
    }

    /// Removes and returns the minimum item, or `None` on an empty heap.
    ///
    /// The minimum root leaves the root list, its children are detached
    /// and re-admitted one by one through the carry loop, and the root's
    /// records are discarded. O(log n). The popped item's handle goes
    /// stale.
    pub fn pop(&mut self) -> Option<T> {
        let i = self.min_root()?;
        let root = self.roots.remove(i);
        let children = self.forest.take_children(root);
        let item = self.forest.discard_root(root);
        for child in children {
            self.combine(child);
        }
        self.len -= 1;
        #[cfg(debug_assertions)]
        self.verify();
        Some(item)
    }

    /// Item behind a handle, or `None` if it was already popped.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.forest.item(handle.0)
    }

    /// Mutable access to the item behind a handle.
    ///
    /// This is the mutation point for decrease-key: lower the item here,
    /// then call [`update`](BinomialHeap::update) to restore heap order.
    /// Raising the item instead violates the `update` contract.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.forest.item_mut(handle.0)
    }

    /// Restores heap order after the handle's item was lowered.
    ///
    /// Bubbles the item's slot upward, swapping occupants with ancestors
    /// while the comparator is violated. Tree shape never changes and
    /// every handle involved in a swap stays valid. O(log n).
    ///
    /// Only upward motion is performed. If the item was raised rather
    /// than lowered, the subtree below it is left unordered (debug builds
    /// assert full heap order and will catch this); use
    /// [`decrease`](BinomialHeap::decrease) for a checked variant that
    /// rejects increases. A stale handle is a no-op. A handle from a
    /// different heap is not detected and yields unspecified results.
    pub fn update(&mut self, handle: Handle) {
        if !self.forest.contains_node(handle.0) {
            return;
        }
        self.forest.bubble(handle.0, &self.less);
        #[cfg(debug_assertions)]
        self.verify();
    }

    /// Replaces the handle's item with a smaller one and restores order.
    ///
    /// Checked front door over [`update`](BinomialHeap::update): the call
    /// is rejected with [`HeapError::NotDecreased`] when `new_item`
    /// compares greater than the current item, and with
    /// [`HeapError::StaleHandle`] when the item was already popped. On
    /// either error the heap is untouched. Replacing an item with an
    /// equal one is allowed and only reshuffles ties.
    pub fn decrease(&mut self, handle: Handle, new_item: T) -> Result<(), HeapError> {
        let current = self.forest.item(handle.0).ok_or(HeapError::StaleHandle)?;
        if (self.less)(current, &new_item) {
            return Err(HeapError::NotDecreased);
        }
        *self
            .forest
            .item_mut(handle.0)
            .expect("handle was just resolved") = new_item;
        self.forest.bubble(handle.0, &self.less);
        #[cfg(debug_assertions)]
        self.verify();
        Ok(())
    }

    /// Combines a free-standing tree into the root list.
    ///
    /// Carry propagation: while some root shares the candidate's rank,
    /// that root leaves the list and merges with the candidate into a
    /// tree one rank higher. Once the candidate's rank is free it is
    /// inserted at the front of the list.
    fn combine(&mut self, tree: TreeKey) {
        let mut candidate = tree;
        loop {
            let rank = self.forest.rank(candidate);
            let collision = self
                .roots
                .iter()
                .position(|&root| self.forest.rank(root) == rank);
            match collision {
                Some(i) => {
                    let other = self.roots.remove(i);
                    candidate = self
                        .forest
                        .merge(candidate, other, &self.less)
                        .expect("colliding roots have equal ranks");
                }
                None => break,
            }
        }
        self.roots.insert(0, candidate);
    }

    /// Index of the minimal root in the root list, first match wins.
    fn min_root(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &root) in self.roots.iter().enumerate() {
            let better = match best {
                None => true,
                Some(b) => (self.less)(
                    self.forest.root_item(root),
                    self.forest.root_item(self.roots[b]),
                ),
            };
            if better {
                best = Some(i);
            }
        }
        best
    }

    /// Verifies the full structure: root-rank uniqueness, tree shape,
    /// heap order, back-references, and the item count.
    #[cfg(debug_assertions)]
    fn verify(&self) {
        let mut seen = [false; crate::rank::MAX_RANK as usize + 1];
        let mut count = 0;
        for &root in &self.roots {
            let rank = self.forest.rank(root) as usize;
            assert!(!seen[rank], "two roots share rank {rank}");
            seen[rank] = true;
            count += self.forest.verify_tree(root, &self.less);
        }
        assert_eq!(count, self.len, "forest node count disagrees with len");
    }
}
