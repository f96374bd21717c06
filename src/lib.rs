//! Addressable binomial heap
//!
//! A mergeable priority-queue core built from binomial trees, with stable
//! handles for decrease-key:
//!
//! - **push**: O(1) amortized, O(log n) worst case (carry propagation)
//! - **peek / peek_handle**: O(log n) scan of the root list
//! - **pop**: O(log n)
//! - **update / decrease**: O(log n) bubble up, no structural change
//!
//! Trees and node records live in generational arenas (`slotmap`), so the
//! parent/sibling/child graph is index-based rather than pointer-based and
//! handles detect staleness for free. Decrease-key swaps occupant keys
//! between slots instead of moving nodes, which is what keeps a handle
//! valid while its item migrates toward the root.
//!
//! Ordering comes from a caller-supplied strict-weak-ordering closure, so
//! the same item type can drive a min-heap, a max-heap, or any keyed
//! ordering without wrapper types.
//!
//! # Example
//!
//! ```rust
//! use binomial_heap::BinomialHeap;
//!
//! let mut heap = BinomialHeap::new(|a: &(u32, &str), b: &(u32, &str)| a.0 < b.0);
//! let slow = heap.push((40, "slow"));
//! heap.push((10, "fast"));
//!
//! assert_eq!(heap.peek(), Some(&(10, "fast")));
//!
//! // A shorter route to "slow" was found.
//! heap.decrease(slow, (5, "slow")).unwrap();
//! assert_eq!(heap.pop(), Some((5, "slow")));
//! assert_eq!(heap.pop(), Some((10, "fast")));
//! assert_eq!(heap.pop(), None);
//! ```

pub mod handle;
pub mod heap;
pub mod rank;
mod tree;

pub use handle::Handle;
pub use heap::{BinomialHeap, HeapError};
