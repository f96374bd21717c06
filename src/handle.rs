//! External handles to heap items.
//!
//! Every item pushed onto the heap gets a node record in an arena. The
//! record stores the item together with a back-reference to the tree slot
//! currently holding it. Structural operations move occupants between
//! slots, never node records, so a [`Handle`] stays valid across merges
//! and bubble swaps until its item is popped.

use slotmap::new_key_type;

use crate::tree::TreeKey;

new_key_type! {
    /// Generational arena key for node records.
    pub(crate) struct NodeKey;
}

/// Node record: the caller's item plus the tree slot it currently occupies.
///
/// The `slot` back-reference is re-pointed on every bubble swap so that a
/// handle always resolves to the slot holding its item.
pub(crate) struct NodeRec<T> {
    pub(crate) item: T,
    pub(crate) slot: TreeKey,
}

/// Handle to an item stored in a [`BinomialHeap`](crate::BinomialHeap).
///
/// Returned by `push` and used to address the item later, most importantly
/// for decrease-key. Handles are small `Copy` keys with a generation tag:
/// once the item is popped, the handle goes stale and lookups through it
/// return `None` instead of aliasing a reused slot.
///
/// A handle is only meaningful on the heap that created it. Using it with
/// a different heap is not detected and yields unspecified results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub(crate) NodeKey);
