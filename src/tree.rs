//! Binomial tree slots and the structural algebra over them.
//!
//! Trees live in an arena ([`Forest`]) and reference each other through
//! generational keys instead of pointers. Each slot carries three links:
//! `parent` (its single owner), `sibling` (the next entry in the parent's
//! child chain), and `child` (the head of its own chain, ordered by
//! descending rank). A rank-k slot has exactly k children of ranks
//! k-1 down to 0.
//!
//! The occupant of a slot is a key into the node arena, not the item
//! itself. [`Forest::bubble`] restores heap order by swapping occupant
//! keys between a slot and its parent, which leaves the tree shape intact
//! and keeps external handles valid through the back-references.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::handle::{NodeKey, NodeRec};
use crate::rank::{checked_increment, Rank};

new_key_type! {
    /// Generational arena key for tree slots.
    pub(crate) struct TreeKey;
}

/// One binomial tree slot.
pub(crate) struct TreeSlot {
    pub(crate) rank: Rank,
    pub(crate) occupant: NodeKey,
    pub(crate) parent: Option<TreeKey>,
    pub(crate) sibling: Option<TreeKey>,
    pub(crate) child: Option<TreeKey>,
}

/// Arena of tree slots and node records.
///
/// Owns both sides of the occupant relation so that a single `&mut` is
/// enough to splice trees and re-point node back-references atomically.
pub(crate) struct Forest<T> {
    trees: SlotMap<TreeKey, TreeSlot>,
    nodes: SlotMap<NodeKey, NodeRec<T>>,
}

impl<T> Forest<T> {
    pub(crate) fn new() -> Self {
        Self {
            trees: SlotMap::with_key(),
            nodes: SlotMap::with_key(),
        }
    }

    /// Allocates a rank-0 tree occupied by a fresh node record for `item`.
    pub(crate) fn new_tree(&mut self, item: T) -> (TreeKey, NodeKey) {
        let node = self.nodes.insert(NodeRec {
            item,
            slot: TreeKey::default(),
        });
        let tree = self.trees.insert(TreeSlot {
            rank: 0,
            occupant: node,
            parent: None,
            sibling: None,
            child: None,
        });
        self.nodes[node].slot = tree;
        (tree, node)
    }

    #[inline]
    pub(crate) fn rank(&self, tree: TreeKey) -> Rank {
        self.trees[tree].rank
    }

    #[inline]
    pub(crate) fn occupant(&self, tree: TreeKey) -> NodeKey {
        self.trees[tree].occupant
    }

    /// Item at the root of `tree`.
    #[inline]
    pub(crate) fn root_item(&self, tree: TreeKey) -> &T {
        &self.nodes[self.trees[tree].occupant].item
    }

    #[inline]
    pub(crate) fn contains_node(&self, node: NodeKey) -> bool {
        self.nodes.contains_key(node)
    }

    pub(crate) fn item(&self, node: NodeKey) -> Option<&T> {
        self.nodes.get(node).map(|rec| &rec.item)
    }

    pub(crate) fn item_mut(&mut self, node: NodeKey) -> Option<&mut T> {
        self.nodes.get_mut(node).map(|rec| &mut rec.item)
    }

    /// Merges two trees of equal rank into one tree of the next rank.
    ///
    /// Returns `None` and leaves both trees untouched when the ranks
    /// differ; only equal-rank trees can be merged, and passing anything
    /// else is a caller bug, not a recoverable condition.
    ///
    /// The comparator picks the winner: `t1` stays on top unless `t2`'s
    /// occupant is strictly less. The loser becomes the winner's new first
    /// child, chained in front of the winner's previous children, and the
    /// winner's rank goes up by one. The loser's subtree is untouched.
    pub(crate) fn merge<F>(&mut self, t1: TreeKey, t2: TreeKey, less: &F) -> Option<TreeKey>
    where
        F: Fn(&T, &T) -> bool,
    {
        if self.trees[t1].rank != self.trees[t2].rank {
            return None;
        }

        let t2_wins = less(self.root_item(t2), self.root_item(t1));
        let (winner, loser) = if t2_wins { (t2, t1) } else { (t1, t2) };

        let prior_child = self.trees[winner].child.replace(loser);
        let slot = &mut self.trees[loser];
        slot.sibling = prior_child;
        slot.parent = Some(winner);
        self.trees[winner].rank = checked_increment(self.trees[winner].rank);
        Some(winner)
    }

    /// Moves a node's item toward the root while it is less than the
    /// occupant above it.
    ///
    /// Only occupant keys move between slots; the tree shape is untouched.
    /// Both node records involved in each swap get their back-references
    /// re-pointed, so every external handle stays valid. Returns the slot
    /// where the node ended up.
    pub(crate) fn bubble<F>(&mut self, node: NodeKey, less: &F) -> TreeKey
    where
        F: Fn(&T, &T) -> bool,
    {
        let mut cur = self.nodes[node].slot;
        while let Some(parent) = self.trees[cur].parent {
            let moving = self.trees[cur].occupant;
            let above = self.trees[parent].occupant;
            if !less(&self.nodes[moving].item, &self.nodes[above].item) {
                break;
            }
            self.trees[cur].occupant = above;
            self.trees[parent].occupant = moving;
            self.nodes[above].slot = cur;
            self.nodes[moving].slot = parent;
            cur = parent;
        }
        cur
    }

    /// Detaches the child chain of `tree`, clearing parent and sibling
    /// links on each child as the chain is walked.
    ///
    /// The children come out in chain order (descending rank), each now a
    /// free-standing root ready to be combined back into a forest.
    pub(crate) fn take_children(&mut self, tree: TreeKey) -> SmallVec<[TreeKey; 8]> {
        let mut children = SmallVec::new();
        let mut next = self.trees[tree].child.take();
        while let Some(child) = next {
            let slot = &mut self.trees[child];
            next = slot.sibling.take();
            slot.parent = None;
            children.push(child);
        }
        children
    }

    /// Removes a detached root slot and its node record, returning the
    /// item. The node's handle goes stale.
    pub(crate) fn discard_root(&mut self, tree: TreeKey) -> T {
        let slot = self
            .trees
            .remove(tree)
            .expect("discarded root slot must be live");
        let rec = self
            .nodes
            .remove(slot.occupant)
            .expect("discarded root occupant must be live");
        rec.item
    }

    /// Verifies the structure of a tree and returns its node count.
    ///
    /// Checks rank arithmetic (a rank-k slot has children of ranks
    /// k-1..0), heap order, and the occupant back-references.
    #[cfg(debug_assertions)]
    pub(crate) fn verify_tree<F>(&self, tree: TreeKey, less: &F) -> usize
    where
        F: Fn(&T, &T) -> bool,
    {
        let slot = &self.trees[tree];
        assert_eq!(
            self.nodes[slot.occupant].slot, tree,
            "occupant back-reference does not name its slot"
        );

        let mut count = 1;
        let mut expected_rank = slot.rank;
        let mut next = slot.child;
        while let Some(child) = next {
            expected_rank -= 1;
            let child_slot = &self.trees[child];
            assert_eq!(
                child_slot.rank, expected_rank,
                "child chain ranks must descend one by one"
            );
            assert_eq!(child_slot.parent, Some(tree), "child must point at its parent");
            assert!(
                !less(self.root_item(child), self.root_item(tree)),
                "heap order violated between parent and child"
            );
            count += self.verify_tree(child, less);
            next = child_slot.sibling;
        }
        assert_eq!(expected_rank, 0, "rank-k slot must have exactly k children");
        count
    }
}
