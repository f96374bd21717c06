//! Tree rank type and arithmetic.
//!
//! The rank of a binomial tree is its number of children, which is bounded
//! by `log₂(n)` for a heap of `n` items. A `u8` therefore supports heaps
//! with up to 2²⁵⁵ items, far beyond anything that fits in memory, while
//! keeping the per-slot rank field to a single byte.

/// Rank (number of children) of a binomial tree.
///
/// A rank-k tree holds exactly 2ᵏ items, so `u8` is never the limiting
/// factor in practice.
pub type Rank = u8;

/// Largest representable rank.
pub const MAX_RANK: Rank = u8::MAX;

/// Increment a rank, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == MAX_RANK`. Reaching rank 255 would require a heap of
/// 2²⁵⁵ items, so an overflow here always indicates internal corruption
/// rather than a large input.
#[inline]
pub fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1)
        .expect("rank overflow: a rank-255 tree would need 2^255 items")
}
