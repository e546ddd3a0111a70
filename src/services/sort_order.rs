//! Dense sort-order maintenance
//!
//! Sibling entities carry an integer sort order kept as a dense even
//! sequence: 0, 2, 4, ... The odd gap between neighbors is what the move
//! operations exploit. Moving an entity applies a delta of ±3 to its current
//! value, which lands it just past one neighbor, and a full re-rank then
//! restores density. New entities are inserted at `NEW_ENTRY_SORT_ORDER`
//! (−2), guaranteed to sort ahead of rank 0, and normalized by the same
//! re-rank pass.
//!
//! Re-ranking is triggered whenever a delta has been applied or a new entry
//! inserted; it rewrites every sibling's value, so callers persist the whole
//! set afterwards.

/// Gap between adjacent ranks.
pub const SORT_ORDER_STEP: i32 = 2;

/// Synthetic sort order for a freshly inserted entity; sorts ahead of
/// everything already ranked.
pub const NEW_ENTRY_SORT_ORDER: i32 = -2;

/// Delta that moves an entity ahead of its previous neighbor.
pub const MOVE_UP_DELTA: i32 = -3;

/// Delta that moves an entity past its next neighbor.
pub const MOVE_DOWN_DELTA: i32 = 3;

/// An entity carrying a maintained sort-order key.
pub trait SortOrdered {
    fn sort_order(&self) -> i32;
    fn set_sort_order(&mut self, value: i32);
}

/// Sort the slice by its current (possibly just-adjusted) sort orders and
/// re-assign the dense even sequence.
///
/// The sort is stable, so entities holding equal values keep their relative
/// order. Every element's value is rewritten, including ones that did not
/// change; callers persist all of them.
pub fn rerank<T: SortOrdered>(items: &mut [T]) {
    items.sort_by_key(|item| item.sort_order());
    for (index, item) in items.iter_mut().enumerate() {
        item.set_sort_order(index as i32 * SORT_ORDER_STEP);
    }
}
