// src/engine/navigate.rs

//! Navigation engine: computes the next cursor index for a key, either for
//! the bare cursor or for a dragged group of entries.

use crate::engine::choice::{ListEntry, ListPolicy};
use crate::engine::key::KeyPress;

/// Returns the next index on the looped list.
///
/// Without dragging the step skips non-selectable entries, so the cursor
/// never rests on a separator or disabled choice. While dragging, the moving
/// group must shift past such entries as a block, so nothing is skipped.
///
/// The caller guarantees at least one selectable entry; the skip loop is
/// bounded by the list length regardless.
pub fn get_next<V>(
    key: &KeyPress,
    basis: usize,
    entries: &[ListEntry<V>],
    dragging: bool,
    policy: &ListPolicy,
) -> usize {
    let len = entries.len();
    debug_assert!(len > 0 && basis < len);

    if key.is_top_or_bottom() {
        if dragging {
            return if key.is_top() { 0 } else { len - 1 };
        }
        return if key.is_top() {
            entries
                .iter()
                .position(|entry| entry.is_selectable(policy))
                .unwrap_or(0)
        } else {
            entries
                .iter()
                .rposition(|entry| entry.is_selectable(policy))
                .unwrap_or(len - 1)
        };
    }

    let step: isize = if key.is_up_or_left() { -1 } else { 1 };
    let advance = |index: usize| (index as isize + step).rem_euclid(len as isize) as usize;

    let mut next = advance(basis);
    if !dragging {
        for _ in 0..len {
            if entries[next].is_selectable(policy) {
                break;
            }
            next = advance(next);
        }
    }
    next
}
