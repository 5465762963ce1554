// src/engine/select.rs

//! Selection engine: checked-flag operations. None of these change the list
//! order.

use crate::engine::choice::{ListEntry, ListPolicy};

/// Toggles the entry at `index`. Returns `false` when the entry is out of
/// range or not selectable under the policy.
pub fn toggle_at<V>(entries: &mut [ListEntry<V>], index: usize, policy: &ListPolicy) -> bool {
    match entries.get_mut(index) {
        Some(entry) if entry.is_selectable(policy) => {
            entry.toggle();
            true
        }
        _ => false,
    }
}

/// Checks every selectable entry if any of them is unchecked, otherwise
/// unchecks them all. A single key thus serves as both select-all and
/// deselect-all. Separators never carry a check, so they are left out of the
/// decision.
pub fn toggle_all<V>(entries: &mut [ListEntry<V>], policy: &ListPolicy) {
    let check_all = entries
        .iter()
        .any(|entry| !entry.is_separator() && entry.is_selectable(policy) && !entry.is_checked());
    for entry in entries.iter_mut() {
        if entry.is_selectable(policy) {
            entry.set_checked(check_all);
        }
    }
}

/// Flips the checked flag on every selectable entry independently.
pub fn invert<V>(entries: &mut [ListEntry<V>], policy: &ListPolicy) {
    for entry in entries.iter_mut() {
        if entry.is_selectable(policy) {
            entry.toggle();
        }
    }
}
