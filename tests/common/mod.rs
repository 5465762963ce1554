#![allow(dead_code)]

use crossterm::event::KeyCode;
use reorder_list_tui::engine::choice::selectable_bounds;
use reorder_list_tui::{Bounds, Choice, KeyPress, ListEntry, ListPolicy, normalize_choices};

/// A list valued `1..=n`, nothing checked, nothing disabled.
pub fn numbered(n: u32) -> Vec<ListEntry<u32>> {
    normalize_choices((1..=n).map(Choice::new).collect())
}

/// Checks the entries holding the given values.
pub fn check(entries: &mut [ListEntry<u32>], values: &[u32]) {
    for entry in entries.iter_mut() {
        if entry
            .as_choice()
            .is_some_and(|choice| values.contains(&choice.value))
        {
            entry.set_checked(true);
        }
    }
}

/// The values in list order, separators skipped.
pub fn order(entries: &[ListEntry<u32>]) -> Vec<u32> {
    entries
        .iter()
        .filter_map(|entry| entry.as_choice())
        .map(|choice| choice.value)
        .collect()
}

/// The checked values in list order.
pub fn checked_order(entries: &[ListEntry<u32>]) -> Vec<u32> {
    entries
        .iter()
        .filter(|entry| entry.is_checked())
        .filter_map(|entry| entry.as_choice())
        .map(|choice| choice.value)
        .collect()
}

pub fn bounds_of(entries: &[ListEntry<u32>], policy: &ListPolicy) -> Bounds {
    selectable_bounds(entries, policy).expect("at least one selectable entry")
}

pub fn plain(code: KeyCode) -> KeyPress {
    KeyPress::plain(code)
}

pub fn shifted(code: KeyCode) -> KeyPress {
    KeyPress::shifted(code)
}
