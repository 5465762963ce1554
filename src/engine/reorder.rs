// src/engine/reorder.rs

//! Reordering engine: given a key, the current list and the active index,
//! computes a new list order and a new active index.
//!
//! Every operation is a permutation of the input list. Results come back as a
//! fresh `Vec`; the input slice is never mutated. `None` means the key was a
//! no-op for the current state (blocked at a bound in non-loop mode, or an
//! intent this engine does not handle).

use crate::engine::choice::{Bounds, ListEntry, ListPolicy};
use crate::engine::key::KeyPress;
use crate::engine::navigate::get_next;

/// Computes new positions for the entries and the active item.
pub fn move_items<V: Clone>(
    key: &KeyPress,
    active: usize,
    entries: &[ListEntry<V>],
    looping: bool,
    bounds: Bounds,
    policy: &ListPolicy,
) -> Option<(Vec<ListEntry<V>>, usize)> {
    if !(key.is_directional() || key.is_top_or_bottom() || key.is_place_command()) {
        return None;
    }

    let len = entries.len();
    let active_item = &entries[active];
    let checked_active = active_item.is_checked();

    // Not looping and moving up from the top or down from the bottom, with an
    // unchecked active item.
    if !checked_active && blocked_at_bound(key, active, bounds, looping) {
        return None;
    }

    let checked_indices: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.is_checked())
        .map(|(index, _)| index)
        .collect();
    let consecutive = are_consecutive(&checked_indices);

    let mut moving_count = 1;
    let mut active_offset: Option<isize> = None;

    // A contiguous checked run moves as one block on vertical keys.
    if key.is_group_modified()
        && key.is_vertical()
        && checked_active
        && checked_indices.len() > 1
        && consecutive
    {
        moving_count = checked_indices.len();
        active_offset = initial_active_offset(key, &checked_indices, active);

        // The run's leading edge decides whether a non-loop move is blocked.
        let boundary = if key.is_up() {
            checked_indices[0]
        } else {
            checked_indices[checked_indices.len() - 1]
        };
        if blocked_at_bound(key, boundary, bounds, looping) {
            return None;
        }
    }

    // Not looping and a single checked item sits at the blocked bound.
    if checked_active
        && checked_indices.len() == 1
        && key.is_directional()
        && blocked_at_bound(key, active, bounds, looping)
    {
        return None;
    }

    // Move a contiguous checked run, a single checked item (horizontal keys
    // also cover the non-contiguous case) or the unchecked active item.
    if !key.is_place_command()
        && ((checked_active && consecutive && !key.is_top_or_bottom())
            || (checked_active && !consecutive && key.is_horizontal())
            || (!checked_active && !key.is_top_or_bottom()))
    {
        let (leading, moving_indices) = if moving_count > 1 {
            let leading = if key.is_up_or_left() {
                checked_indices[0]
            } else {
                checked_indices[checked_indices.len() - 1]
            };
            (leading, checked_indices)
        } else {
            (active, vec![active])
        };
        let moving: Vec<ListEntry<V>> = moving_indices
            .iter()
            .map(|&index| entries[index].clone())
            .collect();
        let next = get_next(key, leading, entries, true, policy);

        let (new_entries, offset) = if key.is_up_or_left() && leading == 0 {
            rotate_up_from_top(entries, moving, active_offset)
        } else if key.is_down_or_right() && leading == len - 1 {
            rotate_down_from_bottom(entries, moving, active_offset)
        } else {
            (
                splice_past_neighbor(key, next, entries, &moving),
                active_offset,
            )
        };
        let new_active = (next as isize + offset.unwrap_or(0)) as usize;
        return Some((new_entries, new_active));
    }

    // Place checked items above the active item with `m`, below it with `M`.
    if key.is_place_command() {
        let before = unchecked_slice(entries, |index| index < active);
        let after = unchecked_slice(entries, |index| index > active);
        let block: Vec<ListEntry<V>> = checked_indices
            .iter()
            .filter(|&&index| index != active)
            .map(|&index| entries[index].clone())
            .collect();

        let mut out: Vec<ListEntry<V>> = Vec::with_capacity(len);
        out.extend(before);
        let new_active = if key.is_place_above() {
            out.extend(block);
            out.push(active_item.clone());
            out.len() - 1
        } else {
            out.push(active_item.clone());
            let position = out.len() - 1;
            out.extend(block);
            position
        };
        out.extend(after);
        return Some((out, new_active));
    }

    // Collapse a non-contiguous checked set into one run on vertical keys,
    // anchored at the checked boundary nearest the direction of travel.
    if !consecutive && key.is_vertical() && checked_active {
        let anchor = if key.is_up() {
            checked_indices[0]
        } else {
            checked_indices[checked_indices.len() - 1]
        };
        let mut out = unchecked_slice(entries, |index| index < anchor);
        let block_start = out.len();
        out.extend(checked_indices.iter().map(|&index| entries[index].clone()));
        out.extend(unchecked_slice(entries, |index| index > anchor));

        let new_active = block_start + position_of(&checked_indices, active);
        return Some((out, new_active));
    }

    // Edge jump: the checked block, or the lone active item, to an extreme.
    if key.is_top_or_bottom() {
        if checked_active {
            let checked: Vec<ListEntry<V>> = checked_indices
                .iter()
                .map(|&index| entries[index].clone())
                .collect();
            let unchecked = unchecked_slice(entries, |_| true);
            let position = position_of(&checked_indices, active);

            let (out, new_active) = if key.is_top() {
                let mut out = checked;
                out.extend(unchecked);
                (out, position)
            } else {
                let block_start = len - checked.len();
                let mut out = unchecked;
                out.extend(checked);
                (out, block_start + position)
            };
            return Some((out, new_active));
        }

        let rest = entries
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != active)
            .map(|(_, entry)| entry.clone());
        let (out, new_active) = if key.is_top() {
            let mut out = vec![active_item.clone()];
            out.extend(rest);
            (out, 0)
        } else {
            let mut out: Vec<ListEntry<V>> = rest.collect();
            out.push(active_item.clone());
            (out, len - 1)
        };
        return Some((out, new_active));
    }

    None
}

/// Whether a non-loop move in the key's direction is blocked with the given
/// index at a selectable bound. Edge-jump keys are never blocked.
fn blocked_at_bound(key: &KeyPress, index: usize, bounds: Bounds, looping: bool) -> bool {
    !looping
        && ((key.is_up_or_left() && index == bounds.first)
            || (key.is_down_or_right() && index == bounds.last))
}

fn are_consecutive(indices: &[usize]) -> bool {
    indices.windows(2).all(|pair| pair[1] - pair[0] == 1)
}

/// The active item's ordinal position counted from the leading edge of the
/// checked run in the direction of travel. Zero or positive when moving
/// up/left, zero or negative when moving down/right.
fn initial_active_offset(
    key: &KeyPress,
    checked_indices: &[usize],
    active: usize,
) -> Option<isize> {
    let position = checked_indices.iter().position(|&index| index == active)? as isize;
    if key.is_up_or_left() {
        Some(position)
    } else {
        Some(position - checked_indices.len() as isize + 1)
    }
}

/// When the moving group wraps across a boundary, its members reverse which
/// end is leading, so the offset must be recomputed for the other direction.
fn invert_active_offset(offset: Option<isize>, moving_count: usize, up: bool) -> Option<isize> {
    offset.map(|offset| {
        if up {
            offset - moving_count as isize + 1
        } else {
            offset + moving_count as isize - 1
        }
    })
}

/// The moving group sat at index 0 and wrapped upward: it reappears at the
/// bottom in the same internal order.
fn rotate_up_from_top<V: Clone>(
    entries: &[ListEntry<V>],
    moving: Vec<ListEntry<V>>,
    active_offset: Option<isize>,
) -> (Vec<ListEntry<V>>, Option<isize>) {
    let moving_count = moving.len();
    let mut out = entries[moving_count..].to_vec();
    out.extend(moving);
    (out, invert_active_offset(active_offset, moving_count, true))
}

/// The moving group sat at the last index and wrapped downward: it reappears
/// at the top in the same internal order.
fn rotate_down_from_bottom<V: Clone>(
    entries: &[ListEntry<V>],
    moving: Vec<ListEntry<V>>,
    active_offset: Option<isize>,
) -> (Vec<ListEntry<V>>, Option<isize>) {
    let moving_count = moving.len();
    let mut out = moving;
    out.extend_from_slice(&entries[..entries.len() - moving_count]);
    (out, invert_active_offset(active_offset, moving_count, false))
}

/// Middle case: relocate the moving group immediately past the swapped
/// neighbor at `next`; the neighbor takes the slot the group's near edge
/// vacated.
fn splice_past_neighbor<V: Clone>(
    key: &KeyPress,
    next: usize,
    entries: &[ListEntry<V>],
    moving: &[ListEntry<V>],
) -> Vec<ListEntry<V>> {
    let moving_count = moving.len();
    let mut out;
    if key.is_up_or_left() {
        out = entries[..next].to_vec();
        out.extend_from_slice(moving);
        out.push(entries[next].clone());
        out.extend_from_slice(&entries[next + moving_count + 1..]);
    } else {
        out = entries[..next - moving_count].to_vec();
        out.push(entries[next].clone());
        out.extend_from_slice(moving);
        out.extend_from_slice(&entries[next + 1..]);
    }
    out
}

fn unchecked_slice<V: Clone>(
    entries: &[ListEntry<V>],
    keep: impl Fn(usize) -> bool,
) -> Vec<ListEntry<V>> {
    entries
        .iter()
        .enumerate()
        .filter(|(index, entry)| !entry.is_checked() && keep(*index))
        .map(|(_, entry)| entry.clone())
        .collect()
}

fn position_of(indices: &[usize], index: usize) -> usize {
    indices
        .iter()
        .position(|&candidate| candidate == index)
        .unwrap_or(0)
}
