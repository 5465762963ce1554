mod common;

use common::{bounds_of, check, checked_order, numbered, order, shifted};
use crossterm::event::KeyCode;
use reorder_list_tui::ListPolicy;
use reorder_list_tui::engine::reorder::move_items;

const POLICY: ListPolicy = ListPolicy {
    emit: reorder_list_tui::EmitMode::AllItems,
    honor_disabled: true,
    separators_selectable: true,
};

#[test]
fn consecutive_group_moves_down_past_a_neighbor() {
    let mut entries = numbered(12);
    check(&mut entries, &[2, 3]);
    let bounds = bounds_of(&entries, &POLICY);

    let (entries, active) = move_items(
        &shifted(KeyCode::Down),
        2,
        &entries,
        true,
        bounds,
        &POLICY,
    )
    .expect("group move");

    assert_eq!(order(&entries), [1, 4, 2, 3, 5, 6, 7, 8, 9, 10, 11, 12]);
    assert_eq!(active, 3);
    assert_eq!(checked_order(&entries), [2, 3]);
}

#[test]
fn consecutive_group_moves_up_past_a_neighbor() {
    let mut entries = numbered(12);
    check(&mut entries, &[2, 3]);
    let bounds = bounds_of(&entries, &POLICY);

    let (entries, active) =
        move_items(&shifted(KeyCode::Up), 2, &entries, false, bounds, &POLICY).expect("group move");

    assert_eq!(order(&entries), [2, 3, 1, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    assert_eq!(active, 1);
}

#[test]
fn group_at_the_top_wraps_to_the_bottom() {
    let mut entries = numbered(4);
    check(&mut entries, &[1, 2]);
    let bounds = bounds_of(&entries, &POLICY);

    let (entries, active) =
        move_items(&shifted(KeyCode::Up), 1, &entries, true, bounds, &POLICY).expect("wrap");
    assert_eq!(order(&entries), [3, 4, 1, 2]);
    assert_eq!(active, 3);

    // A second press goes back to the middle case.
    let bounds = bounds_of(&entries, &POLICY);
    let (entries, active) =
        move_items(&shifted(KeyCode::Up), active, &entries, true, bounds, &POLICY).expect("move");
    assert_eq!(order(&entries), [3, 1, 2, 4]);
    assert_eq!(active, 2);
}

#[test]
fn group_at_the_bottom_wraps_to_the_top() {
    let mut entries = numbered(4);
    check(&mut entries, &[3, 4]);
    let bounds = bounds_of(&entries, &POLICY);

    let (entries, active) =
        move_items(&shifted(KeyCode::Down), 3, &entries, true, bounds, &POLICY).expect("wrap");

    assert_eq!(order(&entries), [3, 4, 1, 2]);
    assert_eq!(active, 1);
}

#[test]
fn vim_keys_match_the_arrow_keys() {
    let mut entries = numbered(12);
    check(&mut entries, &[2, 3]);
    let bounds = bounds_of(&entries, &POLICY);

    let with_arrow = move_items(&shifted(KeyCode::Down), 2, &entries, true, bounds, &POLICY);
    let with_vim = move_items(
        &shifted(KeyCode::Char('J')),
        2,
        &entries,
        true,
        bounds,
        &POLICY,
    );
    assert_eq!(with_arrow, with_vim);
}

#[test]
fn checked_block_jumps_to_the_top() {
    // Start from the order produced by one group-down move.
    let mut entries = numbered(12);
    check(&mut entries, &[2, 3]);
    let bounds = bounds_of(&entries, &POLICY);
    let (entries, active) =
        move_items(&shifted(KeyCode::Down), 2, &entries, true, bounds, &POLICY).expect("move");
    assert_eq!(order(&entries), [1, 4, 2, 3, 5, 6, 7, 8, 9, 10, 11, 12]);

    let bounds = bounds_of(&entries, &POLICY);
    let (entries, active) = move_items(
        &shifted(KeyCode::PageUp),
        active,
        &entries,
        false,
        bounds,
        &POLICY,
    )
    .expect("jump");

    assert_eq!(order(&entries), [2, 3, 1, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    assert_eq!(active, 1);
}

#[test]
fn checked_block_jumps_to_the_bottom() {
    let mut entries = numbered(12);
    check(&mut entries, &[3, 4]);
    let bounds = bounds_of(&entries, &POLICY);

    let (entries, active) = move_items(
        &shifted(KeyCode::PageDown),
        3,
        &entries,
        true,
        bounds,
        &POLICY,
    )
    .expect("jump");

    assert_eq!(order(&entries), [1, 2, 5, 6, 7, 8, 9, 10, 11, 12, 3, 4]);
    assert_eq!(active, 11);
}

#[test]
fn unchecked_active_item_jumps_alone() {
    let entries = numbered(12);
    let bounds = bounds_of(&entries, &POLICY);

    let (top, top_active) = move_items(
        &shifted(KeyCode::Char('t')),
        2,
        &entries,
        true,
        bounds,
        &POLICY,
    )
    .expect("jump");
    assert_eq!(order(&top), [3, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    assert_eq!(top_active, 0);

    let (bottom, bottom_active) = move_items(
        &shifted(KeyCode::Char('b')),
        2,
        &entries,
        true,
        bounds,
        &POLICY,
    )
    .expect("jump");
    assert_eq!(order(&bottom), [1, 2, 4, 5, 6, 7, 8, 9, 10, 11, 12, 3]);
    assert_eq!(bottom_active, 11);
}

#[test]
fn place_above_with_unchecked_active_item() {
    let mut entries = numbered(12);
    check(&mut entries, &[1, 2]);
    let bounds = bounds_of(&entries, &POLICY);

    let (entries, active) = move_items(
        &common::plain(KeyCode::Char('m')),
        4,
        &entries,
        true,
        bounds,
        &POLICY,
    )
    .expect("place");

    assert_eq!(order(&entries), [3, 4, 1, 2, 5, 6, 7, 8, 9, 10, 11, 12]);
    assert_eq!(active, 4);
}

#[test]
fn place_below_with_unchecked_active_item() {
    let mut entries = numbered(12);
    check(&mut entries, &[1, 2]);
    let bounds = bounds_of(&entries, &POLICY);

    let (entries, active) = move_items(
        &shifted(KeyCode::Char('M')),
        4,
        &entries,
        true,
        bounds,
        &POLICY,
    )
    .expect("place");

    assert_eq!(order(&entries), [3, 4, 5, 1, 2, 6, 7, 8, 9, 10, 11, 12]);
    assert_eq!(active, 2);
}

#[test]
fn place_above_with_checked_active_item() {
    let mut entries = numbered(12);
    check(&mut entries, &[1, 2, 5]);
    let bounds = bounds_of(&entries, &POLICY);

    let (entries, active) = move_items(
        &common::plain(KeyCode::Char('m')),
        4,
        &entries,
        true,
        bounds,
        &POLICY,
    )
    .expect("place");

    assert_eq!(order(&entries), [3, 4, 1, 2, 5, 6, 7, 8, 9, 10, 11, 12]);
    assert_eq!(active, 4);
    assert_eq!(checked_order(&entries), [1, 2, 5]);
}

#[test]
fn place_below_with_checked_active_item() {
    let mut entries = numbered(12);
    check(&mut entries, &[1, 2, 5]);
    let bounds = bounds_of(&entries, &POLICY);

    let (entries, active) = move_items(
        &shifted(KeyCode::Char('M')),
        4,
        &entries,
        true,
        bounds,
        &POLICY,
    )
    .expect("place");

    assert_eq!(order(&entries), [3, 4, 5, 1, 2, 6, 7, 8, 9, 10, 11, 12]);
    assert_eq!(active, 2);
}

#[test]
fn non_consecutive_checked_items_collapse_downward() {
    let mut entries = numbered(12);
    check(&mut entries, &[1, 3, 4, 6]);
    let bounds = bounds_of(&entries, &POLICY);

    let (entries, active) =
        move_items(&shifted(KeyCode::Down), 5, &entries, true, bounds, &POLICY).expect("collapse");

    assert_eq!(order(&entries), [2, 5, 1, 3, 4, 6, 7, 8, 9, 10, 11, 12]);
    assert_eq!(active, 5);
}

#[test]
fn non_consecutive_checked_items_collapse_upward() {
    let mut entries = numbered(12);
    check(&mut entries, &[1, 3, 4, 6]);
    let bounds = bounds_of(&entries, &POLICY);

    let (entries, active) =
        move_items(&shifted(KeyCode::Up), 5, &entries, true, bounds, &POLICY).expect("collapse");

    assert_eq!(order(&entries), [1, 3, 4, 6, 2, 5, 7, 8, 9, 10, 11, 12]);
    assert_eq!(active, 3);
}

#[test]
fn horizontal_keys_move_a_single_checked_item_out_of_a_scattered_set() {
    let mut entries = numbered(12);
    check(&mut entries, &[1, 3]);
    let bounds = bounds_of(&entries, &POLICY);

    // Active on value 3; only it moves, value 1 stays put.
    let (entries, active) = move_items(
        &shifted(KeyCode::Right),
        2,
        &entries,
        true,
        bounds,
        &POLICY,
    )
    .expect("single move");

    assert_eq!(order(&entries), [1, 2, 4, 3, 5, 6, 7, 8, 9, 10, 11, 12]);
    assert_eq!(active, 3);
    assert_eq!(checked_order(&entries), [1, 3]);
}

#[test]
fn single_unchecked_item_swaps_with_its_neighbor() {
    let entries = numbered(4);
    let bounds = bounds_of(&entries, &POLICY);

    let (entries, active) = move_items(
        &shifted(KeyCode::Right),
        1,
        &entries,
        true,
        bounds,
        &POLICY,
    )
    .expect("swap");

    assert_eq!(order(&entries), [1, 3, 2, 4]);
    assert_eq!(active, 2);
}

#[test]
fn single_item_wraps_around_both_ends() {
    let entries = numbered(4);
    let bounds = bounds_of(&entries, &POLICY);

    let (up, up_active) =
        move_items(&shifted(KeyCode::Up), 0, &entries, true, bounds, &POLICY).expect("wrap up");
    assert_eq!(order(&up), [2, 3, 4, 1]);
    assert_eq!(up_active, 3);

    let (down, down_active) =
        move_items(&shifted(KeyCode::Down), 3, &entries, true, bounds, &POLICY).expect("wrap down");
    assert_eq!(order(&down), [4, 1, 2, 3]);
    assert_eq!(down_active, 0);
}

#[test]
fn down_then_up_restores_the_original_order() {
    let entries = numbered(6);
    let bounds = bounds_of(&entries, &POLICY);

    let (moved, active) =
        move_items(&shifted(KeyCode::Down), 2, &entries, true, bounds, &POLICY).expect("down");
    let (restored, active) =
        move_items(&shifted(KeyCode::Up), active, &moved, true, bounds, &POLICY).expect("up");

    assert_eq!(order(&restored), [1, 2, 3, 4, 5, 6]);
    assert_eq!(active, 2);
}

#[test]
fn non_loop_moves_are_blocked_at_the_ends() {
    let entries = numbered(4);
    let bounds = bounds_of(&entries, &POLICY);

    // Unchecked single item at either end.
    assert!(move_items(&shifted(KeyCode::Up), 0, &entries, false, bounds, &POLICY).is_none());
    assert!(move_items(&shifted(KeyCode::Down), 3, &entries, false, bounds, &POLICY).is_none());

    // A checked group whose leading edge touches the top.
    let mut entries = numbered(4);
    check(&mut entries, &[1, 2]);
    assert!(move_items(&shifted(KeyCode::Up), 1, &entries, false, bounds, &POLICY).is_none());

    // A single checked item at the top moving horizontally.
    let mut entries = numbered(4);
    check(&mut entries, &[1]);
    assert!(move_items(&shifted(KeyCode::Left), 0, &entries, false, bounds, &POLICY).is_none());
}

#[test]
fn group_moves_past_a_disabled_entry_without_skipping() {
    use reorder_list_tui::{Choice, normalize_choices};

    // Disabled entry at index 2; the checked pair at 0..=1 shifts past it as
    // a block when moving down.
    let mut entries = normalize_choices(vec![
        Choice::new(1u32),
        Choice::new(2),
        Choice::new(3).disabled(),
        Choice::new(4),
    ]);
    check(&mut entries, &[1, 2]);
    let bounds = bounds_of(&entries, &POLICY);

    let (entries, active) =
        move_items(&shifted(KeyCode::Down), 1, &entries, true, bounds, &POLICY).expect("move");

    assert_eq!(order(&entries), [3, 1, 2, 4]);
    assert_eq!(active, 2);
}
