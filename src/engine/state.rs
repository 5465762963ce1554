// src/engine/state.rs

//! Prompt controller: an explicit state object plus a reducer that interprets
//! one key press at a time. Pure with respect to the terminal, so the whole
//! state machine is testable without a render loop.

use log::debug;

use crate::engine::choice::{
    Bounds, EmitMode, ListEntry, NormalizedChoice, selectable_bounds, validate_entries,
};
use crate::engine::config::PromptConfig;
use crate::engine::error::ConfigError;
use crate::engine::key::KeyPress;
use crate::engine::navigate::get_next;
use crate::engine::reorder::move_items;
use crate::engine::select;

const REQUIRED_MESSAGE: &str = "At least one choice must be selected";
const DEFAULT_INVALID_MESSAGE: &str = "You must select a valid value";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Done,
}

/// Outcome of handling one key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step<V> {
    Continue,
    Submitted(Vec<V>),
}

#[derive(Clone, Debug)]
pub struct PromptState<V: Clone> {
    pub entries: Vec<ListEntry<V>>,
    pub active: usize,
    pub status: Status,
    pub error: Option<String>,
    pub show_help: bool,
}

impl<V: Clone> PromptState<V> {
    /// Seeds the state from a configuration, rejecting an empty list or a
    /// list without a single selectable entry.
    pub fn new(config: &PromptConfig<V>) -> Result<Self, ConfigError> {
        let bounds = validate_entries(&config.entries, &config.policy)?;
        Ok(Self {
            entries: config.entries.clone(),
            active: bounds.first,
            status: Status::Idle,
            error: None,
            show_help: true,
        })
    }

    pub fn active_entry(&self) -> &ListEntry<V> {
        &self.entries[self.active]
    }

    pub fn checked_choices(&self) -> Vec<&NormalizedChoice<V>> {
        self.entries
            .iter()
            .filter(|entry| entry.is_checked())
            .filter_map(|entry| entry.as_choice())
            .collect()
    }

    /// Interprets one key press against the current state. Exactly one event
    /// is processed to completion before the next is accepted; every list
    /// mutation happens here.
    pub fn handle_key(&mut self, key: &KeyPress, config: &PromptConfig<V>) -> Step<V> {
        if self.status == Status::Done {
            return Step::Continue;
        }

        // Any key press except the help key dismisses the help tip.
        self.show_help = false;
        if key.is_help() {
            self.show_help = true;
            return Step::Continue;
        }

        if key.is_enter() {
            return self.confirm(config);
        }

        let Some(bounds) = selectable_bounds(&self.entries, &config.policy) else {
            // Construction guaranteed a selectable entry and every move is a
            // permutation, so this cannot happen.
            return Step::Continue;
        };

        if key.is_directional() || key.is_top_or_bottom() || key.is_place_command() {
            self.error = None;
            if self.movement_allowed(key, bounds, config) {
                if key.is_group_modified() || key.is_place_command() {
                    if let Some((entries, active)) = move_items(
                        key,
                        self.active,
                        &self.entries,
                        config.looping,
                        bounds,
                        &config.policy,
                    ) {
                        self.entries = entries;
                        self.active = active;
                    }
                } else {
                    self.active = get_next(key, self.active, &self.entries, false, &config.policy);
                }
            }
            return Step::Continue;
        }

        if key.is_space() {
            self.error = None;
            select::toggle_at(&mut self.entries, self.active, &config.policy);
            return Step::Continue;
        }

        if key.is_toggle_all() {
            self.error = None;
            select::toggle_all(&mut self.entries, &config.policy);
            return Step::Continue;
        }

        if key.is_invert() {
            self.error = None;
            select::invert(&mut self.entries, &config.policy);
            return Step::Continue;
        }

        if let Some(digit) = key.digit() {
            let position = digit - 1;
            if position < self.entries.len()
                && self.entries[position].is_selectable(&config.policy)
            {
                self.error = None;
                self.active = position;
                select::toggle_at(&mut self.entries, position, &config.policy);
            }
            return Step::Continue;
        }

        Step::Continue
    }

    /// The non-loop bounds gate applied before dispatching a directional key.
    /// Edge jumps and the place commands are always dispatched; the engines
    /// handle their own boundary cases.
    fn movement_allowed(&self, key: &KeyPress, bounds: Bounds, config: &PromptConfig<V>) -> bool {
        config.looping
            || key.is_top_or_bottom()
            || key.is_place_command()
            || (key.is_up_or_left() && self.active != bounds.first)
            || (key.is_down_or_right() && self.active != bounds.last)
    }

    fn confirm(&mut self, config: &PromptConfig<V>) -> Step<V> {
        let checked = self.checked_choices();
        if config.required && checked.is_empty() {
            self.error = Some(REQUIRED_MESSAGE.to_string());
            return Step::Continue;
        }

        if let Some(validate) = &config.validate {
            if let Err(message) = validate(&checked) {
                self.error = Some(if message.is_empty() {
                    DEFAULT_INVALID_MESSAGE.to_string()
                } else {
                    message
                });
                return Step::Continue;
            }
        }

        let values: Vec<V> = match config.policy.emit {
            EmitMode::AllItems => self
                .entries
                .iter()
                .filter_map(|entry| entry.as_choice())
                .map(|choice| choice.value.clone())
                .collect(),
            EmitMode::CheckedOnly => checked.iter().map(|choice| choice.value.clone()).collect(),
        };
        self.status = Status::Done;
        self.error = None;
        debug!("prompt confirmed with {} value(s)", values.len());
        Step::Submitted(values)
    }
}
