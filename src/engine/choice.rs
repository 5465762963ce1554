// src/engine/choice.rs

//! The item model: caller-facing choices, their normalized form, separators,
//! and the list-level policy that parameterizes the two prompt flavors.

use std::fmt;

use crate::engine::error::ConfigError;

/// Disabled state of a choice. A reason string is shown next to the item
/// instead of the generic `(disabled)` label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Disabled {
    #[default]
    No,
    Yes,
    Reason(String),
}

impl Disabled {
    pub fn is_disabled(&self) -> bool {
        !matches!(self, Disabled::No)
    }
}

/// A caller-facing choice. Only `value` is mandatory; everything else is
/// filled in during normalization.
#[derive(Clone, Debug)]
pub struct Choice<V> {
    pub value: V,
    pub name: Option<String>,
    pub description: Option<String>,
    pub short: Option<String>,
    pub disabled: Disabled,
    pub checked: bool,
}

impl<V> Choice<V> {
    pub fn new(value: V) -> Self {
        Self {
            value,
            name: None,
            description: None,
            short: None,
            disabled: Disabled::No,
            checked: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_short(mut self, short: impl Into<String>) -> Self {
        self.short = Some(short.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = Disabled::Yes;
        self
    }

    pub fn disabled_because(mut self, reason: impl Into<String>) -> Self {
        self.disabled = Disabled::Reason(reason.into());
        self
    }

    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }
}

impl From<&str> for Choice<String> {
    fn from(value: &str) -> Self {
        Choice::new(value.to_string())
    }
}

impl From<String> for Choice<String> {
    fn from(value: String) -> Self {
        Choice::new(value)
    }
}

/// A choice after normalization. `name` and `short` are always present and
/// `value` is immutable once constructed; only `checked` changes at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedChoice<V> {
    pub value: V,
    pub name: String,
    pub short: String,
    pub description: Option<String>,
    pub disabled: Disabled,
    pub checked: bool,
}

const SEPARATOR_LINE: &str = "──────────────";

/// One row of the prompt list. Separators carry display text only and are
/// never checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListEntry<V> {
    Choice(NormalizedChoice<V>),
    Separator(String),
}

impl<V> ListEntry<V> {
    pub fn separator() -> Self {
        ListEntry::Separator(SEPARATOR_LINE.to_string())
    }

    pub fn separator_with(text: impl Into<String>) -> Self {
        ListEntry::Separator(text.into())
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, ListEntry::Separator(_))
    }

    pub fn as_choice(&self) -> Option<&NormalizedChoice<V>> {
        match self {
            ListEntry::Choice(choice) => Some(choice),
            ListEntry::Separator(_) => None,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.as_choice().is_some_and(|choice| choice.checked)
    }

    /// Whether the cursor may rest on this entry and selection commands may
    /// target it, under the given policy.
    pub fn is_selectable(&self, policy: &ListPolicy) -> bool {
        match self {
            ListEntry::Separator(_) => policy.separators_selectable,
            ListEntry::Choice(choice) => {
                !(policy.honor_disabled && choice.disabled.is_disabled())
            }
        }
    }

    /// Flips the checked flag. Separators stay unchecked.
    pub fn toggle(&mut self) {
        if let ListEntry::Choice(choice) = self {
            choice.checked = !choice.checked;
        }
    }

    pub fn set_checked(&mut self, checked: bool) {
        if let ListEntry::Choice(choice) = self {
            choice.checked = checked;
        }
    }
}

/// Which values are emitted when the prompt completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmitMode {
    /// Every choice value, in the final list order (the reorder flavor).
    #[default]
    AllItems,
    /// Only checked values, in the final list order (the checkbox flavor).
    CheckedOnly,
}

/// Parameterizes the engine instead of duplicating it per prompt flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListPolicy {
    pub emit: EmitMode,
    /// Disabled choices are skipped by the cursor and selection commands.
    pub honor_disabled: bool,
    /// Separators can hold the cursor and be reordered like any other entry.
    pub separators_selectable: bool,
}

impl Default for ListPolicy {
    fn default() -> Self {
        Self {
            emit: EmitMode::AllItems,
            honor_disabled: true,
            separators_selectable: true,
        }
    }
}

impl ListPolicy {
    pub fn checkbox() -> Self {
        Self {
            emit: EmitMode::CheckedOnly,
            honor_disabled: true,
            separators_selectable: false,
        }
    }
}

/// Indices of the first and last selectable entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub first: usize,
    pub last: usize,
}

/// Scans for the selectable bounds. `None` means the invariant "at least one
/// selectable entry" does not hold.
pub fn selectable_bounds<V>(entries: &[ListEntry<V>], policy: &ListPolicy) -> Option<Bounds> {
    let first = entries.iter().position(|entry| entry.is_selectable(policy))?;
    let last = entries.iter().rposition(|entry| entry.is_selectable(policy))?;
    Some(Bounds { first, last })
}

/// Validates the list-level invariants at construction time.
pub fn validate_entries<V>(
    entries: &[ListEntry<V>],
    policy: &ListPolicy,
) -> Result<Bounds, ConfigError> {
    if entries.is_empty() {
        return Err(ConfigError::EmptyChoices);
    }
    selectable_bounds(entries, policy).ok_or(ConfigError::NoSelectable)
}

/// Turns caller-supplied choices into list entries, defaulting `name` to the
/// value's display form and `short` to `name`.
pub fn normalize_choices<V: fmt::Display>(choices: Vec<Choice<V>>) -> Vec<ListEntry<V>> {
    choices.into_iter().map(normalize_choice).collect()
}

pub fn normalize_choice<V: fmt::Display>(choice: Choice<V>) -> ListEntry<V> {
    let name = choice.name.unwrap_or_else(|| choice.value.to_string());
    let short = choice.short.unwrap_or_else(|| name.clone());
    ListEntry::Choice(NormalizedChoice {
        value: choice.value,
        name,
        short,
        description: choice.description,
        disabled: choice.disabled,
        checked: choice.checked,
    })
}
