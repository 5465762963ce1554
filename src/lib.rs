// src/lib.rs

//! An interactive terminal prompt for reordering and multi-selecting list
//! items. The `engine` module is the pure state machine (navigation,
//! reordering, selection, confirmation); `ui` wraps it in a crossterm +
//! ratatui event loop.

pub mod engine;
pub mod ui;

// Re-export a narrow, testable API surface
pub use engine::{
    choice::{
        Bounds, Choice, Disabled, EmitMode, ListEntry, ListPolicy, NormalizedChoice,
        normalize_choices,
    },
    config::{Instructions, PromptConfig, PromptConfigBuilder, Validator},
    error::ConfigError,
    key::KeyPress,
    state::{PromptState, Status, Step},
};
pub use ui::prompt::{PromptOutcome, run_prompt};
