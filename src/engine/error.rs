// src/engine/error.rs

use thiserror::Error;

/// Fatal configuration errors raised when a prompt is constructed. These are
/// distinct from per-submission validation messages, which are plain strings
/// shown inline while the prompt stays interactive.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("choices list must contain at least one entry")]
    EmptyChoices,

    #[error("no selectable choices; every entry is disabled or a separator")]
    NoSelectable,
}
