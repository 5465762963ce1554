// src/engine/config.rs

use std::fmt;
use std::rc::Rc;

use derive_builder::Builder;

use crate::engine::choice::{ListEntry, ListPolicy, NormalizedChoice};

/// Per-submission validation callback. Runs against the checked entries when
/// the user confirms; an `Err` message keeps the prompt interactive.
pub type Validator<V> = Rc<dyn Fn(&[&NormalizedChoice<V>]) -> Result<(), String>>;

/// Help tip behavior. `Auto` generates the key-binding listing, `Custom`
/// replaces it, `Hidden` suppresses it entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Instructions {
    #[default]
    Auto,
    Hidden,
    Custom(String),
}

#[derive(Clone, Builder)]
#[builder(setter(into), build_fn(name = "build_internal"))]
pub struct PromptConfig<V: Clone> {
    pub message: String,

    /// Normalized entries in their initial, caller-supplied order.
    pub entries: Vec<ListEntry<V>>,

    /// Viewport height in rows for the windowed renderer.
    #[builder(default = "7")]
    pub page_size: usize,

    /// Whether navigation and moves wrap past the list ends.
    #[builder(default = "true")]
    pub looping: bool,

    /// Reject confirmation while nothing is checked.
    #[builder(default)]
    pub required: bool,

    #[builder(default)]
    pub instructions: Instructions,

    #[builder(default)]
    pub policy: ListPolicy,

    #[builder(default, setter(strip_option))]
    pub validate: Option<Validator<V>>,
}

impl<V: Clone> PromptConfigBuilder<V> {
    pub fn build(&self) -> Result<PromptConfig<V>, PromptConfigBuilderError> {
        self.build_internal()
    }
}

impl<V: Clone + fmt::Debug> fmt::Debug for PromptConfig<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptConfig")
            .field("message", &self.message)
            .field("entries", &self.entries)
            .field("page_size", &self.page_size)
            .field("looping", &self.looping)
            .field("required", &self.required)
            .field("instructions", &self.instructions)
            .field("policy", &self.policy)
            .field("validate", &self.validate.as_ref().map(|_| "<callback>"))
            .finish()
    }
}
