//! Prompt composition
//!
//! Builds the system/user instruction pair for each flow from embedded
//! Handlebars templates.

mod composer;
mod embedded;

pub use composer::{DEFAULT_STYLE, PromptComposer, PromptError, PromptPair};
