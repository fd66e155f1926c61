//! Core domain types for sketchbind.
//!
//! This crate contains pure domain types with no IO and no host coupling.
//! Everything here can be used from any layer of the workflow.

mod object;
mod preference;
mod prompt;

pub use object::{EmptyLabelError, EmptyNameError, Label, ObjectKind, ObjectName};
pub use preference::DeletePreference;
pub use prompt::{DeletePrompt, PromptResponse};
