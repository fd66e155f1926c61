//! Run orchestration for sketchbind.
//!
//! This crate owns the deletion decision state machine and the single
//! entry point, [`run_conversion`], which turns the first selected
//! sketch into a shape binder and then applies the persisted preference
//! to decide the sketch's fate. The confirmation surface and the
//! user-facing message channel are injected capabilities.

mod decision;
mod dialog;
mod report;
mod workflow;

pub use decision::{Decision, SketchAction, from_response, settled};
pub use dialog::{ConfirmDialog, ConsoleDialog, DialogError};
pub use report::{ConsoleReporter, Report, Reporter};
pub use workflow::{RunOutcome, SketchFate, WorkflowError, run_conversion};

// Re-export the vocabulary callers need to drive a run.
pub use sketchbind_config::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, StoreError,
};
pub use sketchbind_core::{
    BindError, Document, DocumentError, LocateError, MemoryDocument, ObjectInfo, RecomputeError,
};
pub use sketchbind_types::{
    DeletePreference, DeletePrompt, Label, ObjectKind, ObjectName, PromptResponse,
};
