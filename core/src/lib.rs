//! Document model and document-facing operations for sketchbind.
//!
//! The host's document is abstracted behind the [`Document`] trait so
//! the workflow can run against a real host session or against the
//! in-memory [`MemoryDocument`] in tests. The two operations built on
//! top of it are [`locate_sketch`] (selection validation and container
//! resolution) and [`create_binder`] (binder creation plus the one
//! recompute of the run).

mod bind;
mod document;
mod locate;

pub use bind::{BindError, create_binder};
pub use document::{Document, DocumentError, MemoryDocument, ObjectInfo, RecomputeError};
pub use locate::{Located, LocateError, locate_sketch};
