//! Binder creation: the one mutation before the deletion decision.

use thiserror::Error;
use tracing::debug;

use sketchbind_types::ObjectName;

use crate::document::{Document, DocumentError, ObjectInfo, RecomputeError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    /// The binder exists at this point; it is left in the document for
    /// the host/user to deal with (no rollback, no retry).
    #[error(transparent)]
    Recompute(#[from] RecomputeError),
}

/// Create a shape binder for `sketch` inside `body`, then recompute the
/// document exactly once.
///
/// The binder's label is derived from the sketch's label with the
/// `_ShapeBinder` suffix. On success the document contains a new
/// independent object whose shape was captured from the sketch at
/// creation time.
pub fn create_binder(
    doc: &mut dyn Document,
    body: &ObjectName,
    sketch: &ObjectName,
) -> Result<ObjectInfo, BindError> {
    let sketch_info = doc
        .info(sketch)
        .ok_or_else(|| DocumentError::UnknownObject(sketch.clone()))?;

    let binder = doc.create_shape_binder(body, sketch, sketch_info.label.binder_label())?;
    doc.recompute()?;

    debug!(binder = %binder.name, label = %binder.label, "Shape binder created and recomputed");
    Ok(binder)
}
