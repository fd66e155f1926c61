//! Selection validation and container resolution.

use thiserror::Error;
use tracing::debug;

use sketchbind_types::{Label, ObjectKind, ObjectName};

use crate::document::{Document, ObjectInfo};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocateError {
    #[error("nothing is selected; select a sketch first")]
    NoSelection,
    #[error("selected object \"{label}\" is a {kind}, not a sketch")]
    NotASketch { label: Label, kind: ObjectKind },
    #[error("sketch \"{label}\" is not inside a body")]
    NoParentBody { label: Label },
    /// Host invariant violation: the selection names an object the
    /// document no longer contains.
    #[error("selection names a missing object {name}")]
    StaleSelection { name: ObjectName },
}

/// A validated sketch together with its owning body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    pub sketch: ObjectInfo,
    pub body: ObjectName,
}

/// Resolve the first selected object to a sketch and its owning body.
///
/// The body is found by scanning the sketch's in-list (the objects that
/// reference it) for the first body. Pure lookup; nothing is mutated on
/// any path.
pub fn locate_sketch(doc: &dyn Document) -> Result<Located, LocateError> {
    let first = doc
        .selection()
        .first()
        .cloned()
        .ok_or(LocateError::NoSelection)?;
    let sketch = doc
        .info(&first)
        .ok_or(LocateError::StaleSelection { name: first })?;

    if !sketch.kind.is_sketch() {
        return Err(LocateError::NotASketch {
            label: sketch.label,
            kind: sketch.kind,
        });
    }

    let body = doc
        .in_list(&sketch.name)
        .into_iter()
        .find(|referrer| doc.info(referrer).is_some_and(|info| info.kind.is_body()));

    match body {
        Some(body) => {
            debug!(sketch = %sketch.name, body = %body, "Resolved sketch and owning body");
            Ok(Located { sketch, body })
        }
        None => Err(LocateError::NoParentBody {
            label: sketch.label,
        }),
    }
}
