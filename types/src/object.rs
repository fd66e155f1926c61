//! Document object identity: names, labels, and type discriminators.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Suffix appended to a sketch's label to derive its binder's label.
const BINDER_LABEL_SUFFIX: &str = "_ShapeBinder";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("object name must not be empty")]
pub struct EmptyNameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("object label must not be empty")]
pub struct EmptyLabelError;

/// Unique identifier of a document object.
///
/// Names identify objects for the lifetime of a run; the document owns
/// the name-to-object mapping. Guaranteed non-empty (after trimming).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectName(String);

impl ObjectName {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyNameError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptyNameError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ObjectName {
    type Error = EmptyNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ObjectName {
    type Error = EmptyNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ObjectName> for String {
    fn from(value: ObjectName) -> Self {
        value.0
    }
}

impl AsRef<str> for ObjectName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ObjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Display label of a document object.
///
/// Labels are what the user sees; they are not required to be unique.
/// Guaranteed non-empty (after trimming).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label(String);

impl Label {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyLabelError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptyLabelError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the label for a shape binder bound to an object with this label.
    #[must_use]
    pub fn binder_label(&self) -> Label {
        let mut derived = self.0.clone();
        derived.push_str(BINDER_LABEL_SUFFIX);
        Label(derived)
    }
}

impl TryFrom<String> for Label {
    type Error = EmptyLabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Label {
    type Error = EmptyLabelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Label> for String {
    fn from(value: Label) -> Self {
        value.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Type discriminator of a document object.
///
/// This is a real sum type, not a stringly-typed tag. `Feature` covers
/// every host object kind the workflow does not care about (pads,
/// datums, origins, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Sketch,
    Body,
    ShapeBinder,
    Feature,
}

impl ObjectKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sketch => "sketch",
            Self::Body => "body",
            Self::ShapeBinder => "shape binder",
            Self::Feature => "feature",
        }
    }

    #[must_use]
    pub const fn is_sketch(self) -> bool {
        matches!(self, Self::Sketch)
    }

    #[must_use]
    pub const fn is_body(self) -> bool {
        matches!(self, Self::Body)
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
