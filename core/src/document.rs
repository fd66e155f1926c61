//! The document seam: what the workflow needs from the host.

use thiserror::Error;
use tracing::debug;

use sketchbind_types::{Label, ObjectKind, ObjectName};

/// Prefix for minted binder object names. The label is derived from the
/// sketch; the unique name is the document's to choose.
const BINDER_NAME_PREFIX: &str = "ShapeBinder";

/// Identity and kind of one document object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectInfo {
    pub name: ObjectName,
    pub label: Label,
    pub kind: ObjectKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("document already contains an object named {0}")]
    DuplicateName(ObjectName),
    #[error("document contains no object named {0}")]
    UnknownObject(ObjectName),
    #[error("object {0} is not a body")]
    NotABody(ObjectName),
    #[error("shape binder support {0} is not a sketch")]
    SupportNotASketch(ObjectName),
}

/// Document-consistency check failure, surfaced by the host after a
/// mutation (broken geometry, dependency cycle, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("document recompute failed: {reason}")]
pub struct RecomputeError {
    reason: String,
}

impl RecomputeError {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Host document capability.
///
/// Invariant: every name in `selection` resolves through `info` for as
/// long as the document is exclusively owned by the run. The in-list is
/// a weak back-reference query computed by the document; objects never
/// own their referrers.
pub trait Document {
    /// Ordered selection. Only the first element is acted on.
    fn selection(&self) -> &[ObjectName];

    fn info(&self, name: &ObjectName) -> Option<ObjectInfo>;

    /// Objects that reference `name`, in document order.
    fn in_list(&self, name: &ObjectName) -> Vec<ObjectName>;

    /// Mint a shape binder as a child of `body`, with its `Support`
    /// reference set to `support` and the given display label.
    fn create_shape_binder(
        &mut self,
        body: &ObjectName,
        support: &ObjectName,
        label: Label,
    ) -> Result<ObjectInfo, DocumentError>;

    /// Resolve and validate all dependent geometry.
    fn recompute(&mut self) -> Result<(), RecomputeError>;

    /// Remove an object by its unique name.
    fn remove(&mut self, name: &ObjectName) -> Result<(), DocumentError>;
}

#[derive(Debug, Clone)]
struct StoredObject {
    info: ObjectInfo,
    /// The one object this object derives from, if any.
    support: Option<ObjectName>,
    /// Children, for bodies.
    group: Vec<ObjectName>,
}

/// In-memory reference document.
///
/// Objects are kept in insertion order, which is the order every query
/// (including the in-list) reports them in.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    objects: Vec<StoredObject>,
    selection: Vec<ObjectName>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn index_of(&self, name: &ObjectName) -> Option<usize> {
        self.objects.iter().position(|obj| obj.info.name == *name)
    }

    fn stored(&self, name: &ObjectName) -> Option<&StoredObject> {
        self.index_of(name).map(|idx| &self.objects[idx])
    }

    pub fn add_object(
        &mut self,
        name: ObjectName,
        label: Label,
        kind: ObjectKind,
    ) -> Result<(), DocumentError> {
        if self.index_of(&name).is_some() {
            return Err(DocumentError::DuplicateName(name));
        }
        self.objects.push(StoredObject {
            info: ObjectInfo { name, label, kind },
            support: None,
            group: Vec::new(),
        });
        Ok(())
    }

    /// Put `child` into `body`'s group, which also puts `body` into
    /// `child`'s in-list.
    pub fn add_to_body(
        &mut self,
        body: &ObjectName,
        child: &ObjectName,
    ) -> Result<(), DocumentError> {
        if self.index_of(child).is_none() {
            return Err(DocumentError::UnknownObject(child.clone()));
        }
        let body_idx = self
            .index_of(body)
            .ok_or_else(|| DocumentError::UnknownObject(body.clone()))?;
        if !self.objects[body_idx].info.kind.is_body() {
            return Err(DocumentError::NotABody(body.clone()));
        }
        if !self.objects[body_idx].group.contains(child) {
            self.objects[body_idx].group.push(child.clone());
        }
        Ok(())
    }

    /// Replace the selection. Every name must resolve.
    pub fn set_selection(&mut self, names: Vec<ObjectName>) -> Result<(), DocumentError> {
        if let Some(missing) = names.iter().find(|name| self.index_of(name).is_none()) {
            return Err(DocumentError::UnknownObject(missing.clone()));
        }
        self.selection = names;
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, name: &ObjectName) -> bool {
        self.index_of(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The `Support` reference of an object, if it has one.
    #[must_use]
    pub fn support_of(&self, name: &ObjectName) -> Option<&ObjectName> {
        self.stored(name).and_then(|obj| obj.support.as_ref())
    }

    /// Children of a body, in insertion order.
    #[must_use]
    pub fn body_children(&self, body: &ObjectName) -> Option<&[ObjectName]> {
        self.stored(body)
            .filter(|obj| obj.info.kind.is_body())
            .map(|obj| obj.group.as_slice())
    }

    fn mint_binder_name(&self) -> ObjectName {
        let mut candidate = BINDER_NAME_PREFIX.to_string();
        let mut seq = 0u32;
        loop {
            if !self.objects.iter().any(|obj| obj.info.name.as_str() == candidate) {
                return ObjectName::new(candidate).expect("binder name prefix must be non-empty");
            }
            seq += 1;
            candidate = format!("{BINDER_NAME_PREFIX}{seq:03}");
        }
    }
}

impl Document for MemoryDocument {
    fn selection(&self) -> &[ObjectName] {
        &self.selection
    }

    fn info(&self, name: &ObjectName) -> Option<ObjectInfo> {
        self.stored(name).map(|obj| obj.info.clone())
    }

    fn in_list(&self, name: &ObjectName) -> Vec<ObjectName> {
        self.objects
            .iter()
            .filter(|obj| {
                obj.support.as_ref() == Some(name) || obj.group.contains(name)
            })
            .map(|obj| obj.info.name.clone())
            .collect()
    }

    fn create_shape_binder(
        &mut self,
        body: &ObjectName,
        support: &ObjectName,
        label: Label,
    ) -> Result<ObjectInfo, DocumentError> {
        let body_idx = self
            .index_of(body)
            .ok_or_else(|| DocumentError::UnknownObject(body.clone()))?;
        if !self.objects[body_idx].info.kind.is_body() {
            return Err(DocumentError::NotABody(body.clone()));
        }
        let support_kind = self
            .stored(support)
            .ok_or_else(|| DocumentError::UnknownObject(support.clone()))?
            .info
            .kind;
        if !support_kind.is_sketch() {
            return Err(DocumentError::SupportNotASketch(support.clone()));
        }

        let name = self.mint_binder_name();
        let info = ObjectInfo {
            name: name.clone(),
            label,
            kind: ObjectKind::ShapeBinder,
        };
        self.objects.push(StoredObject {
            info: info.clone(),
            support: Some(support.clone()),
            group: Vec::new(),
        });
        self.objects[body_idx].group.push(name.clone());
        debug!(binder = %name, body = %body, support = %support, "Created shape binder");
        Ok(info)
    }

    fn recompute(&mut self) -> Result<(), RecomputeError> {
        for obj in &self.objects {
            if let Some(support) = &obj.support {
                let Some(target) = self.stored(support) else {
                    return Err(RecomputeError::new(format!(
                        "object {} references missing support {support}",
                        obj.info.name
                    )));
                };
                if obj.info.kind == ObjectKind::ShapeBinder && !target.info.kind.is_sketch() {
                    return Err(RecomputeError::new(format!(
                        "shape binder {} has non-sketch support {support}",
                        obj.info.name
                    )));
                }
            }
            if let Some(missing) = obj.group.iter().find(|child| self.stored(child).is_none()) {
                return Err(RecomputeError::new(format!(
                    "body {} groups missing object {missing}",
                    obj.info.name
                )));
            }
        }
        debug!(objects = self.objects.len(), "Recomputed document");
        Ok(())
    }

    fn remove(&mut self, name: &ObjectName) -> Result<(), DocumentError> {
        let idx = self
            .index_of(name)
            .ok_or_else(|| DocumentError::UnknownObject(name.clone()))?;
        self.objects.remove(idx);
        for obj in &mut self.objects {
            obj.group.retain(|child| child != name);
            if obj.support.as_ref() == Some(name) {
                // The binder keeps its captured shape; the reference is
                // simply dropped with the object it pointed at.
                debug!(object = %obj.info.name, removed = %name, "Detached support reference");
                obj.support = None;
            }
        }
        self.selection.retain(|selected| selected != name);
        debug!(removed = %name, "Removed object from document");
        Ok(())
    }
}
