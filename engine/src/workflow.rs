//! The end-to-end conversion run.
//!
//! Locate the selected sketch, create its shape binder, recompute,
//! then apply the deletion decision. Every step is attempted exactly
//! once; every failure is reported on the error channel and aborts the
//! run where it stands.

use thiserror::Error;
use tracing::debug;

use sketchbind_config::{PreferenceStore, StoreError};
use sketchbind_core::{
    BindError, Document, DocumentError, LocateError, ObjectInfo, create_binder, locate_sketch,
};
use sketchbind_types::{DeletePrompt, Label};

use crate::decision::{self, SketchAction};
use crate::dialog::{ConfirmDialog, DialogError};
use crate::report::{Report, Reporter};

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Locate(#[from] LocateError),
    #[error(transparent)]
    Bind(#[from] BindError),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Dialog(#[from] DialogError),
}

/// What happened to the original sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchFate {
    Deleted,
    Kept,
}

/// Successful run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub binder: ObjectInfo,
    pub sketch_label: Label,
    pub fate: SketchFate,
}

fn report_failure<E>(reporter: &mut dyn Reporter, err: E) -> WorkflowError
where
    E: std::fmt::Display + Into<WorkflowError>,
{
    reporter.error(&err.to_string());
    err.into()
}

/// Convert the first selected sketch into a shape binder, then delete
/// or keep the sketch according to the persisted preference, prompting
/// through `dialog` when the preference is Ask.
pub fn run_conversion(
    doc: &mut dyn Document,
    store: &mut dyn PreferenceStore,
    dialog: &mut dyn ConfirmDialog,
    reporter: &mut dyn Reporter,
) -> Result<RunOutcome, WorkflowError> {
    let located = locate_sketch(doc).map_err(|err| report_failure(reporter, err))?;
    let sketch_name = located.sketch.name.clone();
    let sketch_label = located.sketch.label.clone();

    // After this point a binder exists in the document. A recompute
    // failure aborts here and leaves it in place; the deletion decision
    // is never evaluated.
    let binder = create_binder(doc, &located.body, &sketch_name)
        .map_err(|err| report_failure(reporter, err))?;

    let preference = store.get();
    let decision = match decision::settled(preference) {
        Some(decision) => {
            debug!(%preference, "Preference settles the deletion decision without prompting");
            decision
        }
        None => {
            let prompt = DeletePrompt::new(sketch_label.clone());
            let response = dialog
                .confirm(&prompt)
                .map_err(|err| report_failure(reporter, err))?;
            debug!(response = %response, "User answered the delete prompt");
            decision::from_response(response)
        }
    };

    // Persist before deleting: a store failure must abort ahead of the
    // destructive step.
    if let Some(persist) = decision.persist {
        store
            .set(persist)
            .map_err(|err| report_failure(reporter, err))?;
    }

    let fate = match decision.action {
        SketchAction::Delete => {
            doc.remove(&sketch_name)
                .map_err(|err| report_failure(reporter, err))?;
            reporter.info(
                &Report::SketchDeleted {
                    label: sketch_label.clone(),
                }
                .format(),
            );
            SketchFate::Deleted
        }
        SketchAction::Keep => {
            reporter.info(
                &Report::SketchKept {
                    label: sketch_label.clone(),
                }
                .format(),
            );
            SketchFate::Kept
        }
    };
    reporter.info(
        &Report::BinderCreated {
            label: binder.label.clone(),
        }
        .format(),
    );

    Ok(RunOutcome {
        binder,
        sketch_label,
        fate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchbind_config::MemoryPreferenceStore;
    use sketchbind_core::MemoryDocument;
    use sketchbind_types::{DeletePreference, ObjectKind, ObjectName, PromptResponse};

    struct ScriptedDialog(Vec<PromptResponse>);

    impl ConfirmDialog for ScriptedDialog {
        fn confirm(&mut self, _prompt: &DeletePrompt) -> Result<PromptResponse, DialogError> {
            Ok(self.0.remove(0))
        }
    }

    struct UnusedDialog;

    impl ConfirmDialog for UnusedDialog {
        fn confirm(&mut self, prompt: &DeletePrompt) -> Result<PromptResponse, DialogError> {
            panic!("no prompt expected for {:?}", prompt.sketch_label());
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        errors: Vec<String>,
        infos: Vec<String>,
    }

    impl Reporter for RecordingReporter {
        fn error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }

        fn info(&mut self, message: &str) {
            self.infos.push(message.to_string());
        }
    }

    fn name(raw: &str) -> ObjectName {
        ObjectName::new(raw).unwrap()
    }

    fn label(raw: &str) -> Label {
        Label::new(raw).unwrap()
    }

    fn selected_sketch_doc() -> MemoryDocument {
        let mut doc = MemoryDocument::new();
        doc.add_object(name("Body"), label("Body"), ObjectKind::Body)
            .unwrap();
        doc.add_object(name("Sketch"), label("Profile"), ObjectKind::Sketch)
            .unwrap();
        doc.add_to_body(&name("Body"), &name("Sketch")).unwrap();
        doc.set_selection(vec![name("Sketch")]).unwrap();
        doc
    }

    #[test]
    fn validation_failure_is_reported_and_creates_nothing() {
        let mut doc = MemoryDocument::new();
        let mut store = MemoryPreferenceStore::new();
        let mut reporter = RecordingReporter::default();

        let err = run_conversion(&mut doc, &mut store, &mut UnusedDialog, &mut reporter)
            .unwrap_err();

        assert!(matches!(
            err,
            WorkflowError::Locate(LocateError::NoSelection)
        ));
        assert!(doc.is_empty());
        assert_eq!(reporter.errors.len(), 1);
        assert!(reporter.infos.is_empty());
    }

    #[test]
    fn messages_report_fate_then_binder() {
        let mut doc = selected_sketch_doc();
        let mut store = MemoryPreferenceStore::new();
        let mut dialog = ScriptedDialog(vec![PromptResponse::Yes]);
        let mut reporter = RecordingReporter::default();

        let outcome = run_conversion(&mut doc, &mut store, &mut dialog, &mut reporter).unwrap();

        assert_eq!(outcome.fate, SketchFate::Deleted);
        assert_eq!(
            reporter.infos,
            vec![
                "Deleted original sketch \"Profile\".".to_string(),
                "Created shape binder \"Profile_ShapeBinder\".".to_string(),
            ]
        );
        assert_eq!(store.get(), DeletePreference::Ask);
    }
}
