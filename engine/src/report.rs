//! User-facing run messages.
//!
//! Reports are observational only: nothing reads them back, and no
//! control flow depends on them. The closed enum keeps the message
//! catalog in one place.

use std::io::{self, Write};

use tracing::{info, warn};

use sketchbind_types::Label;

/// Informational outcome messages emitted at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    BinderCreated { label: Label },
    SketchDeleted { label: Label },
    SketchKept { label: Label },
}

impl Report {
    #[must_use]
    pub fn format(&self) -> String {
        match self {
            Self::BinderCreated { label } => {
                format!("Created shape binder \"{label}\".")
            }
            Self::SketchDeleted { label } => {
                format!("Deleted original sketch \"{label}\".")
            }
            Self::SketchKept { label } => {
                format!("Kept original sketch \"{label}\".")
            }
        }
    }
}

/// User-facing console/output channel of the host.
///
/// Errors are single-line, fatal to the run but not to the host.
pub trait Reporter {
    fn error(&mut self, message: &str);
    fn info(&mut self, message: &str);
}

/// Writes messages to stderr/stdout and mirrors them to tracing.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn error(&mut self, message: &str) {
        warn!(message, "run failed");
        let _ = writeln!(io::stderr(), "{message}");
    }

    fn info(&mut self, message: &str) {
        info!(message);
        let _ = writeln!(io::stdout(), "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_formats_name_the_label() {
        let label = Label::new("Profile").unwrap();
        assert_eq!(
            Report::BinderCreated {
                label: label.binder_label(),
            }
            .format(),
            "Created shape binder \"Profile_ShapeBinder\"."
        );
        assert_eq!(
            Report::SketchDeleted {
                label: label.clone(),
            }
            .format(),
            "Deleted original sketch \"Profile\"."
        );
        assert_eq!(
            Report::SketchKept { label }.format(),
            "Kept original sketch \"Profile\"."
        );
    }
}
