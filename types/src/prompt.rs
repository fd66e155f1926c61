//! The delete-confirmation prompt and its four responses.

use crate::object::Label;

/// One of the four responses the confirmation surface may return.
///
/// The surface must block until exactly one of these is chosen. There
/// is deliberately no cancel/escape variant: an escape hatch that maps
/// to none of the four would reintroduce an undefined transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptResponse {
    /// Delete this sketch and every future one without asking.
    Always,
    /// Delete this sketch only.
    Yes,
    /// Keep this sketch only.
    No,
    /// Keep this sketch and every future one without asking.
    Never,
}

impl PromptResponse {
    pub const ALL: [PromptResponse; 4] = [Self::Always, Self::Yes, Self::No, Self::Never];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "Always",
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Never => "Never",
        }
    }

    /// Parse interactive input, case-insensitively. `a` and `y` are
    /// accepted as initials; `n` means No, so Never must be spelled out.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "always" | "a" => Some(Self::Always),
            "yes" | "y" => Some(Self::Yes),
            "no" | "n" => Some(Self::No),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

impl std::fmt::Display for PromptResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload handed to the confirmation surface when the preference is Ask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    sketch_label: Label,
}

impl DeletePrompt {
    #[must_use]
    pub fn new(sketch_label: Label) -> Self {
        Self { sketch_label }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        "Delete Original Sketch"
    }

    #[must_use]
    pub fn body(&self) -> String {
        format!(
            "Delete the original sketch \"{}\"? A shape binder has been created from it.",
            self.sketch_label
        )
    }

    #[must_use]
    pub fn sketch_label(&self) -> &Label {
        &self.sketch_label
    }
}
