//! The persisted delete-sketch preference.

use serde::{Deserialize, Serialize};

/// Tri-state preference controlling whether the original sketch is
/// deleted after a binder has been created from it.
///
/// Persisted as one of the tokens `"Ask"`, `"Always"`, `"Never"`.
/// Anything else found in the store is treated as absent, and absent
/// means `Ask` - an unreadable preference must never silently delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeletePreference {
    #[default]
    Ask,
    Always,
    Never,
}

impl DeletePreference {
    /// Parse a stored token. Unknown tokens are `None`, not an error.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "Ask" => Some(Self::Ask),
            "Always" => Some(Self::Always),
            "Never" => Some(Self::Never),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ask => "Ask",
            Self::Always => "Always",
            Self::Never => "Never",
        }
    }
}

impl std::fmt::Display for DeletePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
