//! The deletion decision state machine.
//!
//! Two pure functions cover the whole transition table: [`settled`]
//! handles the Always/Never rows that never prompt, [`from_response`]
//! handles the four Ask rows. Yes and No act on this run only and never
//! persist anything, so Ask keeps re-prompting on later runs.

use sketchbind_types::{DeletePreference, PromptResponse};

/// What happens to the original sketch this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchAction {
    Delete,
    Keep,
}

/// A resolved decision: the action for this run, plus the preference to
/// persist, if this run changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub action: SketchAction,
    pub persist: Option<DeletePreference>,
}

/// Decide without prompting, when the persisted preference allows it.
/// `Ask` returns `None`: the caller must prompt and feed the response
/// to [`from_response`].
#[must_use]
pub fn settled(preference: DeletePreference) -> Option<Decision> {
    match preference {
        DeletePreference::Always => Some(Decision {
            action: SketchAction::Delete,
            persist: None,
        }),
        DeletePreference::Never => Some(Decision {
            action: SketchAction::Keep,
            persist: None,
        }),
        DeletePreference::Ask => None,
    }
}

/// Decide from a prompt response (only reachable from the Ask state).
#[must_use]
pub fn from_response(response: PromptResponse) -> Decision {
    match response {
        PromptResponse::Always => Decision {
            action: SketchAction::Delete,
            persist: Some(DeletePreference::Always),
        },
        PromptResponse::Yes => Decision {
            action: SketchAction::Delete,
            persist: None,
        },
        PromptResponse::No => Decision {
            action: SketchAction::Keep,
            persist: None,
        },
        PromptResponse::Never => Decision {
            action: SketchAction::Keep,
            persist: Some(DeletePreference::Never),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_deletes_without_prompting_or_persisting() {
        assert_eq!(
            settled(DeletePreference::Always),
            Some(Decision {
                action: SketchAction::Delete,
                persist: None,
            })
        );
    }

    #[test]
    fn never_keeps_without_prompting_or_persisting() {
        assert_eq!(
            settled(DeletePreference::Never),
            Some(Decision {
                action: SketchAction::Keep,
                persist: None,
            })
        );
    }

    #[test]
    fn ask_requires_a_prompt() {
        assert_eq!(settled(DeletePreference::Ask), None);
    }

    #[test]
    fn response_always_deletes_and_persists() {
        assert_eq!(
            from_response(PromptResponse::Always),
            Decision {
                action: SketchAction::Delete,
                persist: Some(DeletePreference::Always),
            }
        );
    }

    #[test]
    fn response_yes_deletes_this_run_only() {
        assert_eq!(
            from_response(PromptResponse::Yes),
            Decision {
                action: SketchAction::Delete,
                persist: None,
            }
        );
    }

    #[test]
    fn response_no_keeps_this_run_only() {
        assert_eq!(
            from_response(PromptResponse::No),
            Decision {
                action: SketchAction::Keep,
                persist: None,
            }
        );
    }

    #[test]
    fn response_never_keeps_and_persists() {
        assert_eq!(
            from_response(PromptResponse::Never),
            Decision {
                action: SketchAction::Keep,
                persist: Some(DeletePreference::Never),
            }
        );
    }

    #[test]
    fn only_always_and_never_are_ever_persisted() {
        for response in PromptResponse::ALL {
            if let Some(persisted) = from_response(response).persist {
                assert_ne!(persisted, DeletePreference::Ask);
            }
        }
    }
}
