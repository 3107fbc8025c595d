//! Submitting the edited profile to the save callback.

use std::fmt;

use thiserror::Error;

use crate::{
    draft::ProfileDraft,
    location::LocationSelection,
    notification::Notice,
    payload::{assemble_payload, ProfilePayload},
    validate::{ProfileInvalidation, Validate},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("The profile is already being saved")]
    Busy,
    #[error(transparent)]
    Invalid(#[from] ProfileInvalidation),
}

impl SubmitError {
    /// What to tell the user, if anything.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Busy => None,
            Self::Invalid(err) => Some(Notice::error(err.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The editor can be closed.
    Saved,
    /// The editor stays open with the draft untouched.
    Failed,
}

/// Tracks whether the profile is currently being saved.
#[derive(Debug, Clone, Copy, Default)]
pub struct Submission {
    saving: bool,
}

impl Submission {
    #[must_use]
    pub const fn is_saving(&self) -> bool {
        self.saving
    }

    /// Validate the draft and start saving it.
    ///
    /// Returns the payload for the save callback.
    pub fn begin(
        &mut self,
        draft: &ProfileDraft,
        selection: &LocationSelection,
    ) -> Result<ProfilePayload, SubmitError> {
        if self.saving {
            return Err(SubmitError::Busy);
        }
        draft.validate()?;
        self.saving = true;
        Ok(assemble_payload(draft, selection))
    }

    /// Finish saving with the result of the save callback.
    pub fn finish<E>(&mut self, result: Result<(), E>) -> SaveOutcome
    where
        E: fmt::Display,
    {
        self.saving = false;
        match result {
            Ok(()) => {
                log::info!("Successfully saved business profile");
                SaveOutcome::Saved
            }
            Err(err) => {
                log::error!("Unable to save business profile: {err:#}");
                SaveOutcome::Failed
            }
        }
    }
}
