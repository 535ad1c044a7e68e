//! The add/edit form session: open/closed state, draft, and the two enabled flags.

use super::draft::{is_commit_eligible, ContactDraft, DraftChange, FormMode};
use super::indicator::LoadingIndicator;
use crate::models::Contact;
use serde::Serialize;
use thiserror::Error;

/// Errors raised by form operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The form must be opened before it can be edited or submitted
    #[error("Contact form is not open")]
    Closed,

    /// The commit action for the current mode is disabled
    #[error("Contact cannot be committed ({mode:?}): {}", .problems.join("; "))]
    NotEligible {
        mode: FormMode,
        problems: Vec<String>,
    },

    /// The contact being edited has no store id
    #[error("Contact has no id and cannot be edited")]
    MissingId,
}

/// Whether the form is shown, and for which action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Closed,
    OpenForNew,
    OpenForEdit { id: i64 },
}

impl FormState {
    /// The commit mode of an open form.
    pub fn mode(&self) -> Option<FormMode> {
        match self {
            FormState::Closed => None,
            FormState::OpenForNew => Some(FormMode::New),
            FormState::OpenForEdit { .. } => Some(FormMode::Edit),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, FormState::Closed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormState::Closed => "closed",
            FormState::OpenForNew => "open_for_new",
            FormState::OpenForEdit { .. } => "open_for_edit",
        }
    }
}

/// Add/edit form state.
///
/// The save flag and the edit flag are tracked separately; a field change only
/// refreshes the flag that belongs to the current mode.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    state: FormState,
    draft: ContactDraft,
    save_enabled: bool,
    edit_enabled: bool,
}

impl ContactForm {
    /// A closed form with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// Whether the "Salvar" action is enabled.
    pub fn save_enabled(&self) -> bool {
        self.save_enabled
    }

    /// Whether the "Editar" action is enabled.
    pub fn edit_enabled(&self) -> bool {
        self.edit_enabled
    }

    /// Whether the action for the current mode is enabled. False when closed.
    pub fn can_commit(&self) -> bool {
        match self.state.mode() {
            Some(FormMode::New) => self.save_enabled,
            Some(FormMode::Edit) => self.edit_enabled,
            None => false,
        }
    }

    /// Open the form on an empty draft for a new contact.
    pub fn open_new(&mut self) {
        self.draft = ContactDraft::new();
        self.state = FormState::OpenForNew;
        self.refresh();
    }

    /// Open the form on a stored contact.
    pub fn open_edit(&mut self, contact: &Contact) -> Result<(), FormError> {
        let id = contact.id.ok_or(FormError::MissingId)?;
        self.draft = ContactDraft::from_contact(contact);
        self.state = FormState::OpenForEdit { id };
        self.refresh();
        Ok(())
    }

    /// Apply a field change and re-evaluate the current mode's flag.
    pub fn apply(&mut self, change: DraftChange) -> Result<(), FormError> {
        if !self.state.is_open() {
            return Err(FormError::Closed);
        }
        self.draft.apply(change);
        self.refresh();
        Ok(())
    }

    /// Check the form can be committed and return the mode and request body.
    pub fn commit_payload(&self) -> Result<(FormState, Contact), FormError> {
        let mode = self.state.mode().ok_or(FormError::Closed)?;
        if !self.can_commit() {
            return Err(FormError::NotEligible {
                mode,
                problems: self
                    .draft
                    .problems()
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            });
        }
        Ok((self.state, self.draft.to_contact()))
    }

    /// Clear the draft and hide the form. Both flags keep their last value.
    pub fn close(&mut self) {
        self.draft = ContactDraft::new();
        self.state = FormState::Closed;
    }

    fn refresh(&mut self) {
        let Some(mode) = self.state.mode() else {
            return;
        };
        let eligible = is_commit_eligible(&self.draft, mode);
        match mode {
            FormMode::New => self.save_enabled = eligible,
            FormMode::Edit => self.edit_enabled = eligible,
        }
    }

    /// Serializable view of the form for tool responses.
    ///
    /// The form knows nothing of store round trips, so `indicator` is `Idle`
    /// here; the service fills in its own.
    pub fn snapshot(&self) -> FormSnapshot {
        let editing_id = match self.state {
            FormState::OpenForEdit { id } => Some(id),
            _ => None,
        };
        FormSnapshot {
            state: self.state.label(),
            editing_id,
            draft: self.draft.clone(),
            save_enabled: self.save_enabled,
            edit_enabled: self.edit_enabled,
            problems: self
                .draft
                .problems()
                .iter()
                .map(ToString::to_string)
                .collect(),
            indicator: LoadingIndicator::Idle,
        }
    }
}

/// Point-in-time view of a [`ContactForm`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editing_id: Option<i64>,
    pub draft: ContactDraft,
    pub save_enabled: bool,
    pub edit_enabled: bool,
    pub problems: Vec<String>,
    /// Status of the last store round trip
    pub indicator: LoadingIndicator,
}
