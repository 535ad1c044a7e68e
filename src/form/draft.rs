//! Draft contact and the commit-eligibility rule.

use crate::domain::{to_display_date, EmailAddress, PhoneNumber, ValidationError};
use crate::models::Contact;
use serde::{Deserialize, Serialize};

/// Which commit action a draft is heading for.
///
/// Both modes validate identically; the mode only decides which of the two
/// enabled flags the form updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    /// Creating a contact ("Salvar").
    New,
    /// Editing an existing contact ("Editar").
    Edit,
}

/// The editable field values of the add/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub nome: String,
    pub telefone: String,
    pub email: String,
    pub ativo: bool,
    /// `YYYY-MM-DD`, as a date input holds it
    pub data_nascimento: String,
}

impl Default for ContactDraft {
    fn default() -> Self {
        Self {
            nome: String::new(),
            telefone: String::new(),
            email: String::new(),
            ativo: true,
            data_nascimento: String::new(),
        }
    }
}

/// A partial update to a draft: only the `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftChange {
    pub nome: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub ativo: Option<bool>,
    pub data_nascimento: Option<String>,
}

impl DraftChange {
    /// Whether the change writes nothing.
    pub fn is_empty(&self) -> bool {
        self.nome.is_none()
            && self.telefone.is_none()
            && self.email.is_none()
            && self.ativo.is_none()
            && self.data_nascimento.is_none()
    }
}

impl ContactDraft {
    /// An empty draft for a new contact (`ativo` defaults to true).
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate a draft from a stored contact for editing.
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            nome: contact.nome.clone(),
            telefone: contact.telefone.clone(),
            email: contact.email.clone(),
            ativo: contact.ativo,
            data_nascimento: to_display_date(&contact.data_nascimento),
        }
    }

    /// Write the `Some` fields of `change` into the draft.
    pub fn apply(&mut self, change: DraftChange) {
        if let Some(nome) = change.nome {
            self.nome = nome;
        }
        if let Some(telefone) = change.telefone {
            self.telefone = telefone;
        }
        if let Some(email) = change.email {
            self.email = email;
        }
        if let Some(ativo) = change.ativo {
            self.ativo = ativo;
        }
        if let Some(data_nascimento) = change.data_nascimento {
            self.data_nascimento = data_nascimento;
        }
    }

    /// Every reason the draft cannot be committed, in field order.
    ///
    /// Shape checks only run on fields that are present, so an empty phone is
    /// reported once as missing rather than also as invalid.
    pub fn problems(&self) -> Vec<ValidationError> {
        let mut problems = Vec::new();

        if self.nome.is_empty() {
            problems.push(ValidationError::MissingField("nome"));
        }

        if self.telefone.is_empty() {
            problems.push(ValidationError::MissingField("telefone"));
        } else if let Err(e) = PhoneNumber::new(self.telefone.as_str()) {
            problems.push(e);
        }

        if self.email.is_empty() {
            problems.push(ValidationError::MissingField("email"));
        } else if let Err(e) = EmailAddress::new(self.email.as_str()) {
            problems.push(e);
        }

        if self.data_nascimento.is_empty() {
            problems.push(ValidationError::MissingField("dataNascimento"));
        }

        problems
    }

    /// The request body for this draft. The id is left to the store.
    pub fn to_contact(&self) -> Contact {
        Contact::new(
            self.nome.clone(),
            self.telefone.clone(),
            self.email.clone(),
            self.ativo,
            self.data_nascimento.clone(),
        )
    }
}

/// Whether `draft` may be saved (`FormMode::New`) or edited (`FormMode::Edit`).
///
/// True iff nome, telefone, email and dataNascimento are all non-empty, the
/// phone normalizes to 10 or 11 digits and the email has the
/// `local@domain.tld` shape. `ativo` never matters.
pub fn is_commit_eligible(draft: &ContactDraft, mode: FormMode) -> bool {
    match mode {
        FormMode::New | FormMode::Edit => draft.problems().is_empty(),
    }
}
