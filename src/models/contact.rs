//! Contact model as exchanged with the Contato API.

use crate::domain::{to_human_date, to_human_phone};
use serde::{Deserialize, Serialize};

/// Label shown for an active contact.
pub const ATIVO_SIM: &str = "Sim";

/// Label shown for an inactive contact.
pub const ATIVO_NAO: &str = "Não";

/// Render the `ativo` flag the way the contact table and form show it.
pub fn ativo_label(ativo: bool) -> &'static str {
    if ativo {
        ATIVO_SIM
    } else {
        ATIVO_NAO
    }
}

/// Read an `ativo` select value. Only `"Sim"` means active.
pub fn parse_ativo(label: &str) -> bool {
    label == ATIVO_SIM
}

/// A contact record.
///
/// Field names follow the API's JSON (`dataNascimento` on the wire).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    /// Assigned by the store; absent for a contact that was never saved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub nome: String,

    /// Digits as typed, possibly with embedded spaces
    pub telefone: String,

    pub email: String,

    pub ativo: bool,

    /// Canonical `YYYY-MM-DD`
    pub data_nascimento: String,
}

impl Contact {
    /// Create a new, unsaved contact.
    pub fn new(
        nome: impl Into<String>,
        telefone: impl Into<String>,
        email: impl Into<String>,
        ativo: bool,
        data_nascimento: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            nome: nome.into(),
            telefone: telefone.into(),
            email: email.into(),
            ativo,
            data_nascimento: data_nascimento.into(),
        }
    }

    /// Builder-style id setter.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// The read-only table row for this contact.
    pub fn to_row(&self) -> ContactRow {
        ContactRow::from(self)
    }
}

/// One row of the contact table, every field already formatted for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRow {
    pub id: Option<i64>,
    pub nome: String,
    /// `(AA) NNNNN-NNNN`
    pub telefone: String,
    pub email: String,
    /// `"Sim"` / `"Não"`
    pub ativo: String,
    /// `DD/MM/YYYY`
    pub data_nascimento: String,
}

impl From<&Contact> for ContactRow {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id,
            nome: contact.nome.clone(),
            telefone: to_human_phone(&contact.telefone),
            email: contact.email.clone(),
            ativo: ativo_label(contact.ativo).to_string(),
            data_nascimento: to_human_date(&contact.data_nascimento),
        }
    }
}
