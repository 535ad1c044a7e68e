//! Data models for the Contato API.

pub mod contact;

pub use contact::{ativo_label, parse_ativo, Contact, ContactRow};
