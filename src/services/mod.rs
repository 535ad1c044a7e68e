//! Service layer for business logic.
//!
//! Sits between the MCP handlers and the repository: form session, commit
//! flow and list refresh.

pub mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl, DraftCheck};
