//! Contact service layer.
//!
//! Drives the add/edit form against the contact repository: every successful
//! commit or delete is followed by a fresh list from the store, which stays the
//! single source of truth.

use crate::error::{ContactStoreError, ContactStoreResult};
use crate::form::{
    is_commit_eligible, ContactDraft, ContactForm, DraftChange, FormError, FormMode, FormSnapshot,
    FormState, LoadingIndicator,
};
use crate::models::{Contact, ContactRow};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Result of checking a draft without touching the form session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftCheck {
    pub mode: FormMode,
    pub eligible: bool,
    pub problems: Vec<String>,
    /// How the draft would appear in the contact table
    pub preview: ContactRow,
}

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Fetch every contact and return the formatted table rows.
    async fn list_contacts(&self) -> ContactStoreResult<Vec<ContactRow>>;

    /// Fetch one contact as stored.
    async fn get_contact(&self, id: i64) -> ContactStoreResult<Contact>;

    /// Open the form on an empty draft.
    async fn open_new_form(&self) -> FormSnapshot;

    /// Open the form on an existing contact.
    async fn open_edit_form(&self, id: i64) -> ContactStoreResult<FormSnapshot>;

    /// Change draft fields and re-evaluate the commit flag.
    async fn update_form(&self, change: DraftChange) -> ContactStoreResult<FormSnapshot>;

    /// Discard the draft and close the form.
    async fn close_form(&self) -> FormSnapshot;

    /// Save or edit, depending on how the form was opened, then refresh the list.
    async fn submit_form(&self) -> ContactStoreResult<Vec<ContactRow>>;

    /// Delete a contact, then refresh the list.
    async fn delete_contact(&self, id: i64) -> ContactStoreResult<Vec<ContactRow>>;

    /// Check a draft without opening the form.
    async fn check_draft(&self, draft: ContactDraft, mode: FormMode) -> DraftCheck;

    /// Current loading indicator.
    async fn indicator(&self) -> LoadingIndicator;
}

#[derive(Debug, Default)]
struct Session {
    /// Last list fetched from the store
    contacts: Vec<Contact>,
    form: ContactForm,
    indicator: LoadingIndicator,
}

impl Session {
    fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            indicator: self.indicator.clone(),
            ..self.form.snapshot()
        }
    }
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repo: Arc<dyn ContactRepository>,
    session: Arc<RwLock<Session>>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self {
            repo,
            session: Arc::new(RwLock::new(Session::default())),
        }
    }

    /// Log a store failure and surface it on the indicator.
    async fn fail(&self, operation: &str, e: ContactStoreError) -> ContactStoreError {
        tracing::error!("{} failed: {}", operation, e);
        self.session.write().await.indicator = LoadingIndicator::Error(e.to_string());
        e
    }

    /// Replace the cached list with a fresh one from the store.
    async fn refresh(&self) -> ContactStoreResult<Vec<ContactRow>> {
        self.session.write().await.indicator = LoadingIndicator::Loading;

        let contacts = match self.repo.list().await {
            Ok(contacts) => contacts,
            Err(e) => return Err(self.fail("List contacts", e).await),
        };

        let rows = contacts.iter().map(ContactRow::from).collect();
        let mut session = self.session.write().await;
        session.contacts = contacts;
        session.indicator = LoadingIndicator::Idle;
        Ok(rows)
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self) -> ContactStoreResult<Vec<ContactRow>> {
        self.refresh().await
    }

    async fn get_contact(&self, id: i64) -> ContactStoreResult<Contact> {
        match self.repo.get(id).await {
            Ok(contact) => Ok(contact),
            Err(e) => Err(self.fail("Get contact", e).await),
        }
    }

    async fn open_new_form(&self) -> FormSnapshot {
        let mut session = self.session.write().await;
        session.form.open_new();
        session.snapshot()
    }

    async fn open_edit_form(&self, id: i64) -> ContactStoreResult<FormSnapshot> {
        let cached = self
            .session
            .read()
            .await
            .contacts
            .iter()
            .find(|c| c.id == Some(id))
            .cloned();

        let contact = match cached {
            Some(contact) => contact,
            None => {
                tracing::debug!("Contact {} not in cached list, fetching", id);
                match self.repo.get(id).await {
                    Ok(contact) => contact,
                    Err(e) => return Err(self.fail("Get contact", e).await),
                }
            }
        };

        let mut session = self.session.write().await;
        session.form.open_edit(&contact)?;
        Ok(session.snapshot())
    }

    async fn update_form(&self, change: DraftChange) -> ContactStoreResult<FormSnapshot> {
        let mut session = self.session.write().await;
        session.form.apply(change)?;
        Ok(session.snapshot())
    }

    async fn close_form(&self) -> FormSnapshot {
        let mut session = self.session.write().await;
        session.form.close();
        session.snapshot()
    }

    async fn submit_form(&self) -> ContactStoreResult<Vec<ContactRow>> {
        // Held across the store call: a concurrent submit waits, then finds
        // the form closed.
        let mut session = self.session.write().await;
        let (state, contact) = session.form.commit_payload()?;
        session.indicator = LoadingIndicator::Loading;

        let result = match state {
            FormState::OpenForNew => self.repo.create(&contact).await.map(|_| ()),
            FormState::OpenForEdit { id } => self.repo.update(id, &contact).await.map(|_| ()),
            FormState::Closed => Err(FormError::Closed.into()),
        };
        if let Err(e) = result {
            tracing::error!("Commit contact failed: {}", e);
            session.indicator = LoadingIndicator::Error(e.to_string());
            return Err(e);
        }

        // The record is stored; the draft goes even if the refresh fails.
        session.form.close();
        drop(session);

        tracing::info!("Contact committed ({})", state.label());
        self.refresh().await
    }

    async fn delete_contact(&self, id: i64) -> ContactStoreResult<Vec<ContactRow>> {
        if let Err(e) = self.repo.delete(id).await {
            return Err(self.fail("Delete contact", e).await);
        }
        tracing::info!("Contact {} deleted", id);
        self.refresh().await
    }

    async fn check_draft(&self, draft: ContactDraft, mode: FormMode) -> DraftCheck {
        DraftCheck {
            mode,
            eligible: is_commit_eligible(&draft, mode),
            problems: draft.problems().iter().map(ToString::to_string).collect(),
            preview: ContactRow::from(&draft.to_contact()),
        }
    }

    async fn indicator(&self) -> LoadingIndicator {
        self.session.read().await.indicator.clone()
    }
}
