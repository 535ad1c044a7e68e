//! Async wrapper around the synchronous ContactStoreClient.
//!
//! Each call runs on `tokio::task::spawn_blocking` so the blocking HTTP
//! round trip never stalls the async runtime.

use crate::client::ContactStoreClient;
use crate::error::{ContactStoreError, ContactStoreResult};
use crate::models::Contact;
use async_trait::async_trait;
use std::sync::Arc;

/// Async contact store operations.
#[async_trait]
pub trait AsyncContactStore: Send + Sync {
    async fn list_contacts(&self) -> ContactStoreResult<Vec<Contact>>;
    async fn get_contact(&self, id: i64) -> ContactStoreResult<Contact>;
    async fn create_contact(&self, contact: &Contact) -> ContactStoreResult<Contact>;
    async fn update_contact(&self, id: i64, contact: &Contact) -> ContactStoreResult<Contact>;
    async fn delete_contact(&self, id: i64) -> ContactStoreResult<()>;
}

/// Async wrapper around synchronous ContactStoreClient.
#[derive(Clone)]
pub struct AsyncContactStoreImpl {
    client: Arc<ContactStoreClient>,
}

impl AsyncContactStoreImpl {
    pub fn new(client: ContactStoreClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

fn join_error(e: tokio::task::JoinError) -> ContactStoreError {
    ContactStoreError::HttpError(format!("Task join error: {}", e))
}

#[async_trait]
impl AsyncContactStore for AsyncContactStoreImpl {
    async fn list_contacts(&self) -> ContactStoreResult<Vec<Contact>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.list_contacts())
            .await
            .map_err(join_error)?
    }

    async fn get_contact(&self, id: i64) -> ContactStoreResult<Contact> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_contact(id))
            .await
            .map_err(join_error)?
    }

    async fn create_contact(&self, contact: &Contact) -> ContactStoreResult<Contact> {
        let client = self.client.clone();
        let contact = contact.clone();

        tokio::task::spawn_blocking(move || client.create_contact(&contact))
            .await
            .map_err(join_error)?
    }

    async fn update_contact(&self, id: i64, contact: &Contact) -> ContactStoreResult<Contact> {
        let client = self.client.clone();
        let contact = contact.clone();

        tokio::task::spawn_blocking(move || client.update_contact(id, &contact))
            .await
            .map_err(join_error)?
    }

    async fn delete_contact(&self, id: i64) -> ContactStoreResult<()> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.delete_contact(id))
            .await
            .map_err(join_error)?
    }
}
