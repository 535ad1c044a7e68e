use crate::error::ContactStoreResult;
use crate::models::Contact;
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Abstraction over contact storage so the service can run against the
/// HTTP store or an in-memory mock.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve every contact.
    async fn list(&self) -> ContactStoreResult<Vec<Contact>>;

    /// Retrieve a single contact by ID.
    async fn get(&self, id: i64) -> ContactStoreResult<Contact>;

    /// Create a new contact.
    async fn create(&self, contact: &Contact) -> ContactStoreResult<Contact>;

    /// Update an existing contact.
    async fn update(&self, id: i64, contact: &Contact) -> ContactStoreResult<Contact>;

    /// Delete a contact.
    async fn delete(&self, id: i64) -> ContactStoreResult<()>;
}
