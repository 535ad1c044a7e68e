use crate::client::AsyncContactStore;
use crate::error::ContactStoreResult;
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Contact repository backed by the Contato API client.
pub struct StoreContactRepository {
    client: Arc<dyn AsyncContactStore>,
}

impl StoreContactRepository {
    pub fn new(client: Arc<dyn AsyncContactStore>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContactRepository for StoreContactRepository {
    async fn list(&self) -> ContactStoreResult<Vec<Contact>> {
        self.client.list_contacts().await
    }

    async fn get(&self, id: i64) -> ContactStoreResult<Contact> {
        self.client.get_contact(id).await
    }

    async fn create(&self, contact: &Contact) -> ContactStoreResult<Contact> {
        self.client.create_contact(contact).await
    }

    async fn update(&self, id: i64, contact: &Contact) -> ContactStoreResult<Contact> {
        self.client.update_contact(id, contact).await
    }

    async fn delete(&self, id: i64) -> ContactStoreResult<()> {
        self.client.delete_contact(id).await
    }
}
