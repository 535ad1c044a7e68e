//! End-to-end test utilities for tests that hit the live Contato API.

use contatos_mcp_server::config::DEFAULT_API_BASE_URL;
use contatos_mcp_server::{Contact, ContactStoreClient};
use std::env;

pub mod fixtures;

/// Test configuration loaded from environment variables.
pub struct TestConfig {
    pub api_token: String,
    pub base_url: String,
}

impl TestConfig {
    /// Load configuration from the environment and `.env`.
    ///
    /// # Panics
    /// Panics if CONTATOS_API_TOKEN is not set.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_token: env::var("CONTATOS_API_TOKEN")
                .expect("CONTATOS_API_TOKEN must be set for E2E tests"),
            base_url: env::var("CONTATOS_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
        }
    }
}

/// Create a client pointed at the live store.
pub fn setup_test_client() -> ContactStoreClient {
    let config = TestConfig::from_env();
    ContactStoreClient::with_base_url(config.base_url, config.api_token)
}

/// Assert that a stored contact has its id and required fields.
pub fn assert_contact_valid(contact: &Contact) {
    assert!(contact.id.is_some(), "Stored contact should have an id");
    assert!(!contact.nome.is_empty(), "Contact nome should not be empty");
    assert!(!contact.email.is_empty(), "Contact email should not be empty");
}
