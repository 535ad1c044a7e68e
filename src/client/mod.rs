//! HTTP client for the Contato REST API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. Every request goes to `{base_url}/{token}` or
//! `{base_url}/{token}/{id}`; the token is the only credential.

mod async_wrapper;
pub use async_wrapper::{AsyncContactStore, AsyncContactStoreImpl};

use crate::config::Config;
use crate::error::{ContactStoreError, ContactStoreResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::Contact;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the Contato API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ContactStoreClient {
    /// `{base_url}/{token}`, without a trailing slash
    endpoint: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ContactStoreClient {
    /// Create a new client from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            endpoint: config.endpoint().trim_end_matches('/').to_string(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a client for a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, token: String) -> Self {
        let config = Config {
            api_base_url: base_url,
            api_token: token,
            ..Config::default()
        };
        Self::new(&config)
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path relative to the token endpoint.
    fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.endpoint.clone()
        } else {
            format!("{}/{}", self.endpoint, path)
        }
    }

    /// Path used in log lines; never includes the token.
    fn log_path(path: &str) -> String {
        format!("/{}", path.trim_start_matches('/'))
    }

    fn finish(
        &self,
        method: &str,
        path: &str,
        timer: HttpTimer,
        result: Result<ureq::Response, ureq::Error>,
    ) -> ContactStoreResult<ureq::Response> {
        match result {
            Ok(response) => {
                timer.complete();
                tracing::debug!(
                    "{} {} - Success (status: {})",
                    method,
                    Self::log_path(path),
                    response.status()
                );
                Ok(response)
            }
            Err(e) => {
                timer.complete_with_error();
                let err = self.map_error(e);
                tracing::error!("{} {} - Error: {:?}", method, Self::log_path(path), err);
                Err(err)
            }
        }
    }

    /// Execute a GET request.
    fn get(&self, path: &str) -> ContactStoreResult<ureq::Response> {
        let timer = HttpTimer::new(self.metrics.clone());
        let result = self
            .agent
            .get(&self.build_url(path))
            .set("Accept", "application/json")
            .call();
        self.finish("GET", path, timer, result)
    }

    /// Execute a POST request with a JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> ContactStoreResult<ureq::Response> {
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string_pretty(body).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        let timer = HttpTimer::new(self.metrics.clone());
        let result = self
            .agent
            .post(&self.build_url(path))
            .set("Content-Type", "application/json")
            .send_json(body);
        self.finish("POST", path, timer, result)
    }

    /// Execute a PUT request with a JSON body.
    fn put(&self, path: &str, body: &serde_json::Value) -> ContactStoreResult<ureq::Response> {
        let timer = HttpTimer::new(self.metrics.clone());
        let result = self
            .agent
            .put(&self.build_url(path))
            .set("Content-Type", "application/json")
            .send_json(body);
        self.finish("PUT", path, timer, result)
    }

    /// Execute a DELETE request.
    fn delete(&self, path: &str) -> ContactStoreResult<ureq::Response> {
        let timer = HttpTimer::new(self.metrics.clone());
        let result = self.agent.delete(&self.build_url(path)).call();
        self.finish("DELETE", path, timer, result)
    }

    /// Map a ureq error to a ContactStoreError.
    fn map_error(&self, error: ureq::Error) -> ContactStoreError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 | 403 => ContactStoreError::Unauthorized,
                    404 => ContactStoreError::NotFound(message),
                    429 => ContactStoreError::RateLimitExceeded,
                    _ => ContactStoreError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ContactStoreError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    ContactStoreError::Timeout
                } else {
                    ContactStoreError::HttpError(transport.to_string())
                }
            }
        }
    }

    fn read_body(response: ureq::Response) -> ContactStoreResult<String> {
        response
            .into_string()
            .map_err(|e| ContactStoreError::HttpError(e.to_string()))
    }

    /// Parse a single contact, or `None` when the store answered with no body.
    fn parse_optional_contact(body: &str) -> ContactStoreResult<Option<Contact>> {
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(body)?))
    }

    // ========================= Contact Operations =========================

    /// Get every contact.
    pub fn list_contacts(&self) -> ContactStoreResult<Vec<Contact>> {
        let response = self.get("")?;
        let body = Self::read_body(response)?;
        let contacts: Vec<Contact> = serde_json::from_str(&body)?;

        self.metrics.record_contacts_fetched(contacts.len());
        Ok(contacts)
    }

    /// Get a single contact by ID.
    pub fn get_contact(&self, id: i64) -> ContactStoreResult<Contact> {
        let response = self.get(&id.to_string())?;
        let body = Self::read_body(response)?;

        let contact = Self::parse_optional_contact(&body)?
            .ok_or_else(|| ContactStoreError::NotFound(format!("contact {}", id)))?;

        self.metrics.record_contacts_fetched(1);
        Ok(contact)
    }

    /// Create a new contact.
    ///
    /// Any id on `contact` is dropped; the store assigns one.
    pub fn create_contact(&self, contact: &Contact) -> ContactStoreResult<Contact> {
        let request = Contact {
            id: None,
            ..contact.clone()
        };
        let body = serde_json::to_value(&request)?;

        let response = self.post("", &body)?;
        let response_body = Self::read_body(response)?;

        let created = Self::parse_optional_contact(&response_body)?.unwrap_or(request);
        tracing::info!("Contact created with id: {:?}", created.id);

        self.metrics.record_contact_created();
        Ok(created)
    }

    /// Update an existing contact.
    pub fn update_contact(&self, id: i64, contact: &Contact) -> ContactStoreResult<Contact> {
        let request = Contact {
            id: Some(id),
            ..contact.clone()
        };
        let body = serde_json::to_value(&request)?;

        let response = self.put(&id.to_string(), &body)?;
        let response_body = Self::read_body(response)?;

        let updated = Self::parse_optional_contact(&response_body)?.unwrap_or(request);

        self.metrics.record_contact_updated();
        Ok(updated)
    }

    /// Delete a contact.
    pub fn delete_contact(&self, id: i64) -> ContactStoreResult<()> {
        self.delete(&id.to_string())?;
        self.metrics.record_contact_deleted();
        Ok(())
    }
}
