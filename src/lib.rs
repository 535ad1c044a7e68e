//! Contatos MCP Server - contact table and add/edit form for the Contato API,
//! exposed over the Model Context Protocol.
//!
//! # Architecture
//!
//! - **domain**: Phone, email and birth-date rules and formatting
//! - **models**: The stored contact and its formatted table row
//! - **form**: Draft, commit eligibility, form session and loading indicator
//! - **error**: Error types for the store client and configuration
//! - **config**: Configuration from environment variables
//! - **client**: HTTP client for the Contato API, plus its async wrapper
//! - **repositories**: Storage abstraction used by the service
//! - **services**: Form/commit flow against the repository
//! - **server**: MCP protocol server

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use client::ContactStoreClient;
pub use config::Config;
pub use error::{ConfigError, ContactStoreError};
pub use form::{is_commit_eligible, ContactDraft, ContactForm, FormMode, LoadingIndicator};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{Contact, ContactRow};
pub use server::ContatosMcpServer;
