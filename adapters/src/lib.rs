//! Core `adapters` crate for abstracting the service's external collaborators.
//!
//! This crate defines the `DocumentStore` and `AuthService` traits, which outline
//! the generic operations the backend needs from the managed document database
//! and from the authentication service, and provides concrete implementations
//! (an in-process store and an HTTP auth client).

pub mod auth_server;
pub mod errors;
pub mod memory;
pub mod models;

use async_trait::async_trait;
use serde_json::{Map, Value};

pub use auth_server::HttpAuthService;
pub use errors::AdapterError;
pub use memory::InMemoryStore;
pub use models::{AuthStatus, Direction, Document, FilterOp, Identity, Role};

/// Generic get/query/add access to a document database.
///
/// Documents are created once and never mutated or deleted through this trait.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Stores a new document and returns its generated id.
    async fn add(&self, collection: &str, data: Map<String, Value>)
        -> Result<String, AdapterError>;

    /// Returns every document whose `field` satisfies `op` against `value`.
    /// Documents missing the field are skipped.
    async fn query(
        &self,
        collection: &str,
        field: &str,
        op: FilterOp,
        value: Value,
    ) -> Result<Vec<Document>, AdapterError>;

    /// Returns at most `limit` documents sorted by `field`. Documents missing
    /// the field are skipped.
    async fn query_ordered(
        &self,
        collection: &str,
        field: &str,
        direction: Direction,
        limit: usize,
    ) -> Result<Vec<Document>, AdapterError>;

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, AdapterError>;
}

/// The external authentication service that owns user sessions.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Asks whether `token` names a live session. Transport faults, unexpected
    /// statuses and malformed bodies are returned as errors; callers decide
    /// how to degrade.
    async fn session_status(&self, token: &str) -> Result<AuthStatus, AdapterError>;
}
