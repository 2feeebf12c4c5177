//! Shared application state handed to every handler.
//!
//! Collaborators are constructed once at startup and injected here, so tests can
//! swap in an in-memory store or a mock authentication service.

use std::sync::Arc;

use adapters::{AdapterError, DocumentStore, HttpAuthService, InMemoryStore};

use crate::auth::{AttendanceGate, SessionValidator};
use crate::config::Config;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn DocumentStore>,
    pub validator: SessionValidator,
    pub gate: AttendanceGate,
}

impl AppState {
    pub fn new(
        config: Config,
        store: Arc<dyn DocumentStore>,
        validator: SessionValidator,
    ) -> SharedState {
        let gate = AttendanceGate::new(config.read_policy);
        Arc::new(Self {
            config,
            store,
            validator,
            gate,
        })
    }

    /// Builds the state the binary runs with: the HTTP auth client configured
    /// from `config` and an in-process document store.
    pub fn from_config(config: Config) -> Result<SharedState, AdapterError> {
        let auth = HttpAuthService::new(
            &config.auth_base_url,
            config.session_cookie.clone(),
            config.auth_timeout,
        )?;

        Ok(Self::new(
            config,
            Arc::new(InMemoryStore::new()),
            SessionValidator::new(Arc::new(auth)),
        ))
    }
}
