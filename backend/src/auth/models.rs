//! Data structures for authentication-related entities.
//!
//! This module defines the outcome of a session lookup and the decision produced
//! by the attendance gate. Identities and roles come from the `adapters` crate,
//! where the authentication service's answers are decoded.

use serde::Serialize;

pub use adapters::{Identity, Role};

/// What the authentication service said about a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Verified(Identity),
    /// No token, or the service does not recognise it.
    Unauthenticated,
    /// The service could not be asked or answered with something unusable.
    TransportFailure(String),
}

impl SessionOutcome {
    /// Collapses the outcome to an identity. Both failure modes become
    /// anonymous access.
    pub fn into_identity(self) -> Option<Identity> {
        match self {
            SessionOutcome::Verified(identity) => Some(identity),
            SessionOutcome::Unauthenticated | SessionOutcome::TransportFailure(_) => None,
        }
    }
}

/// Outcome of the write gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Proceed, attributing the write to the given user id when there is one.
    Allow(Option<String>),
    Deny(String),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow(_))
    }
}

/// Session view returned by `GET /api/auth/session`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub authenticated: bool,
    #[serde(flatten)]
    pub identity: Option<Identity>,
}

impl From<Option<Identity>> for SessionView {
    fn from(identity: Option<Identity>) -> Self {
        Self {
            authenticated: identity.is_some(),
            identity,
        }
    }
}
