//! Custom error types specific to authentication and authorization failures.
//!
//! Every variant is a rejection of a single request; none of them is fatal to
//! the service.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A verified identity is required and none was presented.
    #[error("authentication required")]
    Unauthenticated,

    #[error("authorization denied: {0}")]
    Denied(String),
}
