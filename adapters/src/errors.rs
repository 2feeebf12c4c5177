//! Custom error types specific to the `adapters` crate.
//!
//! This module defines errors that can occur while talking to the authentication
//! service or the document store, providing a unified error type for every
//! collaborator behind the adapter traits.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    /// The remote endpoint could not be reached or did not answer in time.
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote endpoint answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// A response body or stored document did not have the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("client setup failed: {0}")]
    ClientSetup(String),
}

impl AdapterError {
    pub fn is_transport(&self) -> bool {
        matches!(self, AdapterError::Transport(_))
    }
}

impl From<reqwest::Error> for AdapterError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AdapterError::Decode(err.to_string())
        } else {
            AdapterError::Transport(err.to_string())
        }
    }
}
