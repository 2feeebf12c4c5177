//! Authentication module for session validation and access control.
//!
//! This module provides the session validator (which asks the external
//! authentication service about a session cookie), the attendance gate (which
//! decides who may read and write records), and the request extractor tying the
//! two to incoming requests.

pub mod errors;
pub mod gate;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;

// Re-exports for convenience
pub use errors::*;
pub use gate::*;
pub use handlers::*;
pub use middleware::*;
pub use models::*;
pub use routes::*;
pub use service::*;
