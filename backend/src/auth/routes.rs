//! Defines the HTTP routes specifically for authentication.
//!
//! These routes are nested under `/api/auth` by the main router.

use axum::{routing::get, Router};

use super::handlers::session_handler;
use crate::state::SharedState;

pub fn auth_router() -> Router<SharedState> {
    Router::new().route("/session", get(session_handler))
}
