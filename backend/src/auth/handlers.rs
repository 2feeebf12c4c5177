//! Handler functions for authentication-related API endpoints.
//!
//! Sessions are owned by the external authentication service; this service only
//! reports how it sees the caller's session.

use axum::Json;

use super::middleware::CurrentIdentity;
use super::models::SessionView;

/// `GET /api/auth/session`
pub async fn session_handler(CurrentIdentity(identity): CurrentIdentity) -> Json<SessionView> {
    Json(SessionView::from(identity))
}
