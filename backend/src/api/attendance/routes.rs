//! Defines the HTTP routes for recording and listing attendance.

use axum::{routing::get, Router};

use super::handlers::{list_attendance, submit_attendance};
use crate::state::SharedState;

pub fn attendance_router() -> Router<SharedState> {
    Router::new().route("/", get(list_attendance).post(submit_attendance))
}
