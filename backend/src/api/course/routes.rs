//! Defines the HTTP routes for browsing and creating courses.

use axum::{routing::get, Router};

use super::handlers::{create_course, get_course, list_courses};
use crate::state::SharedState;

pub fn course_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/{id}", get(get_course))
}
