//! Handler functions for the course API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Form, Json,
};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use serde::Deserialize;

use crate::auth::CurrentIdentity;
use crate::database::models::{Course, Stored};
use crate::errors::AppError;
use crate::services::courses;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct CourseForm {
    #[serde(default)]
    pub name: String,
}

/// `GET /courses`
pub async fn list_courses(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Stored<Course>>>, AppError> {
    Ok(Json(courses::list_courses(state.store.as_ref()).await?))
}

/// `GET /courses/{id}`
pub async fn get_course(
    State(state): State<SharedState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, AppError>,
) -> Result<Json<Stored<Course>>, AppError> {
    Ok(Json(courses::find_course(state.store.as_ref(), &id).await?))
}

/// `POST /courses`
pub async fn create_course(
    State(state): State<SharedState>,
    identity: CurrentIdentity,
    WithRejection(Form(form), _): WithRejection<Form<CourseForm>, AppError>,
) -> Result<(StatusCode, Json<Stored<Course>>), AppError> {
    let course = courses::create_course(
        state.store.as_ref(),
        identity.identity(),
        &form.name,
        Utc::now(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(course)))
}
