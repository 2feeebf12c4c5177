//! Handler functions for the attendance API.
//!
//! These functions parse the form or query string, resolve the caller through
//! `CurrentIdentity`, and hand off to `services::attendance`.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Form, Json,
};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use serde::Deserialize;

use crate::auth::CurrentIdentity;
use crate::database::models::{AttendanceRecord, Stored};
use crate::errors::AppError;
use crate::services::attendance::{self, Submission};
use crate::state::SharedState;

/// Missing fields deserialize as empty and are rejected by the service with a
/// readable message.
#[derive(Debug, Deserialize)]
pub struct AttendanceForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default, rename = "courseId")]
    pub course_id: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct AttendanceQuery {
    #[serde(rename = "courseId")]
    pub course_id: Option<String>,
    pub user_role: Option<String>,
}

/// `POST /attendance`
pub async fn submit_attendance(
    State(state): State<SharedState>,
    identity: CurrentIdentity,
    WithRejection(Form(form), _): WithRejection<Form<AttendanceForm>, AppError>,
) -> Result<(StatusCode, Json<Stored<AttendanceRecord>>), AppError> {
    let submission = Submission {
        name: form.name,
        uid: form.uid,
        course_id: form.course_id,
        role: form.role,
    };

    let stored = attendance::record_attendance(
        state.store.as_ref(),
        &state.gate,
        identity.identity(),
        &submission,
        Utc::now(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(stored)))
}

/// `GET /attendance`
pub async fn list_attendance(
    State(state): State<SharedState>,
    identity: CurrentIdentity,
    WithRejection(Query(query), _): WithRejection<Query<AttendanceQuery>, AppError>,
) -> Result<Json<Vec<Stored<AttendanceRecord>>>, AppError> {
    let records = attendance::list_attendance(
        state.store.as_ref(),
        &state.gate,
        identity.identity(),
        query.course_id.as_deref(),
        query.user_role.as_deref(),
        state.config.recent_limit,
    )
    .await?;

    Ok(Json(records))
}
