//! Recording and listing attendance.
//!
//! A write passes through the attendance gate before the course is looked up, so
//! a denied caller learns nothing about which courses exist.

use adapters::DocumentStore;
use chrono::{DateTime, Utc};
use tracing::info;

use super::required;
use crate::auth::{AttendanceGate, AuthError, Decision, Identity, Role};
use crate::database::models::{AttendanceRecord, Stored};
use crate::database::{queries, utc_timestamp};
use crate::errors::AppError;

/// Fields of an attendance form, as submitted.
#[derive(Debug, Clone)]
pub struct Submission {
    pub name: String,
    pub uid: String,
    pub course_id: String,
    pub role: String,
}

pub async fn record_attendance(
    store: &dyn DocumentStore,
    gate: &AttendanceGate,
    identity: Option<&Identity>,
    submission: &Submission,
    now: DateTime<Utc>,
) -> Result<Stored<AttendanceRecord>, AppError> {
    let name = required("name", &submission.name)?;
    let uid = required("uid", &submission.uid)?;
    let course_id = required("courseId", &submission.course_id)?;
    let role = required("role", &submission.role)?;

    let attributed_to = match gate.authorize_write(identity, role) {
        Decision::Allow(attributed_to) => attributed_to,
        Decision::Deny(reason) => {
            info!(uid, course_id, %reason, "attendance write denied");
            return Err(AuthError::Denied(reason).into());
        }
    };

    if queries::get_course(store, course_id).await?.is_none() {
        return Err(AppError::NotFound(format!("course {course_id} does not exist")));
    }

    let record = AttendanceRecord {
        name: name.to_string(),
        uid: uid.to_string(),
        timestamp: utc_timestamp(now),
        course_id: course_id.to_string(),
        role: Role::from_name(role).to_string(),
        auth_server_id: attributed_to,
    };

    let id = queries::insert_attendance(store, &record).await?;
    info!(
        %id,
        course_id,
        attributed = record.auth_server_id.is_some(),
        "attendance recorded"
    );

    Ok(Stored { id, record })
}

/// Lists records for `course_id`, or the `recent_limit` newest records when no
/// course is given.
pub async fn list_attendance(
    store: &dyn DocumentStore,
    gate: &AttendanceGate,
    identity: Option<&Identity>,
    course_id: Option<&str>,
    declared_role: Option<&str>,
    recent_limit: usize,
) -> Result<Vec<Stored<AttendanceRecord>>, AppError> {
    if !gate.authorize_read(identity, declared_role) {
        return Err(AuthError::Denied("only professors may list attendance".into()).into());
    }

    match course_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(course_id) => Ok(queries::attendance_for_course(store, course_id).await?),
        None => Ok(queries::recent_attendance(store, recent_limit).await?),
    }
}
