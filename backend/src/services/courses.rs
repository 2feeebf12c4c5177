//! Course management.
//!
//! Creating a course needs a verified Professor identity; a claimed role is not
//! enough here.

use adapters::DocumentStore;
use chrono::{DateTime, Utc};
use tracing::info;

use super::required;
use crate::auth::{AuthError, Identity, Role};
use crate::database::models::{Course, Stored};
use crate::database::{queries, utc_timestamp};
use crate::errors::AppError;

pub async fn create_course(
    store: &dyn DocumentStore,
    identity: Option<&Identity>,
    name: &str,
    now: DateTime<Utc>,
) -> Result<Stored<Course>, AppError> {
    let identity = identity.ok_or(AuthError::Unauthenticated)?;
    if !identity.has_role(&Role::Professor) {
        return Err(AuthError::Denied("only professors may create courses".into()).into());
    }

    let course = Course {
        name: required("name", name)?.to_string(),
        professor_id: identity.user_id.clone(),
        created_at: utc_timestamp(now),
    };

    let id = queries::insert_course(store, &course).await?;
    info!(%id, professor_id = %course.professor_id, "course created");

    Ok(Stored { id, record: course })
}

pub async fn find_course(store: &dyn DocumentStore, id: &str) -> Result<Stored<Course>, AppError> {
    queries::get_course(store, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("course {id} does not exist")))
}

pub async fn list_courses(store: &dyn DocumentStore) -> Result<Vec<Stored<Course>>, AppError> {
    Ok(queries::list_courses(store).await?)
}
