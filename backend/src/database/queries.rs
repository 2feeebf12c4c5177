//! Document store query functions (Data Access Objects).
//!
//! This module centralizes every read and write the service performs, turning
//! typed models into documents and back, so services and handlers never touch
//! raw JSON.

use adapters::{AdapterError, Direction, Document, DocumentStore, FilterOp};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::models::{AttendanceRecord, Course, Stored, Team, Vote};
use super::{ATTENDANCE, COURSES, VOTES};

async fn insert<T: Serialize>(
    store: &dyn DocumentStore,
    collection: &str,
    record: &T,
) -> Result<String, AdapterError> {
    let value =
        serde_json::to_value(record).map_err(|err| AdapterError::InvalidDocument(err.to_string()))?;

    let Value::Object(data) = value else {
        return Err(AdapterError::InvalidDocument(format!(
            "{collection} documents must be JSON objects"
        )));
    };

    store.add(collection, data).await
}

/// Decodes a listing. Documents that no longer decode are skipped and logged
/// so one bad record cannot hide the rest.
fn parse_all<T: DeserializeOwned>(docs: Vec<Document>) -> Vec<Stored<T>> {
    docs.iter()
        .filter_map(|doc| match parse_one(doc) {
            Ok(stored) => Some(stored),
            Err(err) => {
                warn!(id = %doc.id, error = %err, "skipping undecodable document");
                None
            }
        })
        .collect()
}

fn parse_one<T: DeserializeOwned>(doc: &Document) -> Result<Stored<T>, AdapterError> {
    Ok(Stored {
        id: doc.id.clone(),
        record: doc.parse()?,
    })
}

pub async fn insert_attendance(
    store: &dyn DocumentStore,
    record: &AttendanceRecord,
) -> Result<String, AdapterError> {
    insert(store, ATTENDANCE, record).await
}

/// Every record for `course_id`, newest first.
pub async fn attendance_for_course(
    store: &dyn DocumentStore,
    course_id: &str,
) -> Result<Vec<Stored<AttendanceRecord>>, AdapterError> {
    let docs = store
        .query(ATTENDANCE, "courseId", FilterOp::Eq, Value::from(course_id))
        .await?;

    let mut records: Vec<Stored<AttendanceRecord>> = parse_all(docs);
    records.sort_by(|a, b| b.record.timestamp.cmp(&a.record.timestamp));
    Ok(records)
}

/// The `limit` newest records across all courses.
pub async fn recent_attendance(
    store: &dyn DocumentStore,
    limit: usize,
) -> Result<Vec<Stored<AttendanceRecord>>, AdapterError> {
    let docs = store
        .query_ordered(ATTENDANCE, "timestamp", Direction::Descending, limit)
        .await?;
    Ok(parse_all(docs))
}

pub async fn insert_course(
    store: &dyn DocumentStore,
    course: &Course,
) -> Result<String, AdapterError> {
    insert(store, COURSES, course).await
}

pub async fn get_course(
    store: &dyn DocumentStore,
    course_id: &str,
) -> Result<Option<Stored<Course>>, AdapterError> {
    store
        .get(COURSES, course_id)
        .await?
        .map(|doc| parse_one(&doc))
        .transpose()
}

/// All courses ordered by name.
pub async fn list_courses(store: &dyn DocumentStore) -> Result<Vec<Stored<Course>>, AdapterError> {
    let docs = store
        .query_ordered(COURSES, "name", Direction::Ascending, usize::MAX)
        .await?;
    Ok(parse_all(docs))
}

pub async fn insert_vote(store: &dyn DocumentStore, vote: &Vote) -> Result<String, AdapterError> {
    insert(store, VOTES, vote).await
}

pub async fn count_votes(store: &dyn DocumentStore, team: Team) -> Result<usize, AdapterError> {
    Ok(store
        .query(VOTES, "team", FilterOp::Eq, Value::from(team.as_str()))
        .await?
        .len())
}

pub async fn recent_votes(
    store: &dyn DocumentStore,
    limit: usize,
) -> Result<Vec<Stored<Vote>>, AdapterError> {
    let docs = store
        .query_ordered(VOTES, "time_cast", Direction::Descending, limit)
        .await?;
    Ok(parse_all(docs))
}
