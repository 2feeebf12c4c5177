//! Module for document store access and common helpers.
//!
//! This module names the collections the service writes to and exposes the
//! typed models and queries built on top of the generic `DocumentStore` trait.

pub mod models;
pub mod queries;

use chrono::{DateTime, SecondsFormat, Utc};

pub const ATTENDANCE: &str = "attendance";
pub const COURSES: &str = "courses";
pub const VOTES: &str = "votes";

/// Formats `at` as ISO-8601 UTC with millisecond precision and a `Z` suffix.
/// The fixed width keeps lexicographic order equal to chronological order,
/// which ordered store queries rely on.
pub fn utc_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
