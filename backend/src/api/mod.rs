//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the attendance, course and vote
//! endpoints, excluding the session route which lives with the auth module.

pub mod attendance;
pub mod course;
pub mod vote;
