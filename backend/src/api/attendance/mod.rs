//! Module for the attendance API.
//!
//! This module exposes recording attendance from a form submission and listing
//! recorded attendance for professors.

pub mod handlers;
pub mod routes;
