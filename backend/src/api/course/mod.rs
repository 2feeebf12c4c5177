//! Module for the course API.

pub mod handlers;
pub mod routes;
