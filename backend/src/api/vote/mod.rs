//! Module for the TABS/SPACES vote API.

pub mod handlers;
pub mod routes;
