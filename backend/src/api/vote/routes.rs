//! Defines the HTTP routes for casting and tallying votes.

use axum::{routing::get, Router};

use super::handlers::{cast_vote, tally_votes};
use crate::state::SharedState;

pub fn vote_router() -> Router<SharedState> {
    Router::new().route("/", get(tally_votes).post(cast_vote))
}
