//! Handler functions for the vote API.

use axum::{extract::State, http::StatusCode, Form, Json};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::services::vote_tally::{self, VoteTally};
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct VoteForm {
    #[serde(default)]
    pub team: String,
}

/// `GET /votes`
pub async fn tally_votes(State(state): State<SharedState>) -> Result<Json<VoteTally>, AppError> {
    Ok(Json(
        vote_tally::tally(state.store.as_ref(), state.config.recent_limit).await?,
    ))
}

/// `POST /votes`
pub async fn cast_vote(
    State(state): State<SharedState>,
    WithRejection(Form(form), _): WithRejection<Form<VoteForm>, AppError>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    vote_tally::cast_vote(state.store.as_ref(), &form.team, Utc::now()).await?;
    Ok((StatusCode::OK, Json(json!({ "detail": "Vote success!" }))))
}
