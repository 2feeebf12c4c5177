//! Casting and tallying TABS/SPACES votes.

use adapters::DocumentStore;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::database::models::{Stored, Team, Vote};
use crate::database::{queries, utc_timestamp};
use crate::errors::AppError;

#[derive(Debug, Serialize)]
pub struct VoteTally {
    pub tabs_count: usize,
    pub spaces_count: usize,
    pub recent_votes: Vec<Stored<Vote>>,
}

pub async fn cast_vote(
    store: &dyn DocumentStore,
    team: &str,
    now: DateTime<Utc>,
) -> Result<Stored<Vote>, AppError> {
    let team = Team::parse(team).ok_or_else(|| AppError::InvalidInput("Invalid vote".into()))?;

    let vote = Vote {
        team,
        time_cast: utc_timestamp(now),
    };
    let id = queries::insert_vote(store, &vote).await?;

    Ok(Stored { id, record: vote })
}

pub async fn tally(store: &dyn DocumentStore, recent_limit: usize) -> Result<VoteTally, AppError> {
    Ok(VoteTally {
        tabs_count: queries::count_votes(store, Team::Tabs).await?,
        spaces_count: queries::count_votes(store, Team::Spaces).await?,
        recent_votes: queries::recent_votes(store, recent_limit).await?,
    })
}
