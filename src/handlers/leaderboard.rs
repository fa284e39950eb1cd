use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};

use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::models::LeaderboardEntry;
use crate::repositories::WorkoutRepository;

#[derive(Clone)]
pub struct LeaderboardState {
    pub workout_repo: WorkoutRepository,
}

#[derive(Template)]
#[template(path = "leaderboard/index.html")]
struct LeaderboardTemplate {
    user: AuthUser,
    entries: Vec<LeaderboardEntry>,
}

pub async fn index(
    State(state): State<LeaderboardState>,
    auth_user: AuthUser,
) -> Result<Response> {
    let entries = state.workout_repo.leaderboard().await?;

    let template = LeaderboardTemplate {
        user: auth_user,
        entries,
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}
