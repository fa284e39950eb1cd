use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};

use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::repositories::WorkoutRepository;

#[derive(Clone)]
pub struct DashboardState {
    pub workout_repo: WorkoutRepository,
}

#[derive(Template)]
#[template(path = "dashboard/index.html")]
struct DashboardTemplate {
    user: AuthUser,
    workout_count: i64,
    total_calories: i64,
}

pub async fn index(State(state): State<DashboardState>, auth_user: AuthUser) -> Result<Response> {
    let (workout_count, total_calories) = state
        .workout_repo
        .totals_by_username(&auth_user.username)
        .await?;

    let template = DashboardTemplate {
        user: auth_user,
        workout_count,
        total_calories,
    };

    Ok(Html(template.render().map_err(|e| AppError::Internal(e.to_string()))?).into_response())
}
