use askama::Template;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::charts::{self, Bar, LineChart, LINE_HEIGHT, LINE_WIDTH};
use crate::error::{AppError, Result};
use crate::export::{csv_filename, workouts_to_csv};
use crate::middleware::AuthUser;
use crate::models::{CaloriesByType, Workout};
use crate::repositories::WorkoutRepository;

#[derive(Clone)]
pub struct ProgressState {
    pub workout_repo: WorkoutRepository,
}

#[derive(Template)]
#[template(path = "progress/index.html")]
struct ProgressTemplate {
    user: AuthUser,
    workouts: Vec<Workout>,
    line: LineChart,
    bars: Vec<Bar>,
    chart_width: f64,
    chart_height: f64,
}

#[derive(Serialize)]
pub struct ProgressData {
    workouts: Vec<Workout>,
    calories_by_type: Vec<CaloriesByType>,
}

pub async fn index(State(state): State<ProgressState>, auth_user: AuthUser) -> Result<Response> {
    let workouts = state
        .workout_repo
        .find_by_username(&auth_user.username)
        .await?;
    let totals = state
        .workout_repo
        .calories_by_type(&auth_user.username)
        .await?;

    let template = ProgressTemplate {
        user: auth_user,
        line: charts::calories_over_time(&workouts),
        bars: charts::calories_by_type_bars(&totals),
        workouts,
        chart_width: LINE_WIDTH,
        chart_height: LINE_HEIGHT,
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

/// Raw series behind the progress charts.
pub async fn data(
    State(state): State<ProgressState>,
    auth_user: AuthUser,
) -> Result<Json<ProgressData>> {
    let workouts = state
        .workout_repo
        .find_by_username(&auth_user.username)
        .await?;
    let calories_by_type = state
        .workout_repo
        .calories_by_type(&auth_user.username)
        .await?;

    Ok(Json(ProgressData {
        workouts,
        calories_by_type,
    }))
}

pub async fn export(State(state): State<ProgressState>, auth_user: AuthUser) -> Result<Response> {
    let workouts = state
        .workout_repo
        .find_by_username(&auth_user.username)
        .await?;
    let body = workouts_to_csv(&workouts)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        csv_filename(&auth_user.username)
    );

    tracing::debug!(username = %auth_user.username, rows = workouts.len(), "Exporting CSV");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
