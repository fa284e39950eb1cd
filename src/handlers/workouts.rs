use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form,
};
use chrono::NaiveDate;

use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::models::{CreateWorkout, WorkoutType, MAX_CALORIES, MAX_DURATION, WORKOUT_TYPES};
use crate::repositories::WorkoutRepository;

#[derive(Clone)]
pub struct WorkoutsState {
    pub workout_repo: WorkoutRepository,
}

#[derive(Template)]
#[template(path = "workouts/new.html")]
struct NewWorkoutTemplate {
    user: AuthUser,
    today: NaiveDate,
    workout_types: &'static [WorkoutType],
    max_duration: i64,
    max_calories: i64,
    error: Option<String>,
    success: Option<String>,
}

fn render_form(
    user: AuthUser,
    error: Option<&str>,
    success: Option<&str>,
) -> Result<Response> {
    let template = NewWorkoutTemplate {
        user,
        today: chrono::Local::now().date_naive(),
        workout_types: WORKOUT_TYPES,
        max_duration: MAX_DURATION,
        max_calories: MAX_CALORIES,
        error: error.map(str::to_string),
        success: success.map(str::to_string),
    };

    Ok(Html(
        template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?,
    )
    .into_response())
}

pub async fn new_page(auth_user: AuthUser) -> Result<Response> {
    render_form(auth_user, None, None)
}

pub async fn create(
    State(state): State<WorkoutsState>,
    auth_user: AuthUser,
    Form(form): Form<CreateWorkout>,
) -> Result<Response> {
    if let Err(message) = form.validate() {
        return render_form(auth_user, Some(message), None);
    }

    let workout = state
        .workout_repo
        .create(
            &auth_user.username,
            form.date,
            form.workout_type,
            form.duration,
            form.calories,
        )
        .await?;

    tracing::debug!(
        username = %workout.username,
        workout_type = %workout.workout_type,
        calories = workout.calories,
        "Workout added"
    );

    render_form(auth_user, None, Some("Workout data added successfully!"))
}
