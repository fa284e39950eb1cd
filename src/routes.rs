use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::error::AppError;
use crate::handlers::{auth, dashboard, health, leaderboard, progress, reminders, workouts};
use crate::repositories::SessionRepository;

pub fn create_router(
    auth_state: auth::AuthState,
    dashboard_state: dashboard::DashboardState,
    workouts_state: workouts::WorkoutsState,
    progress_state: progress::ProgressState,
    leaderboard_state: leaderboard::LeaderboardState,
    reminders_state: reminders::RemindersState,
) -> Router {
    // `AuthUser` resolves sessions through this extension.
    let session_repo: SessionRepository = auth_state.session_repo.clone();

    Router::new()
        // Dashboard
        .route("/", get(dashboard::index))
        .with_state(dashboard_state)
        // Auth routes
        .route(
            "/auth/login",
            get(auth::login_page).post(auth::login_submit),
        )
        .route(
            "/auth/signup",
            get(auth::signup_page).post(auth::signup_submit),
        )
        .route("/auth/logout", post(auth::logout))
        .with_state(auth_state)
        // Workout routes
        .route("/workouts/new", get(workouts::new_page))
        .route("/workouts", post(workouts::create))
        .with_state(workouts_state)
        // Progress routes
        .route("/progress", get(progress::index))
        .route("/progress/data", get(progress::data))
        .route("/progress/export", get(progress::export))
        .with_state(progress_state)
        // Leaderboard
        .route("/leaderboard", get(leaderboard::index))
        .with_state(leaderboard_state)
        // Reminder routes
        .route("/reminders/new", get(reminders::new_page))
        .route(
            "/reminders",
            get(reminders::list).post(reminders::create),
        )
        .with_state(reminders_state)
        .route("/health", get(health::health_check))
        .fallback(not_found)
        .layer(Extension(session_repo))
}

async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}
