#![allow(dead_code)]

use axum::{body::Body, http::Response, Router};
use http_body_util::BodyExt;

use fittrack::db::{create_memory_pool, DbPool};
use fittrack::handlers::{auth, dashboard, leaderboard, progress, reminders, workouts};
use fittrack::migrations::run_migrations_for_tests;
use fittrack::models::{User, Workout, WorkoutType};
use fittrack::repositories::{
    ReminderRepository, SessionRepository, UserRepository, WorkoutRepository,
};

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn create_test_app(pool: DbPool) -> Router {
    let user_repo = UserRepository::new(pool.clone());
    let workout_repo = WorkoutRepository::new(pool.clone());
    let reminder_repo = ReminderRepository::new(pool.clone());
    let session_repo = SessionRepository::new(pool);

    fittrack::routes::create_router(
        auth::AuthState {
            user_repo,
            session_repo,
        },
        dashboard::DashboardState {
            workout_repo: workout_repo.clone(),
        },
        workouts::WorkoutsState {
            workout_repo: workout_repo.clone(),
        },
        progress::ProgressState {
            workout_repo: workout_repo.clone(),
        },
        leaderboard::LeaderboardState { workout_repo },
        reminders::RemindersState { reminder_repo },
    )
}

pub async fn create_test_user(pool: &DbPool, username: &str, password: &str) -> User {
    UserRepository::new(pool.clone())
        .create(username, password)
        .await
        .unwrap()
}

/// A `Cookie` header value for a freshly created session.
pub async fn create_session_cookie(pool: &DbPool, user: &User) -> String {
    let token = SessionRepository::new(pool.clone())
        .create(&user.id)
        .await
        .unwrap();
    format!("session={}", token)
}

/// Create a user and return it with a logged-in cookie header.
pub async fn login_as(pool: &DbPool, username: &str) -> (User, String) {
    let user = create_test_user(pool, username, "password123").await;
    let cookie = create_session_cookie(pool, &user).await;
    (user, cookie)
}

pub fn extract_cookie_header(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap_or("").to_string()
}

pub async fn create_test_workout(
    pool: &DbPool,
    username: &str,
    date: chrono::NaiveDate,
    workout_type: WorkoutType,
    duration: i64,
    calories: i64,
) -> Workout {
    WorkoutRepository::new(pool.clone())
        .create(username, date, workout_type, duration, calories)
        .await
        .unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&body).into_owned()
}
