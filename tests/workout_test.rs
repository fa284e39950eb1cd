mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use fittrack::error::AppError;
use fittrack::models::WorkoutType;
use fittrack::repositories::WorkoutRepository;
use tower::ServiceExt;

#[tokio::test]
async fn test_new_workout_requires_auth() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/workouts/new")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/auth/login");
}

#[tokio::test]
async fn test_new_workout_form_lists_types() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let (_user, cookie) = common::login_as(&pool, "alice").await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/workouts/new")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    for t in ["Running", "Cycling", "Swimming", "Yoga", "Gym"] {
        assert!(body.contains(&format!("<option value=\"{}\">", t)));
    }
    assert!(body.contains("max=\"1440\""));
    assert!(body.contains("max=\"100000\""));
}

#[tokio::test]
async fn test_add_workout_via_form() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let (_user, cookie) = common::login_as(&pool, "alice").await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/workouts")
                .header(header::COOKIE, &cookie)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "workout_type=Swimming&duration=40&calories=350&date=2024-06-02",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("Workout data added successfully!"));

    let workouts = WorkoutRepository::new(pool)
        .find_by_username("alice")
        .await
        .unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].workout_type, WorkoutType::Swimming);
    assert_eq!(workouts[0].duration, 40);
    assert_eq!(workouts[0].calories, 350);
    assert_eq!(workouts[0].date, common::date(2024, 6, 2));
}

#[tokio::test]
async fn test_add_workout_rejects_zero_calories() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let (_user, cookie) = common::login_as(&pool, "alice").await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/workouts")
                .header(header::COOKIE, &cookie)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "workout_type=Gym&duration=30&calories=0&date=2024-06-02",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("Calories burned must be at least 1"));

    let workouts = WorkoutRepository::new(pool)
        .find_by_username("alice")
        .await
        .unwrap();
    assert!(workouts.is_empty());
}

#[tokio::test]
async fn test_add_workout_rejects_huge_calories_and_progress_still_renders() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let (_user, cookie) = common::login_as(&pool, "alice").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/workouts")
                .header(header::COOKIE, &cookie)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "workout_type=Running&duration=30&calories=100000000000000000&date=2024-06-02",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("Calories burned must be at most 100000"));
    assert!(!body.contains("Workout data added successfully!"));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/progress")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("No workout data available."));
}

#[tokio::test]
async fn test_add_workout_rejects_duration_over_a_day() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let (_user, cookie) = common::login_as(&pool, "alice").await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/workouts")
                .header(header::COOKIE, &cookie)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "workout_type=Yoga&duration=1441&calories=100&date=2024-06-02",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    let body = common::body_string(response).await;
    assert!(body.contains("Duration must be at most 1440 minutes"));

    let workouts = WorkoutRepository::new(pool)
        .find_by_username("alice")
        .await
        .unwrap();
    assert!(workouts.is_empty());
}

#[tokio::test]
async fn test_repository_rejects_out_of_range_amounts() {
    let pool = common::setup_test_db();
    let repo = WorkoutRepository::new(pool);

    let result = repo
        .create("alice", common::date(2024, 1, 1), WorkoutType::Gym, 30, i64::MAX)
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(repo.find_by_username("alice").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_workout_rejects_unknown_type() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let (_user, cookie) = common::login_as(&pool, "alice").await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/workouts")
                .header(header::COOKIE, &cookie)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "workout_type=Curling&duration=30&calories=100&date=2024-06-02",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_get_user_data_returns_exactly_inserted_workouts() {
    let pool = common::setup_test_db();
    let repo = WorkoutRepository::new(pool.clone());

    let inserted = vec![
        (common::date(2024, 1, 3), WorkoutType::Running, 30, 300),
        (common::date(2024, 1, 1), WorkoutType::Yoga, 60, 180),
        (common::date(2024, 1, 2), WorkoutType::Gym, 45, 400),
    ];
    for (date, workout_type, duration, calories) in &inserted {
        repo.create("alice", *date, *workout_type, *duration, *calories)
            .await
            .unwrap();
    }
    // Someone else's workout must not leak in.
    repo.create("bob", common::date(2024, 1, 1), WorkoutType::Cycling, 20, 90)
        .await
        .unwrap();

    let workouts = repo.find_by_username("alice").await.unwrap();

    assert_eq!(workouts.len(), inserted.len());
    for (workout, (date, workout_type, duration, calories)) in workouts.iter().zip(&inserted) {
        assert_eq!(workout.username, "alice");
        assert_eq!(workout.date, *date);
        assert_eq!(workout.workout_type, *workout_type);
        assert_eq!(workout.duration, *duration);
        assert_eq!(workout.calories, *calories);
    }
}

#[tokio::test]
async fn test_workouts_for_unknown_username_are_stored() {
    let pool = common::setup_test_db();
    let repo = WorkoutRepository::new(pool);

    repo.create("nobody", common::date(2024, 2, 1), WorkoutType::Running, 10, 50)
        .await
        .unwrap();

    assert_eq!(repo.find_by_username("nobody").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_dashboard_shows_totals() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());
    let (_user, cookie) = common::login_as(&pool, "alice").await;

    common::create_test_workout(&pool, "alice", common::date(2024, 3, 1), WorkoutType::Running, 30, 250).await;
    common::create_test_workout(&pool, "alice", common::date(2024, 3, 2), WorkoutType::Yoga, 50, 125).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = common::body_string(response).await;
    assert!(body.contains("logged 2 workouts and burned 375 calories"));
}
