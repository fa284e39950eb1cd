pub mod auth;
pub mod dashboard;
pub mod health;
pub mod leaderboard;
pub mod progress;
pub mod reminders;
pub mod workouts;
