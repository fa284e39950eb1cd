pub mod from_row;
pub mod leaderboard;
pub mod reminder;
pub mod user;
pub mod workout;

pub use from_row::FromSqliteRow;
pub use leaderboard::LeaderboardEntry;
pub use reminder::{CreateReminder, Reminder};
pub use user::{Credentials, User};
pub use workout::{
    validate_amounts, CaloriesByType, CreateWorkout, Workout, WorkoutType, MAX_CALORIES,
    MAX_DURATION, WORKOUT_TYPES,
};
