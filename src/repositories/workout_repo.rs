use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{
    validate_amounts, CaloriesByType, FromSqliteRow, LeaderboardEntry, Workout, WorkoutType,
};

#[derive(Clone)]
pub struct WorkoutRepository {
    pool: DbPool,
}

impl WorkoutRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert without checking `username` against `users`. Out-of-range
    /// duration or calories are rejected before touching the database.
    pub async fn create(
        &self,
        username: &str,
        date: NaiveDate,
        workout_type: WorkoutType,
        duration: i64,
        calories: i64,
    ) -> Result<Workout> {
        validate_amounts(duration, calories).map_err(|m| AppError::Validation(m.to_string()))?;

        let workout = Workout {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            date,
            workout_type,
            duration,
            calories,
            created_at: Utc::now(),
        };

        let pool = self.pool.clone();
        let row = workout.clone();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO workouts (id, username, date, workout_type, duration, calories, created_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
                rusqlite::params![
                    row.id,
                    row.username,
                    row.date,
                    row.workout_type,
                    row.duration,
                    row.calories,
                    row.created_at
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        Ok(workout)
    }

    /// All workouts for a user, in insertion order.
    pub async fn find_by_username(&self, username: &str) -> Result<Vec<Workout>> {
        let pool = self.pool.clone();
        let username = username.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt =
                conn.prepare("SELECT * FROM workouts WHERE username = ? ORDER BY rowid")?;
            let workouts = stmt
                .query_map([&username], Workout::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(workouts)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Returns (workout count, total calories) for a user.
    pub async fn totals_by_username(&self, username: &str) -> Result<(i64, i64)> {
        let pool = self.pool.clone();
        let username = username.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let totals = conn.query_row(
                "SELECT COUNT(*), COALESCE(SUM(calories), 0) FROM workouts WHERE username = ?",
                [&username],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )?;
            Ok(totals)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn calories_by_type(&self, username: &str) -> Result<Vec<CaloriesByType>> {
        let pool = self.pool.clone();
        let username = username.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT workout_type, SUM(calories) AS total_calories
                 FROM workouts
                 WHERE username = ?
                 GROUP BY workout_type
                 ORDER BY workout_type",
            )?;
            let totals = stmt
                .query_map([&username], CaloriesByType::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(totals)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Total calories per username across every workout, highest first.
    /// Equal totals are ordered by username.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT username, SUM(calories) AS total_calories
                 FROM workouts
                 GROUP BY username
                 ORDER BY total_calories DESC, username ASC",
            )?;
            let entries = stmt
                .query_map([], LeaderboardEntry::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(entries)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
