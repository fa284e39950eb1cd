use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::Row;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::FromSqliteRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    Running,
    Cycling,
    Swimming,
    Yoga,
    Gym,
}

/// Options offered by the add-workout form, in display order.
pub const WORKOUT_TYPES: &[WorkoutType] = &[
    WorkoutType::Running,
    WorkoutType::Cycling,
    WorkoutType::Swimming,
    WorkoutType::Yoga,
    WorkoutType::Gym,
];

impl WorkoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
            WorkoutType::Swimming => "Swimming",
            WorkoutType::Yoga => "Yoga",
            WorkoutType::Gym => "Gym",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown workout type: {0}")]
pub struct UnknownWorkoutType(String);

impl FromStr for WorkoutType {
    type Err = UnknownWorkoutType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WORKOUT_TYPES
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownWorkoutType(s.to_string()))
    }
}

impl ToSql for WorkoutType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for WorkoutType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub username: String,
    pub date: NaiveDate,
    pub workout_type: WorkoutType,
    /// Minutes.
    pub duration: i64,
    pub calories: i64,
    pub created_at: DateTime<Utc>,
}

impl FromSqliteRow for Workout {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            username: row.get("username")?,
            date: row.get("date")?,
            workout_type: row.get("workout_type")?,
            duration: row.get("duration")?,
            calories: row.get("calories")?,
            created_at: row.get("created_at")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateWorkout {
    pub date: NaiveDate,
    pub workout_type: WorkoutType,
    pub duration: i64,
    pub calories: i64,
}

/// One day, in minutes.
pub const MAX_DURATION: i64 = 24 * 60;
pub const MAX_CALORIES: i64 = 100_000;

/// Range check shared by the form and the store. The upper bounds keep every
/// per-user `SUM(calories)` far below `i64::MAX`.
pub fn validate_amounts(duration: i64, calories: i64) -> Result<(), &'static str> {
    if duration < 1 {
        return Err("Duration must be at least 1 minute");
    }
    if duration > MAX_DURATION {
        return Err("Duration must be at most 1440 minutes");
    }
    if calories < 1 {
        return Err("Calories burned must be at least 1");
    }
    if calories > MAX_CALORIES {
        return Err("Calories burned must be at most 100000");
    }
    Ok(())
}

impl CreateWorkout {
    /// Mirrors the `min`/`max` constraints on the form inputs.
    pub fn validate(&self) -> Result<(), &'static str> {
        validate_amounts(self.duration, self.calories)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CaloriesByType {
    pub workout_type: WorkoutType,
    pub total_calories: i64,
}

impl FromSqliteRow for CaloriesByType {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            workout_type: row.get("workout_type")?,
            total_calories: row.get("total_calories")?,
        })
    }
}
