use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{Workout, WorkoutType};

#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    username: &'a str,
    date: String,
    workout_type: WorkoutType,
    duration: i64,
    calories: i64,
}

/// Render workouts as UTF-8 CSV with a header row, one line per workout.
pub fn workouts_to_csv(workouts: &[Workout]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if workouts.is_empty() {
        writer.write_record(["id", "username", "date", "workout_type", "duration", "calories"])?;
    }

    for w in workouts {
        writer.serialize(CsvRow {
            id: &w.id,
            username: &w.username,
            date: w.date.format("%Y-%m-%d").to_string(),
            workout_type: w.workout_type,
            duration: w.duration,
            calories: w.calories,
        })?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// `{username}_fitness_data.csv`, with characters that cannot appear in a
/// Content-Disposition header replaced by `_`.
pub fn csv_filename(username: &str) -> String {
    let safe: String = username
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}_fitness_data.csv", safe)
}
