use chrono::{DateTime, NaiveTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Deserializer};

use super::FromSqliteRow;

/// Deserialize a time-of-day from an `<input type="time">` field, which
/// submits `HH:MM` (or `HH:MM:SS` when a step is set).
fn deserialize_time_of_day<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone)]
pub struct Reminder {
    pub id: i64,
    pub username: String,
    pub text: String,
    pub time: NaiveTime,
    pub created_at: DateTime<Utc>,
}

impl Reminder {
    pub fn time_display(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

impl FromSqliteRow for Reminder {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            username: row.get("username")?,
            text: row.get("text")?,
            time: row.get("time")?,
            created_at: row.get("created_at")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateReminder {
    pub text: String,
    #[serde(deserialize_with = "deserialize_time_of_day")]
    pub time: NaiveTime,
}
