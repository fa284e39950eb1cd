use rusqlite::Row;
use serde::Serialize;

use super::FromSqliteRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub total_calories: i64,
}

impl FromSqliteRow for LeaderboardEntry {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            username: row.get("username")?,
            total_calories: row.get("total_calories")?,
        })
    }
}
