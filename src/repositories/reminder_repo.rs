use chrono::{NaiveTime, Utc};

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, Reminder};

#[derive(Clone)]
pub struct ReminderRepository {
    pool: DbPool,
}

impl ReminderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Append a reminder to the user's list. Returns `false` without writing
    /// anything when no user has that username.
    pub async fn append(&self, username: &str, text: &str, time: NaiveTime) -> Result<bool> {
        let pool = self.pool.clone();
        let username = username.to_string();
        let text = text.to_string();
        let now = Utc::now();

        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute(
                "INSERT INTO reminders (username, text, time, created_at)
                 SELECT ?1, ?2, ?3, ?4
                 WHERE EXISTS (SELECT 1 FROM users WHERE username = ?1)",
                rusqlite::params![username, text, time, now],
            )?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Every reminder for a user in the order it was set.
    pub async fn find_by_username(&self, username: &str) -> Result<Vec<Reminder>> {
        let pool = self.pool.clone();
        let username = username.to_string();

        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM reminders WHERE username = ? ORDER BY id")?;
            let reminders = stmt
                .query_map([&username], Reminder::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(reminders)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
