use std::fmt::Display;

use crate::{
    db::{self, DbPool, tables::LogTable},
    error::Result,
    models::log::{Log, LogInput, LogWithDetails},
};

/// Store for the contact log
#[derive(Clone)]
pub struct LogStore {
    pool: DbPool,
}

impl LogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn get_all_logs(&self) -> Result<Vec<Log>> {
        let logs = sqlx::query_as::<_, Log>("SELECT * FROM Logs")
            .fetch_all(&self.pool)
            .await?;

        Ok(logs)
    }

    pub async fn get_log_by_id(&self, id: impl Display) -> Result<Option<Log>> {
        let log = sqlx::query_as::<_, Log>("SELECT * FROM Logs WHERE logID = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(log)
    }

    /// Every log with the business name and the recording user's name
    pub async fn get_logs_with_details(&self) -> Result<Vec<LogWithDetails>> {
        let logs = sqlx::query_as::<_, LogWithDetails>(
            r#"
            SELECT Logs.*,
                   Businesses.businessName,
                   Users.firstName,
                   Users.lastName,
                   Users.username
            FROM Logs
            LEFT JOIN Businesses ON Logs.businessID = Businesses.businessID
            LEFT JOIN Users ON Logs.userID = Users.userID
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    pub async fn create_log(&self, log: &LogInput) -> Result<i64> {
        self.insert_log(log, &db::now_iso8601()).await
    }

    pub async fn insert_log(&self, log: &LogInput, created_at: &str) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO Logs (businessID, userID, logDate, logType, notes, createdAt)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(log.business_id.as_ref())
        .bind(log.user_id.as_ref())
        .bind(log.log_date.as_ref())
        .bind(log.log_type.as_ref())
        .bind(log.notes.as_ref())
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn update_log(&self, id: impl Display, log: &LogInput) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE Logs
            SET businessID = ?, userID = ?, logDate = ?, logType = ?, notes = ?
            WHERE logID = ?
            "#,
        )
        .bind(log.business_id.as_ref())
        .bind(log.user_id.as_ref())
        .bind(log.log_date.as_ref())
        .bind(log.log_type.as_ref())
        .bind(log.notes.as_ref())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_log(&self, id: impl Display) -> Result<u64> {
        let result = sqlx::query("DELETE FROM Logs WHERE logID = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_all_logs(&self) -> Result<u64> {
        db::clear_table(&self.pool, LogTable::TABLE_NAME).await
    }

    pub async fn count_logs(&self) -> Result<i64> {
        db::count_rows(&self.pool, LogTable::TABLE_NAME).await
    }
}
