use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{str::FromStr, time::Duration};

pub mod business_store;
pub mod log_store;
pub mod tables;
pub mod user_store;

use tables::{BusinessTable, LogTable, UserTable};

pub type DbPool = Pool<Sqlite>;

/// Open (creating if needed) the database file and make sure the schema exists.
pub async fn init_db_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    // Foreign keys are declared for documentation only; orphaned references
    // must survive deletes and show up as NULLs in the joined views.
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("invalid database url {database_url}"))?
        .create_if_missing(true)
        .foreign_keys(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await
        .with_context(|| format!("failed to open database {database_url}"))?;

    setup_database(&pool)
        .await
        .context("failed to create database schema")?;

    Ok(pool)
}

/// Set up the database schema. Safe to run against an existing database.
pub async fn setup_database(pool: &DbPool) -> std::result::Result<(), sqlx::Error> {
    sqlx::query(&UserTable::create_table()).execute(pool).await?;
    sqlx::query(&BusinessTable::create_table()).execute(pool).await?;
    sqlx::query(&LogTable::create_table()).execute(pool).await?;

    tracing::debug!("database schema ready");
    Ok(())
}

/// Delete every row of `table` and reset its AUTOINCREMENT counter in one
/// transaction, so either both happen or neither does.
pub(crate) async fn clear_table(pool: &DbPool, table: &str) -> crate::error::Result<u64> {
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query(&format!("DELETE FROM \"{table}\""))
        .execute(&mut *tx)
        .await?
        .rows_affected();

    sqlx::query("DELETE FROM sqlite_sequence WHERE name = ?")
        .bind(table)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(table, deleted, "table cleared and id counter reset");
    Ok(deleted)
}

pub(crate) async fn count_rows(pool: &DbPool, table: &str) -> crate::error::Result<i64> {
    let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM \"{table}\""))
        .fetch_one(pool)
        .await?;

    Ok(count.0)
}

/// Check the database answers a trivial query
pub async fn health_check(pool: &DbPool) -> crate::error::Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Current time in the `2024-01-31T12:00:00.000Z` form used for `createdAt`.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
