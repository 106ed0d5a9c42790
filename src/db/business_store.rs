use std::fmt::Display;

use crate::{
    db::{self, DbPool, tables::BusinessTable},
    error::Result,
    models::business::{Business, BusinessInput},
};

#[derive(Clone)]
pub struct BusinessStore {
    pool: DbPool,
}

impl BusinessStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn get_all_businesses(&self) -> Result<Vec<Business>> {
        let businesses = sqlx::query_as::<_, Business>("SELECT * FROM Businesses")
            .fetch_all(&self.pool)
            .await?;

        Ok(businesses)
    }

    pub async fn get_business_by_id(&self, id: impl Display) -> Result<Option<Business>> {
        let business =
            sqlx::query_as::<_, Business>("SELECT * FROM Businesses WHERE businessID = ?")
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        Ok(business)
    }

    pub async fn create_business(&self, business: &BusinessInput) -> Result<i64> {
        self.insert_business(business, &db::now_iso8601()).await
    }

    pub async fn insert_business(&self, business: &BusinessInput, created_at: &str) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO Businesses (businessName, contactType, contactDate, notes, createdAt, userID)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(business.business_name.as_ref())
        .bind(business.contact_type.as_ref())
        .bind(business.contact_date.as_ref())
        .bind(business.notes.as_ref())
        .bind(created_at)
        .bind(business.user_id.as_ref())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// `createdAt` is never touched by an update.
    pub async fn update_business(
        &self,
        id: impl Display,
        business: &BusinessInput,
    ) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE Businesses
            SET businessName = ?, contactType = ?, contactDate = ?, notes = ?, userID = ?
            WHERE businessID = ?
            "#,
        )
        .bind(business.business_name.as_ref())
        .bind(business.contact_type.as_ref())
        .bind(business.contact_date.as_ref())
        .bind(business.notes.as_ref())
        .bind(business.user_id.as_ref())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Referencing users and logs are left as they are.
    pub async fn delete_business(&self, id: impl Display) -> Result<u64> {
        let result = sqlx::query("DELETE FROM Businesses WHERE businessID = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_all_businesses(&self) -> Result<u64> {
        db::clear_table(&self.pool, BusinessTable::TABLE_NAME).await
    }

    pub async fn count_businesses(&self) -> Result<i64> {
        db::count_rows(&self.pool, BusinessTable::TABLE_NAME).await
    }
}
