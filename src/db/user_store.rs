use std::fmt::Display;

use crate::{
    db::{self, DbPool, tables::UserTable},
    error::Result,
    models::user::{User, UserInput, UserWithBusiness},
};

/// User store for database operations
#[derive(Clone)]
pub struct UserStore {
    pool: DbPool,
}

impl UserStore {
    /// Create a new UserStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a list of all users, in table order
    pub async fn get_all_users(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM Users")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    /// Get a user by ID. IDs are bound as text: the column's INTEGER affinity
    /// matches `"5"` against 5, and a non-numeric ID matches nothing.
    pub async fn get_user_by_id(&self, id: impl Display) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM Users WHERE userID = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// First user registered under `username`, used by the login check
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM Users WHERE username = ? ORDER BY userID LIMIT 1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Every user with the name of the business it points at
    pub async fn get_users_with_business(&self) -> Result<Vec<UserWithBusiness>> {
        let users = sqlx::query_as::<_, UserWithBusiness>(
            r#"
            SELECT Users.*, Businesses.businessName
            FROM Users
            LEFT JOIN Businesses ON Users.businessID = Businesses.businessID
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Create a user stamped with the current time and return its new ID
    pub async fn create_user(&self, user: &UserInput) -> Result<i64> {
        self.insert_user(user, &db::now_iso8601()).await
    }

    /// Insert a user with an explicit `createdAt`; fixture rows keep theirs.
    pub async fn insert_user(&self, user: &UserInput, created_at: &str) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO Users (
                firstName, lastName, email, phone, address, city, state, country, postcode,
                username, password, role, createdAt, departmentName, businessID
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.first_name.as_ref())
        .bind(user.last_name.as_ref())
        .bind(user.email.as_ref())
        .bind(user.phone.as_ref())
        .bind(user.address.as_ref())
        .bind(user.city.as_ref())
        .bind(user.state.as_ref())
        .bind(user.country.as_ref())
        .bind(user.postcode.as_ref())
        .bind(user.username.as_ref())
        .bind(user.password.as_ref())
        .bind(user.role.as_ref())
        .bind(created_at)
        .bind(user.department_name.as_ref())
        .bind(user.business_id.as_ref())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Replace every mutable field of a user. Returns the number of rows
    /// changed, 0 when the ID does not exist.
    pub async fn update_user(&self, id: impl Display, user: &UserInput) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE Users
            SET firstName = ?, lastName = ?, email = ?, phone = ?, address = ?, city = ?,
                state = ?, country = ?, postcode = ?, username = ?, password = ?, role = ?,
                departmentName = ?, businessID = ?
            WHERE userID = ?
            "#,
        )
        .bind(user.first_name.as_ref())
        .bind(user.last_name.as_ref())
        .bind(user.email.as_ref())
        .bind(user.phone.as_ref())
        .bind(user.address.as_ref())
        .bind(user.city.as_ref())
        .bind(user.state.as_ref())
        .bind(user.country.as_ref())
        .bind(user.postcode.as_ref())
        .bind(user.username.as_ref())
        .bind(user.password.as_ref())
        .bind(user.role.as_ref())
        .bind(user.department_name.as_ref())
        .bind(user.business_id.as_ref())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a user by ID
    pub async fn delete_user(&self, id: impl Display) -> Result<u64> {
        let result = sqlx::query("DELETE FROM Users WHERE userID = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete all users and restart IDs at 1
    pub async fn delete_all_users(&self) -> Result<u64> {
        db::clear_table(&self.pool, UserTable::TABLE_NAME).await
    }

    pub async fn count_users(&self) -> Result<i64> {
        db::count_rows(&self.pool, UserTable::TABLE_NAME).await
    }
}
