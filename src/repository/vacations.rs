//! Vacations repository

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::vacation::{Vacation, VacationIn},
};

#[derive(Clone)]
pub struct VacationsRepository {
    pool: Pool<Postgres>,
}

impl VacationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a vacation by ID
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Vacation>> {
        let row = sqlx::query_as::<_, Vacation>(
            r#"
            SELECT id, name, from_date, to_date, thoughts
            FROM vacations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// List all vacations, earliest start first
    pub async fn list(&self) -> AppResult<Vec<Vacation>> {
        let rows = sqlx::query_as::<_, Vacation>(
            r#"
            SELECT id, name, from_date, to_date, thoughts
            FROM vacations
            ORDER BY from_date
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a vacation and return the id the store assigned
    pub async fn insert(&self, data: &VacationIn) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO vacations (name, from_date, to_date, thoughts)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&data.name)
        .bind(data.from_date)
        .bind(data.to_date)
        .bind(&data.thoughts)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Overwrite every field of a vacation. Returns the number of rows touched.
    pub async fn update(&self, id: i32, data: &VacationIn) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE vacations
            SET name = $1
                , from_date = $2
                , to_date = $3
                , thoughts = $4
            WHERE id = $5
            "#,
        )
        .bind(&data.name)
        .bind(data.from_date)
        .bind(data.to_date)
        .bind(&data.thoughts)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a vacation. Returns the number of rows removed.
    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM vacations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
