use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::validation;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Garden {
    pub id: i32,
    pub name: String,
    pub owner_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Garden {
    pub async fn create(name: &str, owner_id: Option<i32>, pool: &PgPool) -> Result<Self> {
        validation::require_name("name", name)?;

        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO gardens (name, owner_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(owner_id)
        .fetch_one(pool)
        .await
        .map_err(|e| super::classify(e, || format!("user {}", owner_id.unwrap_or_default())))
    }

    pub async fn find_by_id(id: i32, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM gardens WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_ids(ids: &[i32], pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM gardens WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_owner_ids(owner_ids: &[i32], pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM gardens WHERE owner_id = ANY($1) ORDER BY id ASC",
        )
        .bind(owner_ids)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM gardens ORDER BY id ASC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Delete a garden and, through the foreign key, all of its beds.
    /// Returns whether a row was removed.
    pub async fn delete(id: i32, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM gardens WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
