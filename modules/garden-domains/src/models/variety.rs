use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::validation;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Variety {
    pub id: i32,
    pub name: String,
    pub species: Option<String>,
    pub days_to_maturity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Variety {
    pub async fn create(
        name: &str,
        species: Option<&str>,
        days_to_maturity: Option<i32>,
        pool: &PgPool,
    ) -> Result<Self> {
        validation::require_name("name", name)?;
        validation::require_non_negative("daysToMaturity", days_to_maturity)?;

        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO varieties (name, species, days_to_maturity)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(species)
        .bind(days_to_maturity)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: i32, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM varieties WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_ids(ids: &[i32], pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM varieties WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM varieties ORDER BY name ASC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }
}
