use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::validation;

pub const DEFAULT_UNIT_OF_MEASUREMENT: &str = "feet";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bed {
    pub id: i32,
    pub name: String,
    pub garden_id: i32,
    pub length: i32,
    pub width: i32,
    pub unit_of_measurement: String,
    pub is_active: bool,
    pub ended_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bed {
    /// Insert a bed under `garden_id`. Omitted dimensions take the column defaults.
    pub async fn create(
        garden_id: i32,
        name: &str,
        length: Option<i32>,
        width: Option<i32>,
        unit_of_measurement: Option<&str>,
        pool: &PgPool,
    ) -> Result<Self> {
        validation::require_name("name", name)?;
        validation::dimensions(length, width, unit_of_measurement)?;

        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO beds (garden_id, name, length, width, unit_of_measurement)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(garden_id)
        .bind(name)
        .bind(length.unwrap_or(0))
        .bind(width.unwrap_or(0))
        .bind(unit_of_measurement.unwrap_or(DEFAULT_UNIT_OF_MEASUREMENT))
        .fetch_one(pool)
        .await
        .map_err(|e| super::classify(e, || format!("garden {garden_id}")))
    }

    pub async fn find_by_id(id: i32, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM beds WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_name(name: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM beds WHERE name = $1 ORDER BY id LIMIT 1")
            .bind(name)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_ids(ids: &[i32], pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM beds WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_garden_ids(garden_ids: &[i32], pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM beds WHERE garden_id = ANY($1) ORDER BY id ASC")
            .bind(garden_ids)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM beds ORDER BY id ASC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Overwrite a bed's dimensions. Returns `None` if no bed has that id.
    pub async fn update_dimensions(
        id: i32,
        length: i32,
        width: i32,
        unit_of_measurement: &str,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        validation::dimensions(Some(length), Some(width), Some(unit_of_measurement))?;

        let bed = sqlx::query_as::<_, Self>(
            r#"
            UPDATE beds
            SET length = $2,
                width = $3,
                unit_of_measurement = $4,
                ended_at = now(),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(length)
        .bind(width)
        .bind(unit_of_measurement)
        .fetch_optional(pool)
        .await?;

        if bed.is_none() {
            tracing::debug!(bed_id = id, "update_dimensions: no such bed");
        }
        Ok(bed)
    }
}
