use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::validation;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Section {
    pub id: i32,
    pub name: String,
    pub bed_id: i32,
    pub variety_id: Option<i32>,
    pub length: i32,
    pub width: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Section {
    pub async fn create(
        bed_id: i32,
        name: &str,
        length: Option<i32>,
        width: Option<i32>,
        variety_id: Option<i32>,
        pool: &PgPool,
    ) -> Result<Self> {
        validation::require_name("name", name)?;
        validation::dimensions(length, width, None)?;

        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO sections (bed_id, name, length, width, variety_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(bed_id)
        .bind(name)
        .bind(length.unwrap_or(0))
        .bind(width.unwrap_or(0))
        .bind(variety_id)
        .fetch_one(pool)
        .await
        .map_err(|e| match variety_id {
            Some(v) => super::classify(e, || format!("bed {bed_id} or variety {v}")),
            None => super::classify(e, || format!("bed {bed_id}")),
        })
    }

    pub async fn find_by_id(id: i32, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM sections WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_bed_ids(bed_ids: &[i32], pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM sections WHERE bed_id = ANY($1) ORDER BY id ASC")
            .bind(bed_ids)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM sections ORDER BY id ASC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }
}
