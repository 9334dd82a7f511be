use async_graphql::dataloader::Loader;
use std::collections::HashMap;
use std::sync::Arc;

use garden_domains::{Bed, Garden, Section, User, Variety};

use super::beds::types::GqlBed;
use super::gardens::types::GqlGarden;
use super::sections::types::GqlSection;
use super::users::types::GqlUser;
use super::varieties::types::GqlVariety;

fn group_by<T, V>(rows: Vec<T>, key: impl Fn(&T) -> i32, value: impl Fn(T) -> V) -> HashMap<i32, Vec<V>> {
    let mut map: HashMap<i32, Vec<V>> = HashMap::new();
    for row in rows {
        map.entry(key(&row)).or_default().push(value(row));
    }
    map
}

// ─── Garden by ID ────────────────────────────────────────────────────────────

pub struct GardenByIdLoader {
    pub pool: sqlx::PgPool,
}

impl Loader<i32> for GardenByIdLoader {
    type Value = GqlGarden;
    type Error = Arc<anyhow::Error>;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        let rows = Garden::find_by_ids(keys, &self.pool).await.map_err(Arc::new)?;
        Ok(rows.into_iter().map(|g| (g.id, GqlGarden::from(g))).collect())
    }
}

// ─── Bed by ID ───────────────────────────────────────────────────────────────

pub struct BedByIdLoader {
    pub pool: sqlx::PgPool,
}

impl Loader<i32> for BedByIdLoader {
    type Value = GqlBed;
    type Error = Arc<anyhow::Error>;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        let rows = Bed::find_by_ids(keys, &self.pool).await.map_err(Arc::new)?;
        Ok(rows.into_iter().map(|b| (b.id, GqlBed::from(b))).collect())
    }
}

// ─── User by ID ──────────────────────────────────────────────────────────────

pub struct UserByIdLoader {
    pub pool: sqlx::PgPool,
}

impl Loader<i32> for UserByIdLoader {
    type Value = GqlUser;
    type Error = Arc<anyhow::Error>;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        let rows = User::find_by_ids(keys, &self.pool).await.map_err(Arc::new)?;
        Ok(rows.into_iter().map(|u| (u.id, GqlUser::from(u))).collect())
    }
}

// ─── Variety by ID ───────────────────────────────────────────────────────────

pub struct VarietyByIdLoader {
    pub pool: sqlx::PgPool,
}

impl Loader<i32> for VarietyByIdLoader {
    type Value = GqlVariety;
    type Error = Arc<anyhow::Error>;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        let rows = Variety::find_by_ids(keys, &self.pool).await.map_err(Arc::new)?;
        Ok(rows.into_iter().map(|v| (v.id, GqlVariety::from(v))).collect())
    }
}

// ─── Beds for garden ─────────────────────────────────────────────────────────

pub struct BedsForGardenLoader {
    pub pool: sqlx::PgPool,
}

impl Loader<i32> for BedsForGardenLoader {
    type Value = Vec<GqlBed>;
    type Error = Arc<anyhow::Error>;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        let rows = Bed::find_by_garden_ids(keys, &self.pool)
            .await
            .map_err(Arc::new)?;
        Ok(group_by(rows, |b| b.garden_id, GqlBed::from))
    }
}

// ─── Sections for bed ────────────────────────────────────────────────────────

pub struct SectionsForBedLoader {
    pub pool: sqlx::PgPool,
}

impl Loader<i32> for SectionsForBedLoader {
    type Value = Vec<GqlSection>;
    type Error = Arc<anyhow::Error>;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        let rows = Section::find_by_bed_ids(keys, &self.pool)
            .await
            .map_err(Arc::new)?;
        Ok(group_by(rows, |s| s.bed_id, GqlSection::from))
    }
}

// ─── Gardens for owner ───────────────────────────────────────────────────────

pub struct GardensForOwnerLoader {
    pub pool: sqlx::PgPool,
}

impl Loader<i32> for GardensForOwnerLoader {
    type Value = Vec<GqlGarden>;
    type Error = Arc<anyhow::Error>;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        let rows = Garden::find_by_owner_ids(keys, &self.pool)
            .await
            .map_err(Arc::new)?;
        let mut map: HashMap<i32, Vec<GqlGarden>> = HashMap::new();
        for garden in rows {
            if let Some(owner_id) = garden.owner_id {
                map.entry(owner_id).or_default().push(GqlGarden::from(garden));
            }
        }
        Ok(map)
    }
}
