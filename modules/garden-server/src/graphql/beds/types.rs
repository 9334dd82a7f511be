use async_graphql::dataloader::DataLoader;
use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::graphql::error;
use crate::graphql::gardens::types::GqlGarden;
use crate::graphql::loaders::{GardenByIdLoader, SectionsForBedLoader};
use crate::graphql::sections::types::GqlSection;

#[derive(SimpleObject, Clone)]
#[graphql(complex, name = "Bed")]
pub struct GqlBed {
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

impl From<garden_domains::Bed> for GqlBed {
    fn from(b: garden_domains::Bed) -> Self {
        Self {
            id: b.id,
            name: b.name,
            garden_id: b.garden_id,
            length: b.length,
            width: b.width,
            unit_of_measurement: b.unit_of_measurement,
            is_active: b.is_active,
            ended_at: b.ended_at,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

#[ComplexObject]
impl GqlBed {
    async fn garden(&self, ctx: &Context<'_>) -> Result<Option<GqlGarden>> {
        let loader = ctx.data_unchecked::<DataLoader<GardenByIdLoader>>();
        loader.load_one(self.garden_id).await.map_err(error::internal)
    }

    async fn sections(&self, ctx: &Context<'_>) -> Result<Vec<GqlSection>> {
        let loader = ctx.data_unchecked::<DataLoader<SectionsForBedLoader>>();
        Ok(loader
            .load_one(self.id)
            .await
            .map_err(error::internal)?
            .unwrap_or_default())
    }
}

/// Replacement dimensions for an existing bed.
#[derive(InputObject)]
pub struct UpdateBedDimensionsInput {
    pub id: i32,
    pub length: i32,
    pub width: i32,
    pub unit_of_measurement: String,
}
