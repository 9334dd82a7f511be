use async_graphql::dataloader::DataLoader;
use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::graphql::beds::types::GqlBed;
use crate::graphql::error;
use crate::graphql::loaders::{BedByIdLoader, VarietyByIdLoader};
use crate::graphql::varieties::types::GqlVariety;

#[derive(SimpleObject, Clone)]
#[graphql(complex, name = "Section")]
pub struct GqlSection {
    pub id: i32,
    pub name: String,
    pub bed_id: i32,
    pub variety_id: Option<i32>,
    pub length: i32,
    pub width: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<garden_domains::Section> for GqlSection {
    fn from(s: garden_domains::Section) -> Self {
        Self {
            id: s.id,
            name: s.name,
            bed_id: s.bed_id,
            variety_id: s.variety_id,
            length: s.length,
            width: s.width,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[ComplexObject]
impl GqlSection {
    async fn bed(&self, ctx: &Context<'_>) -> Result<Option<GqlBed>> {
        let loader = ctx.data_unchecked::<DataLoader<BedByIdLoader>>();
        loader.load_one(self.bed_id).await.map_err(error::internal)
    }

    async fn variety(&self, ctx: &Context<'_>) -> Result<Option<GqlVariety>> {
        let Some(variety_id) = self.variety_id else {
            return Ok(None);
        };
        let loader = ctx.data_unchecked::<DataLoader<VarietyByIdLoader>>();
        loader.load_one(variety_id).await.map_err(error::internal)
    }
}

#[derive(InputObject)]
pub struct CreateSectionInput {
    pub bed_id: i32,
    pub name: String,
    pub length: Option<i32>,
    pub width: Option<i32>,
    pub variety_id: Option<i32>,
}
