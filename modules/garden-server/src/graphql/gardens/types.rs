use async_graphql::dataloader::DataLoader;
use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::graphql::beds::types::GqlBed;
use crate::graphql::error;
use crate::graphql::loaders::{BedsForGardenLoader, UserByIdLoader};
use crate::graphql::users::types::GqlUser;

#[derive(SimpleObject, Clone)]
#[graphql(complex, name = "Garden")]
pub struct GqlGarden {
    pub id: i32,
    pub name: String,
    pub owner_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<garden_domains::Garden> for GqlGarden {
    fn from(g: garden_domains::Garden) -> Self {
        Self {
            id: g.id,
            name: g.name,
            owner_id: g.owner_id,
            created_at: g.created_at,
            updated_at: g.updated_at,
        }
    }
}

#[ComplexObject]
impl GqlGarden {
    async fn beds(&self, ctx: &Context<'_>) -> Result<Vec<GqlBed>> {
        let loader = ctx.data_unchecked::<DataLoader<BedsForGardenLoader>>();
        Ok(loader
            .load_one(self.id)
            .await
            .map_err(error::internal)?
            .unwrap_or_default())
    }

    async fn owner(&self, ctx: &Context<'_>) -> Result<Option<GqlUser>> {
        let Some(owner_id) = self.owner_id else {
            return Ok(None);
        };
        let loader = ctx.data_unchecked::<DataLoader<UserByIdLoader>>();
        loader.load_one(owner_id).await.map_err(error::internal)
    }
}
