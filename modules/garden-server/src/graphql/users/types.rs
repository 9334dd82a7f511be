use async_graphql::dataloader::DataLoader;
use async_graphql::*;
use chrono::{DateTime, Utc};

use crate::graphql::error;
use crate::graphql::gardens::types::GqlGarden;
use crate::graphql::loaders::GardensForOwnerLoader;

#[derive(SimpleObject, Clone)]
#[graphql(complex, name = "User")]
pub struct GqlUser {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<garden_domains::User> for GqlUser {
    fn from(u: garden_domains::User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[ComplexObject]
impl GqlUser {
    async fn gardens(&self, ctx: &Context<'_>) -> Result<Vec<GqlGarden>> {
        let loader = ctx.data_unchecked::<DataLoader<GardensForOwnerLoader>>();
        Ok(loader
            .load_one(self.id)
            .await
            .map_err(error::internal)?
            .unwrap_or_default())
    }
}

/// A freshly registered user and a bearer token identifying them.
#[derive(SimpleObject)]
pub struct AuthPayload {
    pub token: String,
    pub user: GqlUser,
}
