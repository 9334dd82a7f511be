use async_graphql::*;
use tracing::info;

use crate::graphql::context::Identity;
use crate::graphql::error;
use super::types::GqlGarden;

#[derive(Default)]
pub struct GardenMutation;

#[Object]
impl GardenMutation {
    /// Create a garden. Without an explicit `ownerId` the garden belongs to
    /// the authenticated requester, if any.
    async fn create_garden(
        &self,
        ctx: &Context<'_>,
        name: String,
        owner_id: Option<i32>,
    ) -> Result<GqlGarden> {
        let pool = ctx.data_unchecked::<sqlx::PgPool>();
        let identity = ctx.data_opt::<Identity>().copied().unwrap_or_default();
        let owner_id = owner_id.or(identity.0);

        let garden = garden_domains::Garden::create(&name, owner_id, pool)
            .await
            .map_err(error::from_domain)?;

        info!(garden_id = garden.id, ?owner_id, "garden created");
        Ok(GqlGarden::from(garden))
    }

    /// Delete a garden together with its beds. False if nothing was deleted.
    async fn delete_garden(&self, ctx: &Context<'_>, id: i32) -> Result<bool> {
        let pool = ctx.data_unchecked::<sqlx::PgPool>();
        let deleted = garden_domains::Garden::delete(id, pool)
            .await
            .map_err(error::from_domain)?;
        if deleted {
            info!(garden_id = id, "garden deleted");
        }
        Ok(deleted)
    }
}
