pub mod mutations;
pub mod types;

use async_graphql::*;

use crate::graphql::error;
use types::GqlGarden;

#[derive(Default)]
pub struct GardenQuery;

#[Object]
impl GardenQuery {
    async fn garden(&self, ctx: &Context<'_>, id: i32) -> Result<Option<GqlGarden>> {
        let pool = ctx.data_unchecked::<sqlx::PgPool>();
        let garden = garden_domains::Garden::find_by_id(id, pool)
            .await
            .map_err(error::from_domain)?;
        Ok(garden.map(GqlGarden::from))
    }

    async fn gardens(&self, ctx: &Context<'_>) -> Result<Vec<GqlGarden>> {
        let pool = ctx.data_unchecked::<sqlx::PgPool>();
        let gardens = garden_domains::Garden::list_all(pool)
            .await
            .map_err(error::from_domain)?;
        Ok(gardens.into_iter().map(GqlGarden::from).collect())
    }
}
