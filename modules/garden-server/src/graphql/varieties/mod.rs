pub mod mutations;
pub mod types;

use async_graphql::*;

use crate::graphql::error;
use types::GqlVariety;

#[derive(Default)]
pub struct VarietyQuery;

#[Object]
impl VarietyQuery {
    async fn variety(&self, ctx: &Context<'_>, id: i32) -> Result<Option<GqlVariety>> {
        let pool = ctx.data_unchecked::<sqlx::PgPool>();
        let variety = garden_domains::Variety::find_by_id(id, pool)
            .await
            .map_err(error::from_domain)?;
        Ok(variety.map(GqlVariety::from))
    }

    /// All varieties, alphabetical.
    async fn varieties(&self, ctx: &Context<'_>) -> Result<Vec<GqlVariety>> {
        let pool = ctx.data_unchecked::<sqlx::PgPool>();
        let varieties = garden_domains::Variety::list_all(pool)
            .await
            .map_err(error::from_domain)?;
        Ok(varieties.into_iter().map(GqlVariety::from).collect())
    }
}
