pub mod mutations;
pub mod types;

use async_graphql::*;

use crate::graphql::error;
use types::GqlBed;

#[derive(Default)]
pub struct BedQuery;

#[Object]
impl BedQuery {
    /// Fetch a single bed by ID. Null if absent.
    async fn bed(&self, ctx: &Context<'_>, id: i32) -> Result<Option<GqlBed>> {
        let pool = ctx.data_unchecked::<sqlx::PgPool>();
        let bed = garden_domains::Bed::find_by_id(id, pool)
            .await
            .map_err(error::from_domain)?;
        Ok(bed.map(GqlBed::from))
    }

    /// All beds, oldest first.
    async fn beds(&self, ctx: &Context<'_>) -> Result<Vec<GqlBed>> {
        let pool = ctx.data_unchecked::<sqlx::PgPool>();
        let beds = garden_domains::Bed::list_all(pool)
            .await
            .map_err(error::from_domain)?;
        Ok(beds.into_iter().map(GqlBed::from).collect())
    }
}
