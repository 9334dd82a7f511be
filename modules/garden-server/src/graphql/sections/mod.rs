pub mod mutations;
pub mod types;

use async_graphql::*;

use crate::graphql::error;
use types::GqlSection;

#[derive(Default)]
pub struct SectionQuery;

#[Object]
impl SectionQuery {
    async fn section(&self, ctx: &Context<'_>, id: i32) -> Result<Option<GqlSection>> {
        let pool = ctx.data_unchecked::<sqlx::PgPool>();
        let section = garden_domains::Section::find_by_id(id, pool)
            .await
            .map_err(error::from_domain)?;
        Ok(section.map(GqlSection::from))
    }

    async fn sections(&self, ctx: &Context<'_>) -> Result<Vec<GqlSection>> {
        let pool = ctx.data_unchecked::<sqlx::PgPool>();
        let sections = garden_domains::Section::list_all(pool)
            .await
            .map_err(error::from_domain)?;
        Ok(sections.into_iter().map(GqlSection::from).collect())
    }
}
