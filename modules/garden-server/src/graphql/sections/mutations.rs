use async_graphql::*;

use crate::graphql::error;
use super::types::{CreateSectionInput, GqlSection};

#[derive(Default)]
pub struct SectionMutation;

#[Object]
impl SectionMutation {
    async fn create_section(
        &self,
        ctx: &Context<'_>,
        input: CreateSectionInput,
    ) -> Result<GqlSection> {
        let pool = ctx.data_unchecked::<sqlx::PgPool>();

        let section = garden_domains::Section::create(
            input.bed_id,
            &input.name,
            input.length,
            input.width,
            input.variety_id,
            pool,
        )
        .await
        .map_err(error::from_domain)?;

        Ok(GqlSection::from(section))
    }
}
