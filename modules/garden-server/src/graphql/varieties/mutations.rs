use async_graphql::*;

use crate::graphql::error;
use super::types::{CreateVarietyInput, GqlVariety};

#[derive(Default)]
pub struct VarietyMutation;

#[Object]
impl VarietyMutation {
    async fn create_variety(
        &self,
        ctx: &Context<'_>,
        input: CreateVarietyInput,
    ) -> Result<GqlVariety> {
        let pool = ctx.data_unchecked::<sqlx::PgPool>();

        let variety = garden_domains::Variety::create(
            &input.name,
            input.species.as_deref(),
            input.days_to_maturity,
            pool,
        )
        .await
        .map_err(error::from_domain)?;

        Ok(GqlVariety::from(variety))
    }
}
