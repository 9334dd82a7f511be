use async_graphql::*;
use tracing::info;

use crate::graphql::error;
use super::types::{GqlBed, UpdateBedDimensionsInput};

#[derive(Default)]
pub struct BedMutation;

#[Object]
impl BedMutation {
    /// Null (with an error attached) if the bed could not be created.
    async fn create_bed(
        &self,
        ctx: &Context<'_>,
        garden_id: i32,
        name: String,
        length: Option<i32>,
        width: Option<i32>,
        unit_of_measurement: Option<String>,
    ) -> Result<Option<GqlBed>> {
        let pool = ctx.data_unchecked::<sqlx::PgPool>();

        let bed = garden_domains::Bed::create(
            garden_id,
            &name,
            length,
            width,
            unit_of_measurement.as_deref(),
            pool,
        )
        .await
        .map_err(error::from_domain)?;

        info!(bed_id = bed.id, garden_id, "bed created");
        Ok(Some(GqlBed::from(bed)))
    }

    /// Returns null if no bed has the given id.
    async fn update_bed_dimensions(
        &self,
        ctx: &Context<'_>,
        input: UpdateBedDimensionsInput,
    ) -> Result<Option<GqlBed>> {
        let pool = ctx.data_unchecked::<sqlx::PgPool>();

        let bed = garden_domains::Bed::update_dimensions(
            input.id,
            input.length,
            input.width,
            &input.unit_of_measurement,
            pool,
        )
        .await
        .map_err(error::from_domain)?;

        Ok(bed.map(GqlBed::from))
    }
}
