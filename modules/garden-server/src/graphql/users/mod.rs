pub mod mutations;
pub mod types;

use async_graphql::*;

use crate::graphql::context::Identity;
use crate::graphql::error;
use types::GqlUser;

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// The user identified by the request's bearer token.
    async fn me(&self, ctx: &Context<'_>) -> Result<Option<GqlUser>> {
        let Some(user_id) = ctx.data_opt::<Identity>().and_then(|i| i.0) else {
            return Ok(None);
        };
        let pool = ctx.data_unchecked::<sqlx::PgPool>();
        let user = garden_domains::User::find_by_id(user_id, pool)
            .await
            .map_err(error::from_domain)?;
        Ok(user.map(GqlUser::from))
    }

    async fn user(&self, ctx: &Context<'_>, id: i32) -> Result<Option<GqlUser>> {
        let pool = ctx.data_unchecked::<sqlx::PgPool>();
        let user = garden_domains::User::find_by_id(id, pool)
            .await
            .map_err(error::from_domain)?;
        Ok(user.map(GqlUser::from))
    }

    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<GqlUser>> {
        let pool = ctx.data_unchecked::<sqlx::PgPool>();
        let users = garden_domains::User::list_all(pool)
            .await
            .map_err(error::from_domain)?;
        Ok(users.into_iter().map(GqlUser::from).collect())
    }
}
