use async_graphql::*;
use tracing::info;

use crate::graphql::auth::jwt::JwtService;
use crate::graphql::error;
use super::types::{AuthPayload, GqlUser};

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Register a user and hand back a token whose subject is the new id.
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        username: String,
        email: Option<String>,
    ) -> Result<AuthPayload> {
        let pool = ctx.data_unchecked::<sqlx::PgPool>();
        let jwt = ctx.data_unchecked::<JwtService>();

        let user = garden_domains::User::create(&username, email.as_deref(), pool)
            .await
            .map_err(error::from_domain)?;
        let token = jwt.create_token(user.id).map_err(error::internal)?;

        info!(user_id = user.id, "user created");
        Ok(AuthPayload {
            token,
            user: GqlUser::from(user),
        })
    }
}
