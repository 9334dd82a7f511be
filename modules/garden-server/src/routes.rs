use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tracing::Instrument;

use crate::graphql::auth::{jwt::JwtService, middleware};
use crate::graphql::context::Identity;
use crate::graphql::{self, AppSchema};

pub fn build_router(pool: PgPool, jwt_service: JwtService, allowed_origins: &[String]) -> Router {
    let schema = graphql::build_schema(pool, jwt_service.clone());

    let cors = if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/graphql", get(graphiql_handler).post(graphql_handler))
        .route("/health", get(health))
        .layer(cors)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
        .with_state(AppState { schema, jwt_service })
}

#[derive(Clone)]
pub struct AppState {
    schema: AppSchema,
    jwt_service: JwtService,
}

async fn graphql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let user_id = middleware::user_id_from_headers(&state.jwt_service, &headers);

    let request = req.into_inner().data(Identity(user_id));
    let response = state
        .schema
        .execute(request)
        .instrument(tracing::info_span!("graphql_request", ?user_id))
        .await;
    if !response.errors.is_empty() {
        tracing::warn!(errors = ?response.errors, "GraphQL errors");
    }
    response.into()
}

async fn graphiql_handler() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn health() -> &'static str {
    "ok"
}
