pub mod auth;
pub mod beds;
pub mod context;
pub mod error;
pub mod gardens;
pub mod hello;
pub mod loaders;
pub mod sections;
pub mod users;
pub mod varieties;

use async_graphql::dataloader::DataLoader;
use async_graphql::*;
use sqlx::PgPool;

use auth::jwt::JwtService;
use loaders::*;

/// Merged query root composing all domain query modules.
#[derive(MergedObject, Default)]
pub struct QueryRoot(
    beds::BedQuery,
    gardens::GardenQuery,
    sections::SectionQuery,
    varieties::VarietyQuery,
    users::UserQuery,
    hello::HelloQuery,
);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    beds::mutations::BedMutation,
    gardens::mutations::GardenMutation,
    sections::mutations::SectionMutation,
    varieties::mutations::VarietyMutation,
    users::mutations::UserMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Schema shape and limits, without any request data attached.
pub fn schema_builder() -> SchemaBuilder<QueryRoot, MutationRoot, EmptySubscription> {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .limit_depth(10)
        .limit_complexity(1000)
}

pub fn build_schema(pool: PgPool, jwt_service: JwtService) -> AppSchema {
    schema_builder()
        .data(pool.clone())
        .data(jwt_service)
        // DataLoaders
        .data(DataLoader::new(
            GardenByIdLoader { pool: pool.clone() },
            tokio::spawn,
        ))
        .data(DataLoader::new(
            BedByIdLoader { pool: pool.clone() },
            tokio::spawn,
        ))
        .data(DataLoader::new(
            UserByIdLoader { pool: pool.clone() },
            tokio::spawn,
        ))
        .data(DataLoader::new(
            VarietyByIdLoader { pool: pool.clone() },
            tokio::spawn,
        ))
        .data(DataLoader::new(
            BedsForGardenLoader { pool: pool.clone() },
            tokio::spawn,
        ))
        .data(DataLoader::new(
            SectionsForBedLoader { pool: pool.clone() },
            tokio::spawn,
        ))
        .data(DataLoader::new(
            GardensForOwnerLoader { pool },
            tokio::spawn,
        ))
        .finish()
}
