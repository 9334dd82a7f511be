#![cfg(feature = "test-utils")]

//! Resolver tests running GraphQL operations against a real Postgres.
//!
//! Requirements: Docker (for Postgres via testcontainers)
//!
//! Run with: cargo test -p garden-server --features test-utils --test bed_resolver_test

use async_graphql::{Request, Response, Variables};
use serde_json::{json, Value};
use sqlx::PgPool;

use garden_domains::testutil::{
    create_bed_in_database, create_garden, create_user, postgres_container, unique_name,
};
use garden_domains::{Bed, Garden};
use garden_server::graphql::auth::jwt::JwtService;
use garden_server::graphql::context::Identity;
use garden_server::graphql::{build_schema, AppSchema};

const BED_QUERY: &str = r#"
query Bed($id: Int!) {
  bed(id: $id) {
    name
  }
}
"#;

const BEDS_QUERY: &str = r#"
query Beds {
  beds {
    name
  }
}
"#;

const CREATE_BED_MUTATION: &str = r#"
mutation CreateBed($gardenId: Int!, $name: String!, $length: Int!, $width: Int!, $unitOfMeasurement: String!) {
  createBed(gardenId: $gardenId, name: $name, length: $length, width: $width, unitOfMeasurement: $unitOfMeasurement) {
    name
    length
    width
    unitOfMeasurement
  }
}
"#;

const UPDATE_BED_DIMENSIONS_MUTATION: &str = r#"
mutation UpdateBedDimensions($input: UpdateBedDimensionsInput!) {
  updateBedDimensions(input: $input) {
    id
    length
    width
    unitOfMeasurement
  }
}
"#;

struct Fixture {
    _container: Box<dyn std::any::Any + Send>,
    pool: PgPool,
    schema: AppSchema,
    jwt: JwtService,
    garden: Garden,
    bed: Bed,
    token: String,
}

async fn setup() -> Fixture {
    let (container, pool) = postgres_container().await;
    let jwt = JwtService::new("test-secret", "garden-planner".to_string());
    let schema = build_schema(pool.clone(), jwt.clone());

    let owner = create_user(&pool).await;
    let garden = create_garden(&owner, &pool).await;
    let bed = create_bed_in_database(&garden, &unique_name("bed"), &pool).await;
    let token = jwt.create_token(bed.garden_id).unwrap();

    Fixture {
        _container: Box::new(container),
        pool,
        schema,
        jwt,
        garden,
        bed,
        token,
    }
}

impl Fixture {
    async fn call_graphql(&self, source: &str, variables: Value) -> Response {
        let identity = Identity(self.jwt.subject_id(&self.token));
        let request = Request::new(source)
            .variables(Variables::from_json(variables))
            .data(identity);
        self.schema.execute(request).await
    }
}

fn data(response: Response) -> Value {
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    response.data.into_json().unwrap()
}

#[tokio::test]
async fn bed_query_returns_the_name_of_an_existing_bed() {
    let fx = setup().await;
    let res = fx.call_graphql(BED_QUERY, json!({ "id": fx.bed.id })).await;
    assert_eq!(data(res)["bed"]["name"], fx.bed.name.as_str());
}

#[tokio::test]
async fn bed_query_returns_null_for_a_nonexistent_id() {
    let fx = setup().await;
    let res = fx.call_graphql(BED_QUERY, json!({ "id": 666 })).await;
    assert_eq!(data(res)["bed"], Value::Null);
}

#[tokio::test]
async fn beds_query_lists_created_beds() {
    let fx = setup().await;
    let second = create_bed_in_database(&fx.garden, &unique_name("bed"), &fx.pool).await;

    let res = fx.call_graphql(BEDS_QUERY, json!({})).await;
    let beds = data(res)["beds"].as_array().cloned().unwrap();

    assert!(beds.contains(&json!({ "name": fx.bed.name })));
    assert!(beds.contains(&json!({ "name": second.name })));
}

#[tokio::test]
async fn create_bed_inserts_and_echoes_the_name() {
    let fx = setup().await;
    let name = unique_name("new-bed");

    let res = fx
        .call_graphql(
            CREATE_BED_MUTATION,
            json!({
                "gardenId": fx.bed.garden_id,
                "name": name,
                "length": fx.bed.length,
                "width": fx.bed.width,
                "unitOfMeasurement": fx.bed.unit_of_measurement,
            }),
        )
        .await;

    let created = data(res);
    assert_eq!(created["createBed"]["name"], name.as_str());
    assert_eq!(created["createBed"]["unitOfMeasurement"], "feet");

    let stored = Bed::find_by_name(&name, &fx.pool).await.unwrap();
    assert!(stored.is_some());
}

#[tokio::test]
async fn create_bed_for_unknown_garden_is_not_found() {
    let fx = setup().await;
    let res = fx
        .call_graphql(
            r#"mutation { createBed(gardenId: 666, name: "Nowhere") { id } }"#,
            json!({}),
        )
        .await;
    assert_eq!(res.errors.len(), 1);
    let err = serde_json::to_value(&res.errors[0]).unwrap();
    assert_eq!(err["extensions"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn update_bed_dimensions_changes_the_stored_bed() {
    let fx = setup().await;

    let res = fx
        .call_graphql(
            UPDATE_BED_DIMENSIONS_MUTATION,
            json!({
                "input": {
                    "id": fx.bed.id,
                    "length": 3,
                    "width": 3,
                    "unitOfMeasurement": "cm",
                }
            }),
        )
        .await;
    let updated = data(res);

    let stored = Bed::find_by_id(fx.bed.id, &fx.pool).await.unwrap().unwrap();
    assert_eq!(stored.length, 3);
    assert_eq!(stored.width, 3);
    assert_eq!(stored.unit_of_measurement, "cm");

    assert_eq!(updated["updateBedDimensions"]["length"], 3);
    assert_eq!(updated["updateBedDimensions"]["width"], 3);
    assert_eq!(updated["updateBedDimensions"]["unitOfMeasurement"], "cm");
}

#[tokio::test]
async fn update_bed_dimensions_of_missing_bed_is_null() {
    let fx = setup().await;
    let res = fx
        .call_graphql(
            UPDATE_BED_DIMENSIONS_MUTATION,
            json!({ "input": { "id": 666, "length": 1, "width": 1, "unitOfMeasurement": "cm" } }),
        )
        .await;
    assert_eq!(data(res)["updateBedDimensions"], Value::Null);
}

#[tokio::test]
async fn bed_resolves_its_garden_and_sections() {
    let fx = setup().await;
    garden_domains::Section::create(fx.bed.id, "Row 1", Some(1), Some(2), None, &fx.pool)
        .await
        .unwrap();

    let res = fx
        .call_graphql(
            "query($id: Int!) { bed(id: $id) { garden { id name } sections { name length width } } }",
            json!({ "id": fx.bed.id }),
        )
        .await;
    let bed = data(res)["bed"].clone();

    assert_eq!(bed["garden"]["id"], fx.garden.id);
    assert_eq!(bed["garden"]["name"], fx.garden.name.as_str());
    assert_eq!(bed["sections"], json!([{ "name": "Row 1", "length": 1, "width": 2 }]));
}
