use async_graphql::*;
use chrono::{DateTime, Utc};

#[derive(SimpleObject, Clone)]
#[graphql(name = "Variety")]
pub struct GqlVariety {
    pub id: i32,
    pub name: String,
    pub species: Option<String>,
    pub days_to_maturity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<garden_domains::Variety> for GqlVariety {
    fn from(v: garden_domains::Variety) -> Self {
        Self {
            id: v.id,
            name: v.name,
            species: v.species,
            days_to_maturity: v.days_to_maturity,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

#[derive(InputObject)]
pub struct CreateVarietyInput {
    pub name: String,
    pub species: Option<String>,
    pub days_to_maturity: Option<i32>,
}
