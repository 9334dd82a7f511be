use async_graphql::*;

#[derive(Default)]
pub struct HelloQuery;

#[Object]
impl HelloQuery {
    async fn hello(&self) -> &'static str {
        "Hello World!"
    }
}
