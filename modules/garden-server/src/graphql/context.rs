/// Requester id decoded from the bearer token, attached to every GraphQL
/// request. `None` for anonymous or unverifiable requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity(pub Option<i32>);
