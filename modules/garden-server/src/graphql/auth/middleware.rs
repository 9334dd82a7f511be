use axum::http::{header, HeaderMap};

use super::jwt::JwtService;

/// The token half of an `Authorization: <scheme> <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    value.split(' ').nth(1).filter(|token| !token.is_empty())
}

/// Decode the requester's id from the `Authorization` header.
/// Returns `None` if the header is absent or the token is malformed.
pub fn user_id_from_headers(jwt: &JwtService, headers: &HeaderMap) -> Option<i32> {
    let token = bearer_token(headers)?;
    let user_id = jwt.subject_id(token);
    if user_id.is_none() {
        tracing::debug!("ignoring unverifiable bearer token");
    }
    user_id
}
