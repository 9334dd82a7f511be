use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

const TOKEN_DURATION_SECS: i64 = 24 * 3600;

/// JWT Claims stored in the token. `sub` is the numeric id of the bearer.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
    pub jti: String,
}

/// JWT service for creating and verifying tokens.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl JwtService {
    pub fn new(secret: &str, issuer: String) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
        }
    }

    pub fn create_token(&self, subject: i32) -> Result<String> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::seconds(TOKEN_DURATION_SECS);

        let claims = Claims {
            sub: subject.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode a JWT token. Returns claims if valid and not expired.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(Into::into)
    }

    /// The numeric subject of a valid token, `None` for anything else.
    pub fn subject_id(&self, token: &str) -> Option<i32> {
        self.verify_token(token).ok()?.sub.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::new("test-secret-key", "garden-planner".to_string())
    }

    #[test]
    fn roundtrip_token() {
        let svc = test_service();
        let token = svc.create_token(42).unwrap();
        let claims = svc.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.iss, "garden-planner");
        assert_eq!(svc.subject_id(&token), Some(42));
    }

    #[test]
    fn tokens_are_unique_per_issue() {
        let svc = test_service();
        let c1 = svc.verify_token(&svc.create_token(7).unwrap()).unwrap();
        let c2 = svc.verify_token(&svc.create_token(7).unwrap()).unwrap();
        assert_eq!(c1.sub, c2.sub);
        assert_ne!(c1.jti, c2.jti);
    }

    #[test]
    fn rejects_invalid_token() {
        let svc = test_service();
        assert!(svc.verify_token("garbage").is_err());
        assert_eq!(svc.subject_id("garbage"), None);
    }

    #[test]
    fn rejects_wrong_secret() {
        let svc1 = JwtService::new("secret-a", "garden-planner".to_string());
        let svc2 = JwtService::new("secret-b", "garden-planner".to_string());
        let token = svc1.create_token(1).unwrap();
        assert!(svc2.verify_token(&token).is_err());
    }

    #[test]
    fn rejects_wrong_issuer() {
        let svc1 = JwtService::new("secret", "someone-else".to_string());
        let svc2 = JwtService::new("secret", "garden-planner".to_string());
        let token = svc1.create_token(1).unwrap();
        assert_eq!(svc2.subject_id(&token), None);
    }

    #[test]
    fn non_numeric_subject_has_no_id() {
        let svc = test_service();
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: "not-a-number".to_string(),
            exp: now + 60,
            iat: now,
            iss: "garden-planner".to_string(),
            jti: "x".to_string(),
        };
        let token = encode(&Header::default(), &claims, &svc.encoding_key).unwrap();
        assert!(svc.verify_token(&token).is_ok());
        assert_eq!(svc.subject_id(&token), None);
    }

    #[test]
    fn token_expiry_is_24h() {
        let svc = test_service();
        let token = svc.create_token(3).unwrap();
        let claims = svc.verify_token(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }
}
