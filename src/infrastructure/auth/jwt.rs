//! JWT token signing and verification with a shared secret

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::user::User;
use crate::domain::DomainError;

/// Longest token lifetime accepted from configuration (ten years)
pub const MAX_TOKEN_TTL_HOURS: u64 = 24 * 365 * 10;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Authenticated username
    pub username: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl JwtClaims {
    /// Create claims for a username, valid for `expiration_hours`
    ///
    /// Lifetimes above [`MAX_TOKEN_TTL_HOURS`] are clamped to it.
    pub fn new(username: impl Into<String>, expiration_hours: u64) -> Self {
        let now = Utc::now();
        let hours = expiration_hours.min(MAX_TOKEN_TTL_HOURS) as i64;
        let exp = now + Duration::hours(hours);

        Self {
            username: username.into(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }
}

/// Configuration for JWT service
#[derive(Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token expiration time in hours
    pub expiration_hours: u64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration_hours: u64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }
}

impl Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[hidden]")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

/// Trait for bearer token operations
pub trait TokenService: Send + Sync + Debug {
    /// Sign the given claims into a token
    fn sign(&self, claims: &JwtClaims) -> Result<String, DomainError>;

    /// Validate a token and return its claims
    ///
    /// Malformed tokens, bad signatures and expired tokens all fail with
    /// `DomainError::Credential`.
    fn verify(&self, token: &str) -> Result<JwtClaims, DomainError>;

    /// Get the token expiration time in hours
    fn expiration_hours(&self) -> u64;

    /// Issue a fresh token for an authenticated user
    fn issue(&self, user: &User) -> Result<String, DomainError> {
        self.sign(&JwtClaims::new(user.username(), self.expiration_hours()))
    }
}

/// HS256 JWT service
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("config", &self.config)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenService for JwtService {
    fn sign(&self, claims: &JwtClaims) -> Result<String, DomainError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to generate JWT: {}", e)))
    }

    fn verify(&self, token: &str) -> Result<JwtClaims, DomainError> {
        let validation = Validation::default();

        let token_data = decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| DomainError::credential(format!("Invalid JWT: {}", e)))?;

        Ok(token_data.claims)
    }

    fn expiration_hours(&self) -> u64 {
        self.config.expiration_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

    fn create_service() -> JwtService {
        JwtService::new(JwtConfig::new("test-secret-key-12345", 24))
    }

    #[test]
    fn test_sign_and_verify() {
        let service = create_service();
        let claims = JwtClaims::new("christopher_phillips", 24);

        let token = service.sign(&claims).unwrap();
        assert!(!token.is_empty());

        let verified = service.verify(&token).unwrap();
        assert_eq!(verified, claims);
        assert!(verified.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_issue_for_user() {
        let service = create_service();
        let user = User::new("christopher_phillips", "hash");

        let token = service.issue(&user).unwrap();
        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.username, "christopher_phillips");
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_garbage_token() {
        let service = create_service();

        assert!(matches!(
            service.verify("invalid-token"),
            Err(DomainError::Credential { .. })
        ));
        assert!(service.verify("").is_err());
        assert!(service.verify("a.b.c").is_err());
    }

    #[test]
    fn test_wrong_secret() {
        let service1 = JwtService::new(JwtConfig::new("secret-1", 24));
        let service2 = JwtService::new(JwtConfig::new("secret-2", 24));

        let token = service1.sign(&JwtClaims::new("rahul", 24)).unwrap();
        assert!(service2.verify(&token).is_err());
    }

    #[test]
    fn test_tampered_signature() {
        let service = create_service();
        let token = service.sign(&JwtClaims::new("rahul", 24)).unwrap();

        let (unsigned, signature) = token.rsplit_once('.').unwrap();
        let flipped = if signature.starts_with('A') { "B" } else { "A" };
        let tampered = format!("{}.{}{}", unsigned, flipped, &signature[1..]);

        assert!(service.verify(&tampered).is_err());
    }

    #[test]
    fn test_tampered_payload() {
        let service = create_service();
        let token = service.sign(&JwtClaims::new("rahul", 24)).unwrap();
        let parts: Vec<&str> = token.split('.').collect();

        let forged_claims = JwtClaims::new("admin", 24);
        let forged_payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged_claims).unwrap());
        let tampered = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        assert!(service.verify(&tampered).is_err());
    }

    #[test]
    fn test_huge_lifetime_is_clamped() {
        let claims = JwtClaims::new("rahul", 10_000_000_000_000);

        let max = Duration::hours(MAX_TOKEN_TTL_HOURS as i64).num_seconds();
        assert!(claims.exp - claims.iat <= max);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token() {
        let service = create_service();

        let past_time = Utc::now() - Duration::hours(1);
        let claims = JwtClaims {
            username: "rahul".to_string(),
            iat: (past_time - Duration::hours(2)).timestamp(),
            exp: past_time.timestamp(),
        };

        let token = service.sign(&claims).unwrap();
        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_debug_hides_secret() {
        let service = create_service();
        let debug = format!("{:?}", service);

        assert!(!debug.contains("test-secret-key-12345"));
        assert!(debug.contains("expiration_hours: 24"));
    }
}
