//! Authentication service - password hashing and access tokens.
//!
//! Tokens are HS256 JWTs. A token only resolves to a user while that user
//! still exists in the store.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::{Password, User};
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "bearer")
    #[schema(example = "bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[schema(example = 604800)]
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Hash a plain-text password for storage
    fn hash_password(&self, plain: &str) -> AppResult<String>;

    /// Resolve credentials to a user; `None` if the email is unknown or the
    /// password does not match
    async fn authenticate_user(&self, email: &str, password: &str) -> AppResult<Option<User>>;

    /// Issue a signed access token for `user`, valid for `ttl`
    fn create_access_token(&self, user: &User, ttl: Duration) -> AppResult<String>;

    /// Resolve a token to its user; `None` if the token is invalid, expired,
    /// or names a user that no longer exists
    async fn verify_token(&self, token: &str) -> AppResult<Option<User>>;
}

/// Hash checked when the email is unknown, so a miss costs the same as a
/// wrong password.
static DUMMY_HASH: Lazy<Option<Password>> =
    Lazy::new(|| Password::new("dummy-password-for-timing").ok());

/// Concrete implementation of AuthService backed by the user store.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, config: &Config) -> Self {
        Self {
            users,
            encoding_key: EncodingKey::from_secret(config.jwt_secret_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret_bytes()),
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    fn hash_password(&self, plain: &str) -> AppResult<String> {
        Ok(Password::new(plain)?.into_string())
    }

    async fn authenticate_user(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        let Some(user) = self.users.find_by_email(email).await? else {
            if let Some(dummy) = DUMMY_HASH.as_ref() {
                let _ = dummy.verify(password);
            }
            return Ok(None);
        };

        if Password::from_hash(user.password_hash.as_str()).verify(password) {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    fn create_access_token(&self, user: &User, ttl: Duration) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role.to_string(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    async fn verify_token(&self, token: &str) -> AppResult<Option<User>> {
        let claims = match decode::<Claims>(token, &self.decoding_key, &Validation::default()) {
            Ok(data) => data.claims,
            Err(e) => {
                tracing::debug!("Rejected access token: {}", e);
                return Ok(None);
            }
        };

        self.users.find_by_id(claims.sub).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;
    use crate::infra::repositories::MockUserRepository;
    use mockall::predicate::eq;

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";

    fn config() -> Config {
        Config::new("sqlite::memory:", SECRET).unwrap()
    }

    fn user_with_password(plain: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            password_hash: Password::new(plain).unwrap().into_string(),
            name: "A".to_string(),
            avatar: None,
            role: UserRole::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn authenticator(repo: MockUserRepository) -> Authenticator {
        Authenticator::new(Arc::new(repo), &config())
    }

    #[tokio::test]
    async fn test_authenticate_with_correct_password() {
        let user = user_with_password("p1");
        let expected_id = user.id;

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let result = authenticator(repo)
            .authenticate_user("a@x.com", "p1")
            .await
            .unwrap();

        assert_eq!(result.map(|u| u.id), Some(expected_id));
    }

    #[tokio::test]
    async fn test_authenticate_with_wrong_password() {
        let user = user_with_password("p1");

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let result = authenticator(repo)
            .authenticate_user("a@x.com", "nope")
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let result = authenticator(repo)
            .authenticate_user("ghost@x.com", "p1")
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_issued_token_resolves_to_user() {
        let user = user_with_password("p1");
        let stored = user.clone();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(user.id))
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        let auth = authenticator(repo);
        let token = auth.create_access_token(&user, Duration::minutes(5)).unwrap();
        let resolved = auth.verify_token(&token).await.unwrap().unwrap();

        assert_eq!(resolved.id, user.id);
        assert_eq!(resolved.email, user.email);
    }

    #[tokio::test]
    async fn test_expired_token_is_rejected_without_lookup() {
        let user = user_with_password("p1");

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().never();

        let auth = authenticator(repo);
        let token = auth
            .create_access_token(&user, Duration::minutes(-10))
            .unwrap();

        assert!(auth.verify_token(&token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_foreign_signature_is_rejected() {
        let user = user_with_password("p1");
        let other_config =
            Config::new("sqlite::memory:", "another-secret-key-that-is-32-chars!!").unwrap();
        let forger = Authenticator::new(Arc::new(MockUserRepository::new()), &other_config);
        let token = forger
            .create_access_token(&user, Duration::minutes(5))
            .unwrap();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().never();

        assert!(authenticator(repo)
            .verify_token(&token)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_token_for_missing_user_is_rejected() {
        let user = user_with_password("p1");

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let auth = authenticator(repo);
        let token = auth.create_access_token(&user, Duration::minutes(5)).unwrap();

        assert!(auth.verify_token(&token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_garbage_token_is_rejected() {
        let auth = authenticator(MockUserRepository::new());
        assert!(auth.verify_token("not.a.jwt").await.unwrap().is_none());
    }

    #[test]
    fn test_hash_password_verifies() {
        let auth = authenticator(MockUserRepository::new());
        let hash = auth.hash_password("p1").unwrap();
        assert!(Password::from_hash(hash).verify("p1"));
    }
}
