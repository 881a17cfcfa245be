//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{ROLE_ADMIN, ROLE_USER};

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", ROLE_ADMIN),
            UserRole::User => write!(f, "{}", ROLE_USER),
        }
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub avatar: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data needed to persist a new account. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub avatar: Option<String>,
    pub role: UserRole,
}

impl NewUser {
    /// Regular (non-admin) account
    pub fn regular(email: String, name: String, password_hash: String) -> Self {
        Self {
            email,
            name,
            password_hash,
            avatar: None,
            role: UserRole::User,
        }
    }

    pub fn with_avatar(mut self, avatar: Option<String>) -> Self {
        self.avatar = avatar;
        self
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }
}

/// Profile fields a user may change on their own account.
///
/// An empty string is treated the same as an absent value, so a field can
/// never be cleared through this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub avatar: Option<String>,
}

impl ProfileChanges {
    pub fn new(name: Option<String>, avatar: Option<String>) -> Self {
        Self {
            name: name.filter(|v| !v.is_empty()),
            avatar: avatar.filter(|v| !v.is_empty()),
        }
    }

    /// True when there is nothing to write
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.avatar.is_none()
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// User email address
    #[schema(example = "student@example.com")]
    pub email: String,
    /// User display name
    #[schema(example = "Alice")]
    pub name: String,
    /// Avatar URL
    #[schema(example = "https://cdn.example.com/avatars/alice.png")]
    pub avatar: Option<String>,
    /// User role
    pub role: UserRole,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            avatar: user.avatar,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "student@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            name: "Student".to_string(),
            avatar: Some("a.png".to_string()),
            role: UserRole::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_round_trip_strings() {
        assert_eq!(UserRole::from("admin"), UserRole::Admin);
        assert_eq!(UserRole::from("user"), UserRole::User);
        // Unknown values default to User
        assert_eq!(UserRole::from("superuser"), UserRole::User);
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }

    #[test]
    fn test_response_omits_password() {
        let user = sample_user();
        let json = serde_json::to_value(UserResponse::from(user.clone())).unwrap();

        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "student@example.com");
        assert_eq!(json["role"], "user");
        assert_eq!(json["avatar"], "a.png");

        // The entity itself never serializes its hash either
        let raw = serde_json::to_string(&user).unwrap();
        assert!(!raw.contains("argon2id"));
    }

    #[test]
    fn test_profile_changes_drop_empty_values() {
        let changes = ProfileChanges::new(Some(String::new()), Some(String::new()));
        assert!(changes.is_empty());

        let changes = ProfileChanges::new(Some("Alice".to_string()), None);
        assert_eq!(changes.name.as_deref(), Some("Alice"));
        assert!(changes.avatar.is_none());
        assert!(!changes.is_empty());
    }

    #[test]
    fn test_new_user_builders() {
        let new_user = NewUser::regular("a@x.com".into(), "A".into(), "hash".into())
            .with_avatar(Some("pic".into()))
            .with_role(UserRole::Admin);

        assert_eq!(new_user.role, UserRole::Admin);
        assert_eq!(new_user.avatar.as_deref(), Some("pic"));
    }
}
