//! Domain layer - Core business entities and logic
//!
//! The user entity, its public projection, and password handling.
//! Nothing here knows about HTTP or the database.

pub mod password;
pub mod user;

pub use password::Password;
pub use user::{NewUser, ProfileChanges, User, UserResponse, UserRole};
