//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - The SeaORM-backed user store

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore};
