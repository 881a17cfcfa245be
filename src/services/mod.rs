//! Application services layer.
//!
//! Services sit behind traits so handlers can be wired with any
//! implementation through `AppState`.

mod auth_service;

pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
