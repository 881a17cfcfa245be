//! Authentication handlers: register, login, logout.

use axum::{extract::State, response::Json, routing::post, Router};
use chrono::Duration;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{ACCESS_TOKEN_EXPIRE_MINUTES, LOGOUT_MESSAGE, TOKEN_TYPE_BEARER};
use crate::domain::{NewUser, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::services::TokenResponse;
use crate::types::MessageResponse;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "student@example.com")]
    pub email: String,
    /// User display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Alice")]
    pub name: String,
    /// User password
    #[schema(example = "correct horse battery staple")]
    pub password: String,
    /// Optional avatar URL
    #[schema(example = "https://cdn.example.com/avatars/alice.png")]
    pub avatar: Option<String>,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email address
    #[schema(example = "student@example.com")]
    pub email: String,
    /// User password
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

/// Create public authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered successfully", body = UserResponse),
        (status = 400, description = "Validation error or email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<Json<UserResponse>> {
    let password_hash = state.auth_service.hash_password(&payload.password)?;
    let new_user = NewUser::regular(payload.email, payload.name, password_hash)
        .with_avatar(payload.avatar.filter(|a| !a.is_empty()));

    let user = state.users.create(new_user).await?;
    tracing::info!(user_id = %user.id, "User registered");

    Ok(Json(UserResponse::from(user)))
}

/// Login and get an access token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Incorrect email or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let Some(user) = state
        .auth_service
        .authenticate_user(&payload.email, &payload.password)
        .await?
    else {
        tracing::debug!("Login rejected");
        return Err(AppError::InvalidCredentials);
    };

    let ttl = Duration::minutes(ACCESS_TOKEN_EXPIRE_MINUTES);
    let access_token = state.auth_service.create_access_token(&user, ttl)?;
    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(TokenResponse {
        access_token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: ttl.num_seconds(),
    }))
}

/// Log out.
///
/// Tokens are stateless and stay valid until they expire; clients are
/// expected to discard theirs.
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "Authentication",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse)
    )
)]
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse::new(LOGOUT_MESSAGE))
}
