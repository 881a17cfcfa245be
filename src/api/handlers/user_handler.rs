//! Handlers for the authenticated account and the admin user listing.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::QueryParams;
use crate::api::middleware::{require_admin, CurrentUser};
use crate::api::AppState;
use crate::domain::{ProfileChanges, UserResponse};
use crate::errors::AppResult;
use crate::types::ListParams;

/// Profile update query parameters. Empty values are ignored.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdateProfileParams {
    /// New display name
    pub name: Option<String>,
    /// New avatar URL
    pub avatar: Option<String>,
}

/// Create routes that require a bearer token
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_current_user).put(update_current_user))
        .route("/users", get(list_users))
}

/// Get current authenticated user
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user profile", body = UserResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_current_user(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}

/// Update the current user's name and/or avatar
#[utoipa::path(
    put,
    path = "/auth/me",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(UpdateProfileParams),
    responses(
        (status = 200, description = "Updated profile", body = UserResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn update_current_user(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    State(state): State<AppState>,
    QueryParams(params): QueryParams<UpdateProfileParams>,
) -> AppResult<Json<UserResponse>> {
    let changes = ProfileChanges::new(params.name, params.avatar);
    if changes.is_empty() {
        return Ok(Json(UserResponse::from(user)));
    }

    let updated = state.users.update_profile(user.id, changes).await?;
    tracing::info!(user_id = %updated.id, "Profile updated");

    Ok(Json(UserResponse::from(updated)))
}

/// List users (admin only)
#[utoipa::path(
    get,
    path = "/auth/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(ListParams),
    responses(
        (status = 200, description = "Page of users", body = Vec<UserResponse>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin access required")
    )
)]
pub async fn list_users(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> AppResult<Json<Vec<UserResponse>>> {
    require_admin(&current_user)?;

    let users = state.users.list(params.skip(), params.limit()).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
