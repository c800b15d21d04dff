//! Authentication handlers

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::auth::{AuthService, LoginInput};
use crate::AppState;
use shared::models::User;

/// Log in with username and password; returns the user profile
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> AppResult<Json<User>> {
    let service = AuthService::new(state.db);
    let user = service.login(input).await?;
    Ok(Json(user))
}
