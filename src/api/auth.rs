//! Authentication endpoints

use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::user::{Permissions, UserResponse},
};

/// Login request payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub senha: String,
}

/// Successful login payload: the authenticated user plus the permission
/// set clients use to render their menus
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub permissions: Permissions,
}

/// Authenticate with email and senha
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 400, description = "Missing email or senha", body = crate::error::ErrorResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse),
        (status = 403, description = "Inactive account", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    WithRejection(Json(request), _): WithRejection<Json<LoginRequest>, AppError>,
) -> AppResult<Json<LoginResponse>> {
    if request.email.is_empty() || request.senha.is_empty() {
        return Err(AppError::Validation(
            "Email e senha são obrigatórios".to_string(),
        ));
    }

    let user = state.services.auth.login(&request.email, &request.senha).await?;
    let permissions = Permissions::for_perfil(user.perfil);

    Ok(Json(LoginResponse {
        user: user.into(),
        permissions,
    }))
}
