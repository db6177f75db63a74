//! Celular endpoints
//!
//! Same contract as the notebook routes: attribution fields ride inline in
//! mutation bodies and every successful mutation is audited.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::{
        celular::{Celular, CreateCelular, UpdateCelular},
        historico::Actor,
    },
};

use super::{
    ActorBody, Attributed, AttributedCreateCelular, AttributedUpdateCelular, DeleteResponse,
};

/// List all celulares
#[utoipa::path(
    get,
    path = "/celulares",
    tag = "celulares",
    responses(
        (status = 200, description = "Celular list", body = Vec<Celular>)
    )
)]
pub async fn list_celulares(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Celular>>> {
    Ok(Json(state.services.inventory.list_celulares().await))
}

/// Get celular by ID
#[utoipa::path(
    get,
    path = "/celulares/{id}",
    tag = "celulares",
    params(("id" = String, Path, description = "Celular ID")),
    responses(
        (status = 200, description = "Celular details", body = Celular),
        (status = 404, description = "Celular not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_celular(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Celular>> {
    let celular = state.services.inventory.get_celular(&id).await?;
    Ok(Json(celular))
}

/// Create a celular
#[utoipa::path(
    post,
    path = "/celulares",
    tag = "celulares",
    request_body = AttributedCreateCelular,
    responses(
        (status = 201, description = "Celular created", body = Celular),
        (status = 400, description = "Invalid body", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_celular(
    State(state): State<crate::AppState>,
    WithRejection(Json(body), _): WithRejection<Json<Attributed<CreateCelular>>, AppError>,
) -> AppResult<(StatusCode, Json<Celular>)> {
    let actor = body.actor();
    let celular = state
        .services
        .inventory
        .create_celular(body.data, &actor)
        .await?;
    Ok((StatusCode::CREATED, Json(celular)))
}

/// Update a celular
#[utoipa::path(
    patch,
    path = "/celulares/{id}",
    tag = "celulares",
    params(("id" = String, Path, description = "Celular ID")),
    request_body = AttributedUpdateCelular,
    responses(
        (status = 200, description = "Celular updated", body = Celular),
        (status = 404, description = "Celular not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_celular(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    WithRejection(Json(body), _): WithRejection<Json<Attributed<UpdateCelular>>, AppError>,
) -> AppResult<Json<Celular>> {
    let actor = body.actor();
    let celular = state
        .services
        .inventory
        .update_celular(&id, body.data, &actor)
        .await?;
    Ok(Json(celular))
}

/// Delete a celular
#[utoipa::path(
    delete,
    path = "/celulares/{id}",
    tag = "celulares",
    params(("id" = String, Path, description = "Celular ID")),
    request_body = ActorBody,
    responses(
        (status = 200, description = "Celular deleted", body = DeleteResponse),
        (status = 404, description = "Celular not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_celular(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    body: Option<Json<ActorBody>>,
) -> AppResult<Json<DeleteResponse>> {
    let actor = body.map_or_else(Actor::system, |Json(b)| b.actor());
    state.services.inventory.delete_celular(&id, &actor).await?;
    Ok(Json(DeleteResponse { success: true }))
}
