//! Notebook endpoints
//!
//! Mutations accept `_userId`/`_userName` attribution fields inline in the
//! body and append an audit entry on success.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::{
        historico::Actor,
        notebook::{CreateNotebook, Notebook, UpdateNotebook},
    },
};

use super::{
    ActorBody, Attributed, AttributedCreateNotebook, AttributedUpdateNotebook, DeleteResponse,
};

/// List all notebooks
#[utoipa::path(
    get,
    path = "/notebooks",
    tag = "notebooks",
    responses(
        (status = 200, description = "Notebook list", body = Vec<Notebook>)
    )
)]
pub async fn list_notebooks(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Notebook>>> {
    Ok(Json(state.services.inventory.list_notebooks().await))
}

/// Get notebook by ID
#[utoipa::path(
    get,
    path = "/notebooks/{id}",
    tag = "notebooks",
    params(("id" = String, Path, description = "Notebook ID")),
    responses(
        (status = 200, description = "Notebook details", body = Notebook),
        (status = 404, description = "Notebook not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_notebook(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Notebook>> {
    let notebook = state.services.inventory.get_notebook(&id).await?;
    Ok(Json(notebook))
}

/// Create a notebook
#[utoipa::path(
    post,
    path = "/notebooks",
    tag = "notebooks",
    request_body = AttributedCreateNotebook,
    responses(
        (status = 201, description = "Notebook created", body = Notebook),
        (status = 400, description = "Invalid body", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_notebook(
    State(state): State<crate::AppState>,
    WithRejection(Json(body), _): WithRejection<Json<Attributed<CreateNotebook>>, AppError>,
) -> AppResult<(StatusCode, Json<Notebook>)> {
    let actor = body.actor();
    let notebook = state
        .services
        .inventory
        .create_notebook(body.data, &actor)
        .await?;
    Ok((StatusCode::CREATED, Json(notebook)))
}

/// Update a notebook
#[utoipa::path(
    patch,
    path = "/notebooks/{id}",
    tag = "notebooks",
    params(("id" = String, Path, description = "Notebook ID")),
    request_body = AttributedUpdateNotebook,
    responses(
        (status = 200, description = "Notebook updated", body = Notebook),
        (status = 404, description = "Notebook not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_notebook(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    WithRejection(Json(body), _): WithRejection<Json<Attributed<UpdateNotebook>>, AppError>,
) -> AppResult<Json<Notebook>> {
    let actor = body.actor();
    let notebook = state
        .services
        .inventory
        .update_notebook(&id, body.data, &actor)
        .await?;
    Ok(Json(notebook))
}

/// Delete a notebook
#[utoipa::path(
    delete,
    path = "/notebooks/{id}",
    tag = "notebooks",
    params(("id" = String, Path, description = "Notebook ID")),
    request_body = ActorBody,
    responses(
        (status = 200, description = "Notebook deleted", body = DeleteResponse),
        (status = 404, description = "Notebook not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_notebook(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    body: Option<Json<ActorBody>>,
) -> AppResult<Json<DeleteResponse>> {
    let actor = body.map_or_else(Actor::system, |Json(b)| b.actor());
    state.services.inventory.delete_notebook(&id, &actor).await?;
    Ok(Json(DeleteResponse { success: true }))
}
