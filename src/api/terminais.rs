//! Terminal endpoints

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
        terminal::{CreateTerminal, Terminal, UpdateTerminal},
    },
};

use super::{
    ActorBody, Attributed, AttributedCreateTerminal, AttributedUpdateTerminal, DeleteResponse,
};

/// List all terminais
#[utoipa::path(
    get,
    path = "/terminais",
    tag = "terminais",
    responses(
        (status = 200, description = "Terminal list", body = Vec<Terminal>)
    )
)]
pub async fn list_terminais(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Terminal>>> {
    Ok(Json(state.services.inventory.list_terminais().await))
}

/// Get terminal by ID
#[utoipa::path(
    get,
    path = "/terminais/{id}",
    tag = "terminais",
    params(("id" = String, Path, description = "Terminal ID")),
    responses(
        (status = 200, description = "Terminal details", body = Terminal),
        (status = 404, description = "Terminal not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_terminal(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Terminal>> {
    let terminal = state.services.inventory.get_terminal(&id).await?;
    Ok(Json(terminal))
}

/// Create a terminal
#[utoipa::path(
    post,
    path = "/terminais",
    tag = "terminais",
    request_body = AttributedCreateTerminal,
    responses(
        (status = 201, description = "Terminal created", body = Terminal),
        (status = 400, description = "Invalid body", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_terminal(
    State(state): State<crate::AppState>,
    WithRejection(Json(body), _): WithRejection<Json<Attributed<CreateTerminal>>, AppError>,
) -> AppResult<(StatusCode, Json<Terminal>)> {
    let actor = body.actor();
    let terminal = state
        .services
        .inventory
        .create_terminal(body.data, &actor)
        .await?;
    Ok((StatusCode::CREATED, Json(terminal)))
}

/// Update a terminal
#[utoipa::path(
    patch,
    path = "/terminais/{id}",
    tag = "terminais",
    params(("id" = String, Path, description = "Terminal ID")),
    request_body = AttributedUpdateTerminal,
    responses(
        (status = 200, description = "Terminal updated", body = Terminal),
        (status = 404, description = "Terminal not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_terminal(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    WithRejection(Json(body), _): WithRejection<Json<Attributed<UpdateTerminal>>, AppError>,
) -> AppResult<Json<Terminal>> {
    let actor = body.actor();
    let terminal = state
        .services
        .inventory
        .update_terminal(&id, body.data, &actor)
        .await?;
    Ok(Json(terminal))
}

/// Delete a terminal
#[utoipa::path(
    delete,
    path = "/terminais/{id}",
    tag = "terminais",
    params(("id" = String, Path, description = "Terminal ID")),
    request_body = ActorBody,
    responses(
        (status = 200, description = "Terminal deleted", body = DeleteResponse),
        (status = 404, description = "Terminal not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_terminal(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    body: Option<Json<ActorBody>>,
) -> AppResult<Json<DeleteResponse>> {
    let actor = body.map_or_else(Actor::system, |Json(b)| b.actor());
    state.services.inventory.delete_terminal(&id, &actor).await?;
    Ok(Json(DeleteResponse { success: true }))
}
