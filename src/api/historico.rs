//! Audit log endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::historico::Historico};

/// List the full audit log, newest first
#[utoipa::path(
    get,
    path = "/historico",
    tag = "historico",
    responses(
        (status = 200, description = "Audit entries, newest first", body = Vec<Historico>)
    )
)]
pub async fn list_historico(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Historico>>> {
    Ok(Json(state.services.historico.list_all().await))
}

/// List the audit entries of one piece of equipment, newest first.
/// Unknown ids yield an empty list, not a 404.
#[utoipa::path(
    get,
    path = "/historico/equipment/{equipmentId}",
    tag = "historico",
    params(("equipmentId" = String, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Audit entries for the equipment", body = Vec<Historico>)
    )
)]
pub async fn list_equipment_historico(
    State(state): State<crate::AppState>,
    Path(equipment_id): Path<String>,
) -> AppResult<Json<Vec<Historico>>> {
    Ok(Json(
        state
            .services
            .historico
            .list_for_equipment(&equipment_id)
            .await,
    ))
}
