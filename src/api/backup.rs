//! Backup export/import endpoints

use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    services::backup::{BackupDocument, ImportReport},
};

/// Export all tables as a single JSON document
#[utoipa::path(
    get,
    path = "/backup/export",
    tag = "backup",
    responses(
        (status = 200, description = "Full backup document", body = BackupDocument)
    )
)]
pub async fn export_backup(
    State(state): State<crate::AppState>,
) -> AppResult<Json<BackupDocument>> {
    Ok(Json(state.services.backup.export().await))
}

/// Import a backup document. Records whose id already exists are skipped,
/// never overwritten.
#[utoipa::path(
    post,
    path = "/backup/import",
    tag = "backup",
    request_body = BackupDocument,
    responses(
        (status = 200, description = "Per-table import counts", body = ImportReport),
        (status = 400, description = "Malformed document", body = crate::error::ErrorResponse)
    )
)]
pub async fn import_backup(
    State(state): State<crate::AppState>,
    WithRejection(Json(document), _): WithRejection<Json<BackupDocument>, AppError>,
) -> AppResult<Json<ImportReport>> {
    Ok(Json(state.services.backup.import(document).await))
}
