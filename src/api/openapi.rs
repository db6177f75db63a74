//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, backup, celulares, health, historico, notebooks, stats, terminais, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventario API",
        version = "1.0.0",
        description = "IT equipment inventory REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        // Notebooks
        notebooks::list_notebooks,
        notebooks::get_notebook,
        notebooks::create_notebook,
        notebooks::update_notebook,
        notebooks::delete_notebook,
        // Celulares
        celulares::list_celulares,
        celulares::get_celular,
        celulares::create_celular,
        celulares::update_celular,
        celulares::delete_celular,
        // Terminais
        terminais::list_terminais,
        terminais::get_terminal,
        terminais::create_terminal,
        terminais::update_terminal,
        terminais::delete_terminal,
        // Historico
        historico::list_historico,
        historico::list_equipment_historico,
        // Dashboard
        stats::dashboard_stats,
        // Backup
        backup::export_backup,
        backup::import_backup,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            // Users
            crate::models::user::User,
            crate::models::user::UserResponse,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            crate::models::user::Perfil,
            crate::models::user::Permissions,
            // Notebooks
            crate::models::notebook::Notebook,
            crate::models::notebook::CreateNotebook,
            crate::models::notebook::UpdateNotebook,
            // Celulares
            crate::models::celular::Celular,
            crate::models::celular::CreateCelular,
            crate::models::celular::UpdateCelular,
            // Terminais
            crate::models::terminal::Terminal,
            crate::models::terminal::CreateTerminal,
            crate::models::terminal::UpdateTerminal,
            // Historico
            crate::models::historico::Historico,
            crate::models::historico::HistoricoAction,
            crate::models::historico::EquipmentType,
            // Attribution wrappers
            crate::api::AttributedCreateNotebook,
            crate::api::AttributedUpdateNotebook,
            crate::api::AttributedCreateCelular,
            crate::api::AttributedUpdateCelular,
            crate::api::AttributedCreateTerminal,
            crate::api::AttributedUpdateTerminal,
            crate::api::ActorBody,
            crate::api::DeleteResponse,
            // Dashboard
            crate::services::stats::DashboardStats,
            // Backup
            crate::services::backup::BackupDocument,
            crate::services::backup::BackupData,
            crate::services::backup::TableCounts,
            crate::services::backup::ImportReport,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "users", description = "User management"),
        (name = "notebooks", description = "Notebook inventory"),
        (name = "celulares", description = "Celular inventory"),
        (name = "terminais", description = "Time-clock terminal inventory"),
        (name = "historico", description = "Equipment audit log"),
        (name = "dashboard", description = "Dashboard statistics"),
        (name = "backup", description = "Bulk export and import")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
