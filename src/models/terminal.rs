//! Terminal (time-clock device) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Terminal record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Terminal {
    pub id: String,
    /// Clock device number
    pub numero_relogio: String,
    /// EM USO, DEVOLVER, CORREIO, GUARDADO, TROCA
    pub status: String,
    pub uf: String,
    pub segmento: String,
    pub centro_custo: Option<String>,
    /// Planned next status, free text
    pub status_next: Option<String>,
    pub observacao: Option<String>,
    pub data_checagem: Option<String>,
    pub termo_link: Option<String>,
    pub foto_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create terminal request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTerminal {
    pub numero_relogio: String,
    pub status: String,
    pub uf: String,
    pub segmento: String,
    pub centro_custo: Option<String>,
    pub status_next: Option<String>,
    pub observacao: Option<String>,
    pub data_checagem: Option<String>,
    pub termo_link: Option<String>,
    pub foto_link: Option<String>,
}

/// Update terminal request (merge semantics, explicit null clears)
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTerminal {
    pub numero_relogio: Option<String>,
    pub status: Option<String>,
    pub uf: Option<String>,
    pub segmento: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub centro_custo: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub status_next: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub observacao: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub data_checagem: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub termo_link: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub foto_link: Option<Option<String>>,
}
