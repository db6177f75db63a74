//! Celular (mobile phone) model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Celular record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Celular {
    pub id: String,
    pub responsavel: String,
    pub numero_celular: String,
    pub uf: String,
    pub centro_custo: Option<String>,
    pub segmento: String,
    pub cnpj: Option<String>,
    pub modelo: String,
    /// EM USO, DEVOLVER, CORREIO, GUARDADO, TROCA
    pub status: String,
    /// Account credentials tied to the device, stored in clear text
    pub email_login: Option<String>,
    pub senha_login: Option<String>,
    pub email_supervisao: Option<String>,
    pub senha_supervisao: Option<String>,
    pub imei: Option<String>,
    pub data_recebimento: Option<String>,
    pub valor: Option<Decimal>,
    pub data_checagem: Option<String>,
    pub termo_link: Option<String>,
    pub foto_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create celular request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCelular {
    pub responsavel: String,
    pub numero_celular: String,
    pub uf: String,
    pub centro_custo: Option<String>,
    pub segmento: String,
    pub cnpj: Option<String>,
    pub modelo: String,
    pub status: String,
    pub email_login: Option<String>,
    pub senha_login: Option<String>,
    pub email_supervisao: Option<String>,
    pub senha_supervisao: Option<String>,
    pub imei: Option<String>,
    pub data_recebimento: Option<String>,
    pub valor: Option<Decimal>,
    pub data_checagem: Option<String>,
    pub termo_link: Option<String>,
    pub foto_link: Option<String>,
}

/// Update celular request (merge semantics, explicit null clears)
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCelular {
    pub responsavel: Option<String>,
    pub numero_celular: Option<String>,
    pub uf: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub centro_custo: Option<Option<String>>,
    pub segmento: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub cnpj: Option<Option<String>>,
    pub modelo: Option<String>,
    pub status: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub email_login: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub senha_login: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub email_supervisao: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub senha_supervisao: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub imei: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub data_recebimento: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub valor: Option<Option<Decimal>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub data_checagem: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub termo_link: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub foto_link: Option<Option<String>>,
}
