//! Notebook model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Notebook record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notebook {
    pub id: String,
    /// Owner name
    pub responsavel: String,
    /// Region code (Brazilian UF)
    pub uf: String,
    pub centro_custo: Option<String>,
    /// Business segment
    pub segmento: String,
    pub cnpj: Option<String>,
    pub modelo: String,
    /// Supplier: MAGNA, OPUS, ONLY, ALLU
    pub fornecedor: String,
    /// EM USO, DEVOLVER, CORREIO, GUARDADO, TROCA
    pub status: String,
    pub processador: Option<String>,
    /// Office license tier
    pub office: Option<String>,
    /// Stored in clear text, same caveat as user credentials
    pub senha_admin: Option<String>,
    pub patrimonio: Option<String>,
    /// Date strings are kept opaque, not validated as calendar dates
    pub data_recebimento: Option<String>,
    pub valor: Option<Decimal>,
    pub data_checagem: Option<String>,
    pub termo_link: Option<String>,
    pub foto_link: Option<String>,
    pub checklist_termo: bool,
    pub checklist_antivirus: bool,
    pub checklist_ferramenta_a: bool,
    pub checklist_ferramenta_b: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create notebook request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotebook {
    pub responsavel: String,
    pub uf: String,
    pub centro_custo: Option<String>,
    pub segmento: String,
    pub cnpj: Option<String>,
    pub modelo: String,
    pub fornecedor: String,
    pub status: String,
    pub processador: Option<String>,
    pub office: Option<String>,
    pub senha_admin: Option<String>,
    pub patrimonio: Option<String>,
    pub data_recebimento: Option<String>,
    pub valor: Option<Decimal>,
    pub data_checagem: Option<String>,
    pub termo_link: Option<String>,
    pub foto_link: Option<String>,
    /// Checklist flags default to false when omitted
    pub checklist_termo: Option<bool>,
    pub checklist_antivirus: Option<bool>,
    pub checklist_ferramenta_a: Option<bool>,
    pub checklist_ferramenta_b: Option<bool>,
}

/// Update notebook request. Omitted fields are left untouched; nullable
/// fields distinguish "absent" from an explicit null, which clears the value.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotebook {
    pub responsavel: Option<String>,
    pub uf: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub centro_custo: Option<Option<String>>,
    pub segmento: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub cnpj: Option<Option<String>>,
    pub modelo: Option<String>,
    pub fornecedor: Option<String>,
    pub status: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub processador: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub office: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub senha_admin: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub patrimonio: Option<Option<String>>,
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
    pub checklist_termo: Option<bool>,
    pub checklist_antivirus: Option<bool>,
    pub checklist_ferramenta_a: Option<bool>,
    pub checklist_ferramenta_b: Option<bool>,
}
