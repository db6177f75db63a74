//! Historico (audit log) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Recorded action kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HistoricoAction {
    Criacao,
    Edicao,
    Exclusao,
}

impl HistoricoAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoricoAction::Criacao => "criacao",
            HistoricoAction::Edicao => "edicao",
            HistoricoAction::Exclusao => "exclusao",
        }
    }

    /// Fixed description recorded with each action
    pub fn details(&self) -> &'static str {
        match self {
            HistoricoAction::Criacao => "Cadastrou novo equipamento",
            HistoricoAction::Edicao => "Atualizou informações do equipamento",
            HistoricoAction::Exclusao => "Removeu equipamento do inventário",
        }
    }
}

impl std::fmt::Display for HistoricoAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Equipment table an audit entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentType {
    Notebook,
    Celular,
    Terminal,
}

impl EquipmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentType::Notebook => "notebook",
            EquipmentType::Celular => "celular",
            EquipmentType::Terminal => "terminal",
        }
    }
}

impl std::fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable audit entry. Never updated or deleted once written; the actor
/// name is a snapshot taken at write time, not a live join.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Historico {
    pub id: String,
    pub action: HistoricoAction,
    pub user_id: String,
    /// Actor display name at the time of the action
    pub user_name: String,
    pub equipment_type: EquipmentType,
    /// Nullable: the equipment may no longer resolve after deletion
    pub equipment_id: Option<String>,
    pub details: String,
    /// Denormalized display label, e.g. "Notebook Dell XPS - Maria"
    pub equipment: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Input for a new audit entry; id and timestamp are assigned by the store
#[derive(Debug, Clone)]
pub struct CreateHistorico {
    pub action: HistoricoAction,
    pub user_id: String,
    pub user_name: String,
    pub equipment_type: EquipmentType,
    pub equipment_id: Option<String>,
    pub details: String,
    pub equipment: Option<String>,
}

/// Identity an equipment mutation is attributed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
    pub name: String,
}

impl Actor {
    /// Sentinel identity used when the request carries no actor fields
    pub fn system() -> Self {
        Actor {
            id: "system".to_string(),
            name: "Sistema".to_string(),
        }
    }

    /// Build an actor from optional request fields. Absent or empty values
    /// fall back to the system sentinel, each field independently.
    pub fn from_fields(id: Option<&str>, name: Option<&str>) -> Self {
        let system = Actor::system();
        Actor {
            id: match id {
                Some(v) if !v.is_empty() => v.to_string(),
                _ => system.id,
            },
            name: match name {
                Some(v) if !v.is_empty() => v.to_string(),
                _ => system.name,
            },
        }
    }
}
