//! User model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User role (stored and serialized with its exact display casing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Perfil {
    Admin,
    Suporte,
    Controle,
}

impl Perfil {
    pub fn as_str(&self) -> &'static str {
        match self {
            Perfil::Admin => "Admin",
            Perfil::Suporte => "Suporte",
            Perfil::Controle => "Controle",
        }
    }
}

impl std::fmt::Display for Perfil {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Perfil {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Perfil::Admin),
            "Suporte" => Ok(Perfil::Suporte),
            "Controle" => Ok(Perfil::Controle),
            _ => Err(format!("Invalid perfil: {}", s)),
        }
    }
}

/// Full user record as stored
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub nome: String,
    /// Unique at creation time, compared byte-for-byte (no case normalization)
    pub email: String,
    /// Stored credential, compared verbatim. Known insecure, kept as-is.
    pub senha: String,
    pub perfil: Perfil,
    /// Inactive users may not authenticate
    pub ativo: bool,
    pub created_at: DateTime<Utc>,
}

/// User representation returned by the API (senha stripped)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub nome: String,
    pub email: String,
    pub perfil: Perfil,
    pub ativo: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            nome: user.nome,
            email: user.email,
            perfil: user.perfil,
            ativo: user.ativo,
            created_at: user.created_at,
        }
    }
}

/// Create user request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub perfil: Perfil,
    /// Defaults to true when omitted
    pub ativo: Option<bool>,
}

/// Update user request (merge semantics, only supplied fields change)
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
    pub perfil: Option<Perfil>,
    pub ativo: Option<bool>,
}

/// Actions a role is allowed to perform
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    pub create_equipment: bool,
    pub edit_equipment: bool,
    pub delete_equipment: bool,
    pub manage_users: bool,
    pub view_dashboard: bool,
    pub view_history: bool,
}

impl Permissions {
    /// Permission set for a role. Computed here so clients render from an
    /// authoritative mapping; mutating routes do not re-check it per request.
    pub fn for_perfil(perfil: Perfil) -> Self {
        match perfil {
            Perfil::Admin => Permissions {
                create_equipment: true,
                edit_equipment: true,
                delete_equipment: true,
                manage_users: true,
                view_dashboard: true,
                view_history: true,
            },
            Perfil::Suporte => Permissions {
                create_equipment: true,
                edit_equipment: true,
                delete_equipment: false,
                manage_users: false,
                view_dashboard: true,
                view_history: true,
            },
            Perfil::Controle => Permissions {
                create_equipment: false,
                edit_equipment: false,
                delete_equipment: false,
                manage_users: false,
                view_dashboard: true,
                view_history: true,
            },
        }
    }
}
