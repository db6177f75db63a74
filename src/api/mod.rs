//! API handlers for Inventario REST endpoints

pub mod auth;
pub mod backup;
pub mod celulares;
pub mod health;
pub mod historico;
pub mod notebooks;
pub mod openapi;
pub mod stats;
pub mod terminais;
pub mod users;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{
    celular::{CreateCelular, UpdateCelular},
    historico::Actor,
    notebook::{CreateNotebook, UpdateNotebook},
    terminal::{CreateTerminal, UpdateTerminal},
};

/// Request body that carries the acting user next to the payload fields.
///
/// Mutating equipment endpoints accept `_userId` and `_userName` mixed into
/// the entity body; both are peeled off here so the payload reaching the
/// services stays attribution-free.
#[derive(Debug, Deserialize, ToSchema)]
#[aliases(
    AttributedCreateNotebook = Attributed<CreateNotebook>,
    AttributedUpdateNotebook = Attributed<UpdateNotebook>,
    AttributedCreateCelular = Attributed<CreateCelular>,
    AttributedUpdateCelular = Attributed<UpdateCelular>,
    AttributedCreateTerminal = Attributed<CreateTerminal>,
    AttributedUpdateTerminal = Attributed<UpdateTerminal>
)]
pub struct Attributed<T> {
    #[serde(flatten)]
    pub data: T,
    #[serde(rename = "_userId")]
    pub user_id: Option<String>,
    #[serde(rename = "_userName")]
    pub user_name: Option<String>,
}

impl<T> Attributed<T> {
    pub fn actor(&self) -> Actor {
        Actor::from_fields(self.user_id.as_deref(), self.user_name.as_deref())
    }
}

/// Optional body for delete endpoints, attribution only
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ActorBody {
    #[serde(rename = "_userId")]
    pub user_id: Option<String>,
    #[serde(rename = "_userName")]
    pub user_name: Option<String>,
}

impl ActorBody {
    pub fn actor(&self) -> Actor {
        Actor::from_fields(self.user_id.as_deref(), self.user_name.as_deref())
    }
}

/// Body returned by delete endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
}
