//! Audit recording service

use crate::{
    models::historico::{Actor, CreateHistorico, EquipmentType, Historico, HistoricoAction},
    repository::Repository,
};

#[derive(Clone)]
pub struct HistoricoService {
    repository: Repository,
}

impl HistoricoService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Append one audit entry for an equipment mutation. The actor name is
    /// copied into the entry at write time.
    pub async fn record(
        &self,
        action: HistoricoAction,
        actor: &Actor,
        equipment_type: EquipmentType,
        equipment_id: Option<String>,
        equipment: Option<String>,
    ) -> Historico {
        self.repository
            .historico
            .create(CreateHistorico {
                action,
                user_id: actor.id.clone(),
                user_name: actor.name.clone(),
                equipment_type,
                equipment_id,
                details: action.details().to_string(),
                equipment,
            })
            .await
    }

    pub async fn list_all(&self) -> Vec<Historico> {
        self.repository.historico.list_all().await
    }

    pub async fn list_for_equipment(&self, equipment_id: &str) -> Vec<Historico> {
        self.repository.historico.list_for_equipment(equipment_id).await
    }
}
