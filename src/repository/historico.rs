//! Historico store, append-only

use std::sync::Arc;

use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::historico::{CreateHistorico, Historico};

#[derive(Clone, Default)]
pub struct HistoricoRepository {
    store: Arc<RwLock<IndexMap<String, Historico>>>,
}

impl HistoricoRepository {
    /// Append a new entry with a fresh id and the current timestamp
    pub async fn create(&self, data: CreateHistorico) -> Historico {
        let entry = Historico {
            id: Uuid::new_v4().to_string(),
            action: data.action,
            user_id: data.user_id,
            user_name: data.user_name,
            equipment_type: data.equipment_type,
            equipment_id: data.equipment_id,
            details: data.details,
            equipment: data.equipment,
            timestamp: Utc::now(),
        };
        self.store
            .write()
            .await
            .insert(entry.id.clone(), entry.clone());
        entry
    }

    /// All entries, newest first. The sort is stable so entries with equal
    /// timestamps keep their insertion order relative to each other.
    pub async fn list_all(&self) -> Vec<Historico> {
        let mut entries: Vec<Historico> = self.store.read().await.values().cloned().collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries
    }

    /// Entries for one equipment id, same ordering as list_all
    pub async fn list_for_equipment(&self, equipment_id: &str) -> Vec<Historico> {
        let mut entries: Vec<Historico> = self
            .store
            .read()
            .await
            .values()
            .filter(|h| h.equipment_id.as_deref() == Some(equipment_id))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries
    }

    /// Insert a record keeping its existing id; skipped if the id is taken
    pub async fn insert_existing(&self, entry: Historico) -> bool {
        let mut store = self.store.write().await;
        if store.contains_key(&entry.id) {
            return false;
        }
        store.insert(entry.id.clone(), entry);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::historico::{EquipmentType, HistoricoAction};
    use std::time::Duration;

    fn entry_for(equipment_id: &str, action: HistoricoAction) -> CreateHistorico {
        CreateHistorico {
            action,
            user_id: "u1".to_string(),
            user_name: "Maria".to_string(),
            equipment_type: EquipmentType::Notebook,
            equipment_id: Some(equipment_id.to_string()),
            details: action.details().to_string(),
            equipment: Some("Notebook Dell - Maria".to_string()),
        }
    }

    #[tokio::test]
    async fn list_all_is_newest_first() {
        let repo = HistoricoRepository::default();
        let first = repo.create(entry_for("n1", HistoricoAction::Criacao)).await;
        tokio::time::sleep(Duration::from_millis(2)).await;
        let second = repo.create(entry_for("n2", HistoricoAction::Edicao)).await;
        tokio::time::sleep(Duration::from_millis(2)).await;
        let third = repo.create(entry_for("n1", HistoricoAction::Exclusao)).await;

        let ids: Vec<String> = repo.list_all().await.into_iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
    }

    #[tokio::test]
    async fn list_for_equipment_is_an_ordered_subset() {
        let repo = HistoricoRepository::default();
        repo.create(entry_for("n1", HistoricoAction::Criacao)).await;
        tokio::time::sleep(Duration::from_millis(2)).await;
        repo.create(entry_for("n2", HistoricoAction::Criacao)).await;
        tokio::time::sleep(Duration::from_millis(2)).await;
        repo.create(entry_for("n1", HistoricoAction::Edicao)).await;

        let all: Vec<String> = repo
            .list_all()
            .await
            .into_iter()
            .filter(|h| h.equipment_id.as_deref() == Some("n1"))
            .map(|h| h.id)
            .collect();
        let subset: Vec<String> = repo
            .list_for_equipment("n1")
            .await
            .into_iter()
            .map(|h| h.id)
            .collect();

        assert_eq!(subset, all);
        assert_eq!(subset.len(), 2);
        assert_eq!(
            repo.list_for_equipment("n1").await[0].action,
            HistoricoAction::Edicao
        );
    }
}
