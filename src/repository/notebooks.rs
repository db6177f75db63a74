//! Notebooks store

use std::sync::Arc;

use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::notebook::{CreateNotebook, Notebook, UpdateNotebook},
};

#[derive(Clone, Default)]
pub struct NotebooksRepository {
    store: Arc<RwLock<IndexMap<String, Notebook>>>,
}

impl NotebooksRepository {
    /// List all notebooks in insertion order
    pub async fn list(&self) -> Vec<Notebook> {
        self.store.read().await.values().cloned().collect()
    }

    /// Get a notebook by ID
    pub async fn get_by_id(&self, id: &str) -> AppResult<Notebook> {
        self.store
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Notebook {} não encontrado", id)))
    }

    /// Create a notebook with a fresh id, defaults and timestamps
    pub async fn create(&self, data: CreateNotebook) -> Notebook {
        let now = Utc::now();
        let notebook = Notebook {
            id: Uuid::new_v4().to_string(),
            responsavel: data.responsavel,
            uf: data.uf,
            centro_custo: data.centro_custo,
            segmento: data.segmento,
            cnpj: data.cnpj,
            modelo: data.modelo,
            fornecedor: data.fornecedor,
            status: data.status,
            processador: data.processador,
            office: data.office,
            senha_admin: data.senha_admin,
            patrimonio: data.patrimonio,
            data_recebimento: data.data_recebimento,
            valor: data.valor,
            data_checagem: data.data_checagem,
            termo_link: data.termo_link,
            foto_link: data.foto_link,
            checklist_termo: data.checklist_termo.unwrap_or(false),
            checklist_antivirus: data.checklist_antivirus.unwrap_or(false),
            checklist_ferramenta_a: data.checklist_ferramenta_a.unwrap_or(false),
            checklist_ferramenta_b: data.checklist_ferramenta_b.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };
        self.store
            .write()
            .await
            .insert(notebook.id.clone(), notebook.clone());
        notebook
    }

    /// Merge supplied fields over an existing notebook and refresh updatedAt.
    /// Nullable fields honor an explicit null by clearing the stored value.
    pub async fn update(&self, id: &str, data: UpdateNotebook) -> AppResult<Notebook> {
        let mut store = self.store.write().await;
        let notebook = store
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Notebook {} não encontrado", id)))?;

        if let Some(responsavel) = data.responsavel {
            notebook.responsavel = responsavel;
        }
        if let Some(uf) = data.uf {
            notebook.uf = uf;
        }
        if let Some(centro_custo) = data.centro_custo {
            notebook.centro_custo = centro_custo;
        }
        if let Some(segmento) = data.segmento {
            notebook.segmento = segmento;
        }
        if let Some(cnpj) = data.cnpj {
            notebook.cnpj = cnpj;
        }
        if let Some(modelo) = data.modelo {
            notebook.modelo = modelo;
        }
        if let Some(fornecedor) = data.fornecedor {
            notebook.fornecedor = fornecedor;
        }
        if let Some(status) = data.status {
            notebook.status = status;
        }
        if let Some(processador) = data.processador {
            notebook.processador = processador;
        }
        if let Some(office) = data.office {
            notebook.office = office;
        }
        if let Some(senha_admin) = data.senha_admin {
            notebook.senha_admin = senha_admin;
        }
        if let Some(patrimonio) = data.patrimonio {
            notebook.patrimonio = patrimonio;
        }
        if let Some(data_recebimento) = data.data_recebimento {
            notebook.data_recebimento = data_recebimento;
        }
        if let Some(valor) = data.valor {
            notebook.valor = valor;
        }
        if let Some(data_checagem) = data.data_checagem {
            notebook.data_checagem = data_checagem;
        }
        if let Some(termo_link) = data.termo_link {
            notebook.termo_link = termo_link;
        }
        if let Some(foto_link) = data.foto_link {
            notebook.foto_link = foto_link;
        }
        if let Some(checklist_termo) = data.checklist_termo {
            notebook.checklist_termo = checklist_termo;
        }
        if let Some(checklist_antivirus) = data.checklist_antivirus {
            notebook.checklist_antivirus = checklist_antivirus;
        }
        if let Some(checklist_ferramenta_a) = data.checklist_ferramenta_a {
            notebook.checklist_ferramenta_a = checklist_ferramenta_a;
        }
        if let Some(checklist_ferramenta_b) = data.checklist_ferramenta_b {
            notebook.checklist_ferramenta_b = checklist_ferramenta_b;
        }
        notebook.updated_at = Utc::now();

        Ok(notebook.clone())
    }

    /// Remove a notebook; returns whether a record was removed
    pub async fn delete(&self, id: &str) -> bool {
        self.store.write().await.shift_remove(id).is_some()
    }

    /// Insert a record keeping its existing id; skipped if the id is taken
    pub async fn insert_existing(&self, notebook: Notebook) -> bool {
        let mut store = self.store.write().await;
        if store.contains_key(&notebook.id) {
            return false;
        }
        store.insert(notebook.id.clone(), notebook);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    pub(crate) fn create_input() -> CreateNotebook {
        CreateNotebook {
            responsavel: "Maria Silva".to_string(),
            uf: "SP".to_string(),
            centro_custo: None,
            segmento: "Varejo".to_string(),
            cnpj: None,
            modelo: "Dell Latitude 5440".to_string(),
            fornecedor: "OPUS".to_string(),
            status: "EM USO".to_string(),
            processador: Some("i5-1335U".to_string()),
            office: None,
            senha_admin: None,
            patrimonio: Some("NB-0042".to_string()),
            data_recebimento: None,
            valor: None,
            data_checagem: None,
            termo_link: None,
            foto_link: None,
            checklist_termo: None,
            checklist_antivirus: Some(true),
            checklist_ferramenta_a: None,
            checklist_ferramenta_b: None,
        }
    }

    #[tokio::test]
    async fn create_applies_defaults_and_timestamps() {
        let repo = NotebooksRepository::default();
        let notebook = repo.create(create_input()).await;

        assert!(!notebook.id.is_empty());
        assert!(!notebook.checklist_termo, "omitted flags default to false");
        assert!(notebook.checklist_antivirus);
        assert_eq!(notebook.created_at, notebook.updated_at);
    }

    #[tokio::test]
    async fn empty_update_only_refreshes_updated_at() {
        let repo = NotebooksRepository::default();
        let created = repo.create(create_input()).await;

        tokio::time::sleep(Duration::from_millis(2)).await;
        let updated = repo
            .update(&created.id, UpdateNotebook::default())
            .await
            .unwrap();

        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.responsavel, created.responsavel);
        assert_eq!(updated.status, created.status);
        assert_eq!(updated.patrimonio, created.patrimonio);
    }

    #[tokio::test]
    async fn update_merges_and_honors_explicit_null() {
        let repo = NotebooksRepository::default();
        let created = repo.create(create_input()).await;

        // Absent fields stay, explicit null clears
        let partial: UpdateNotebook = serde_json::from_value(serde_json::json!({
            "status": "DEVOLVER",
            "patrimonio": null,
        }))
        .unwrap();
        let updated = repo.update(&created.id, partial).await.unwrap();

        assert_eq!(updated.status, "DEVOLVER");
        assert_eq!(updated.patrimonio, None);
        assert_eq!(updated.processador, created.processador);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let repo = NotebooksRepository::default();
        assert!(matches!(
            repo.update("nope", UpdateNotebook::default()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let repo = NotebooksRepository::default();
        let notebook = repo.create(create_input()).await;

        assert!(repo.delete(&notebook.id).await);
        assert!(matches!(
            repo.get_by_id(&notebook.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let repo = NotebooksRepository::default();
        let first = repo.create(create_input()).await;
        let second = repo.create(create_input()).await;
        let third = repo.create(create_input()).await;

        repo.delete(&second.id).await;
        let ids: Vec<String> = repo.list().await.into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![first.id, third.id]);
    }
}
