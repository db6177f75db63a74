//! Terminais store

use std::sync::Arc;

use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::terminal::{CreateTerminal, Terminal, UpdateTerminal},
};

#[derive(Clone, Default)]
pub struct TerminaisRepository {
    store: Arc<RwLock<IndexMap<String, Terminal>>>,
}

impl TerminaisRepository {
    /// List all terminais in insertion order
    pub async fn list(&self) -> Vec<Terminal> {
        self.store.read().await.values().cloned().collect()
    }

    /// Get a terminal by ID
    pub async fn get_by_id(&self, id: &str) -> AppResult<Terminal> {
        self.store
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Terminal {} não encontrado", id)))
    }

    /// Create a terminal with a fresh id and timestamps
    pub async fn create(&self, data: CreateTerminal) -> Terminal {
        let now = Utc::now();
        let terminal = Terminal {
            id: Uuid::new_v4().to_string(),
            numero_relogio: data.numero_relogio,
            status: data.status,
            uf: data.uf,
            segmento: data.segmento,
            centro_custo: data.centro_custo,
            status_next: data.status_next,
            observacao: data.observacao,
            data_checagem: data.data_checagem,
            termo_link: data.termo_link,
            foto_link: data.foto_link,
            created_at: now,
            updated_at: now,
        };
        self.store
            .write()
            .await
            .insert(terminal.id.clone(), terminal.clone());
        terminal
    }

    /// Merge supplied fields over an existing terminal and refresh updatedAt
    pub async fn update(&self, id: &str, data: UpdateTerminal) -> AppResult<Terminal> {
        let mut store = self.store.write().await;
        let terminal = store
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Terminal {} não encontrado", id)))?;

        if let Some(numero_relogio) = data.numero_relogio {
            terminal.numero_relogio = numero_relogio;
        }
        if let Some(status) = data.status {
            terminal.status = status;
        }
        if let Some(uf) = data.uf {
            terminal.uf = uf;
        }
        if let Some(segmento) = data.segmento {
            terminal.segmento = segmento;
        }
        if let Some(centro_custo) = data.centro_custo {
            terminal.centro_custo = centro_custo;
        }
        if let Some(status_next) = data.status_next {
            terminal.status_next = status_next;
        }
        if let Some(observacao) = data.observacao {
            terminal.observacao = observacao;
        }
        if let Some(data_checagem) = data.data_checagem {
            terminal.data_checagem = data_checagem;
        }
        if let Some(termo_link) = data.termo_link {
            terminal.termo_link = termo_link;
        }
        if let Some(foto_link) = data.foto_link {
            terminal.foto_link = foto_link;
        }
        terminal.updated_at = Utc::now();

        Ok(terminal.clone())
    }

    /// Remove a terminal; returns whether a record was removed
    pub async fn delete(&self, id: &str) -> bool {
        self.store.write().await.shift_remove(id).is_some()
    }

    /// Insert a record keeping its existing id; skipped if the id is taken
    pub async fn insert_existing(&self, terminal: Terminal) -> bool {
        let mut store = self.store.write().await;
        if store.contains_key(&terminal.id) {
            return false;
        }
        store.insert(terminal.id.clone(), terminal);
        true
    }
}
