//! Celulares store

use std::sync::Arc;

use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::celular::{Celular, CreateCelular, UpdateCelular},
};

#[derive(Clone, Default)]
pub struct CelularesRepository {
    store: Arc<RwLock<IndexMap<String, Celular>>>,
}

impl CelularesRepository {
    /// List all celulares in insertion order
    pub async fn list(&self) -> Vec<Celular> {
        self.store.read().await.values().cloned().collect()
    }

    /// Get a celular by ID
    pub async fn get_by_id(&self, id: &str) -> AppResult<Celular> {
        self.store
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Celular {} não encontrado", id)))
    }

    /// Create a celular with a fresh id and timestamps
    pub async fn create(&self, data: CreateCelular) -> Celular {
        let now = Utc::now();
        let celular = Celular {
            id: Uuid::new_v4().to_string(),
            responsavel: data.responsavel,
            numero_celular: data.numero_celular,
            uf: data.uf,
            centro_custo: data.centro_custo,
            segmento: data.segmento,
            cnpj: data.cnpj,
            modelo: data.modelo,
            status: data.status,
            email_login: data.email_login,
            senha_login: data.senha_login,
            email_supervisao: data.email_supervisao,
            senha_supervisao: data.senha_supervisao,
            imei: data.imei,
            data_recebimento: data.data_recebimento,
            valor: data.valor,
            data_checagem: data.data_checagem,
            termo_link: data.termo_link,
            foto_link: data.foto_link,
            created_at: now,
            updated_at: now,
        };
        self.store
            .write()
            .await
            .insert(celular.id.clone(), celular.clone());
        celular
    }

    /// Merge supplied fields over an existing celular and refresh updatedAt
    pub async fn update(&self, id: &str, data: UpdateCelular) -> AppResult<Celular> {
        let mut store = self.store.write().await;
        let celular = store
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Celular {} não encontrado", id)))?;

        if let Some(responsavel) = data.responsavel {
            celular.responsavel = responsavel;
        }
        if let Some(numero_celular) = data.numero_celular {
            celular.numero_celular = numero_celular;
        }
        if let Some(uf) = data.uf {
            celular.uf = uf;
        }
        if let Some(centro_custo) = data.centro_custo {
            celular.centro_custo = centro_custo;
        }
        if let Some(segmento) = data.segmento {
            celular.segmento = segmento;
        }
        if let Some(cnpj) = data.cnpj {
            celular.cnpj = cnpj;
        }
        if let Some(modelo) = data.modelo {
            celular.modelo = modelo;
        }
        if let Some(status) = data.status {
            celular.status = status;
        }
        if let Some(email_login) = data.email_login {
            celular.email_login = email_login;
        }
        if let Some(senha_login) = data.senha_login {
            celular.senha_login = senha_login;
        }
        if let Some(email_supervisao) = data.email_supervisao {
            celular.email_supervisao = email_supervisao;
        }
        if let Some(senha_supervisao) = data.senha_supervisao {
            celular.senha_supervisao = senha_supervisao;
        }
        if let Some(imei) = data.imei {
            celular.imei = imei;
        }
        if let Some(data_recebimento) = data.data_recebimento {
            celular.data_recebimento = data_recebimento;
        }
        if let Some(valor) = data.valor {
            celular.valor = valor;
        }
        if let Some(data_checagem) = data.data_checagem {
            celular.data_checagem = data_checagem;
        }
        if let Some(termo_link) = data.termo_link {
            celular.termo_link = termo_link;
        }
        if let Some(foto_link) = data.foto_link {
            celular.foto_link = foto_link;
        }
        celular.updated_at = Utc::now();

        Ok(celular.clone())
    }

    /// Remove a celular; returns whether a record was removed
    pub async fn delete(&self, id: &str) -> bool {
        self.store.write().await.shift_remove(id).is_some()
    }

    /// Insert a record keeping its existing id; skipped if the id is taken
    pub async fn insert_existing(&self, celular: Celular) -> bool {
        let mut store = self.store.write().await;
        if store.contains_key(&celular.id) {
            return false;
        }
        store.insert(celular.id.clone(), celular);
        true
    }
}
