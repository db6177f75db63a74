//! Users store

use std::sync::Arc;

use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, UpdateUser, User},
};

#[derive(Clone, Default)]
pub struct UsersRepository {
    store: Arc<RwLock<IndexMap<String, User>>>,
}

impl UsersRepository {
    /// List all users in insertion order
    pub async fn list(&self) -> Vec<User> {
        self.store.read().await.values().cloned().collect()
    }

    /// Get a user by ID
    pub async fn get_by_id(&self, id: &str) -> AppResult<User> {
        self.store
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Usuário {} não encontrado", id)))
    }

    /// Exact-match email lookup, byte-for-byte. First match wins if
    /// duplicates ever slipped past the creation-time check.
    pub async fn get_by_email(&self, email: &str) -> Option<User> {
        self.store
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned()
    }

    /// Create a user with a fresh id and creation timestamp
    pub async fn create(&self, data: CreateUser) -> User {
        let user = User {
            id: Uuid::new_v4().to_string(),
            nome: data.nome,
            email: data.email,
            senha: data.senha,
            perfil: data.perfil,
            ativo: data.ativo.unwrap_or(true),
            created_at: Utc::now(),
        };
        self.store
            .write()
            .await
            .insert(user.id.clone(), user.clone());
        user
    }

    /// Merge supplied fields over an existing user
    pub async fn update(&self, id: &str, data: UpdateUser) -> AppResult<User> {
        let mut store = self.store.write().await;
        let user = store
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Usuário {} não encontrado", id)))?;

        if let Some(nome) = data.nome {
            user.nome = nome;
        }
        if let Some(email) = data.email {
            user.email = email;
        }
        if let Some(senha) = data.senha {
            user.senha = senha;
        }
        if let Some(perfil) = data.perfil {
            user.perfil = perfil;
        }
        if let Some(ativo) = data.ativo {
            user.ativo = ativo;
        }

        Ok(user.clone())
    }

    /// Remove a user; returns whether a record was removed
    pub async fn delete(&self, id: &str) -> bool {
        self.store.write().await.shift_remove(id).is_some()
    }

    /// Insert a record keeping its existing id; skipped if the id is taken
    pub async fn insert_existing(&self, user: User) -> bool {
        let mut store = self.store.write().await;
        if store.contains_key(&user.id) {
            return false;
        }
        store.insert(user.id.clone(), user);
        true
    }
}
