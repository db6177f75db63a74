//! Repository layer: one in-memory keyed store per entity type

pub mod celulares;
pub mod historico;
pub mod notebooks;
pub mod terminais;
pub mod users;

use crate::config::SeedConfig;
use crate::models::user::{CreateUser, Perfil};

/// Main repository struct aggregating the per-entity stores
#[derive(Clone, Default)]
pub struct Repository {
    pub users: users::UsersRepository,
    pub notebooks: notebooks::NotebooksRepository,
    pub celulares: celulares::CelularesRepository,
    pub terminais: terminais::TerminaisRepository,
    pub historico: historico::HistoricoRepository,
}

impl Repository {
    /// Create a new repository with empty stores
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the default administrator account unless disabled by config or
    /// an account with the configured email already exists
    pub async fn seed(&self, seed: &SeedConfig) {
        if !seed.enabled {
            return;
        }
        if self.users.get_by_email(&seed.email).await.is_some() {
            return;
        }
        let admin = self
            .users
            .create(CreateUser {
                nome: seed.nome.clone(),
                email: seed.email.clone(),
                senha: seed.senha.clone(),
                perfil: Perfil::Admin,
                ativo: Some(true),
            })
            .await;
        tracing::info!("Seeded administrator account {}", admin.email);
    }
}
