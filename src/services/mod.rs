//! Business logic services

pub mod auth;
pub mod backup;
pub mod historico;
pub mod inventory;
pub mod stats;
pub mod users;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub users: users::UsersService,
    pub inventory: inventory::InventoryService,
    pub historico: historico::HistoricoService,
    pub stats: stats::StatsService,
    pub backup: backup::BackupService,
}

impl Services {
    /// Create all services sharing the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            inventory: inventory::InventoryService::new(repository.clone()),
            historico: historico::HistoricoService::new(repository.clone()),
            stats: stats::StatsService::new(repository.clone()),
            backup: backup::BackupService::new(repository),
        }
    }
}
