//! Bulk export/import service
//!
//! Serializes the five tables as a single JSON document and restores them
//! with skip-on-conflict semantics: records whose id already exists are
//! left untouched, never overwritten.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    models::{celular::Celular, historico::Historico, notebook::Notebook, terminal::Terminal, user::User},
    repository::Repository,
};

const BACKUP_VERSION: &str = "1.0";

/// Per-table record counts
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct TableCounts {
    #[serde(default)]
    pub users: usize,
    #[serde(default)]
    pub notebooks: usize,
    #[serde(default)]
    pub celulares: usize,
    #[serde(default)]
    pub terminais: usize,
    #[serde(default)]
    pub historico: usize,
}

/// All five tables as arrays
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct BackupData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub notebooks: Vec<Notebook>,
    #[serde(default)]
    pub celulares: Vec<Celular>,
    #[serde(default)]
    pub terminais: Vec<Terminal>,
    #[serde(default)]
    pub historico: Vec<Historico>,
}

/// Top-level backup document
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    #[serde(default)]
    pub export_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: String,
    pub data: BackupData,
    #[serde(default)]
    pub stats: TableCounts,
}

/// Outcome of an import, per table
#[derive(Debug, Serialize, ToSchema)]
pub struct ImportReport {
    pub imported: TableCounts,
    pub skipped: TableCounts,
}

#[derive(Clone)]
pub struct BackupService {
    repository: Repository,
}

impl BackupService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Snapshot all five tables into one document
    pub async fn export(&self) -> BackupDocument {
        let data = BackupData {
            users: self.repository.users.list().await,
            notebooks: self.repository.notebooks.list().await,
            celulares: self.repository.celulares.list().await,
            terminais: self.repository.terminais.list().await,
            historico: self.repository.historico.list_all().await,
        };
        let stats = TableCounts {
            users: data.users.len(),
            notebooks: data.notebooks.len(),
            celulares: data.celulares.len(),
            terminais: data.terminais.len(),
            historico: data.historico.len(),
        };
        tracing::info!(
            users = stats.users,
            notebooks = stats.notebooks,
            celulares = stats.celulares,
            terminais = stats.terminais,
            historico = stats.historico,
            "Exported backup"
        );
        BackupDocument {
            export_date: Some(Utc::now()),
            version: BACKUP_VERSION.to_string(),
            data,
            stats,
        }
    }

    /// Restore a document record by record, skipping existing ids
    pub async fn import(&self, document: BackupDocument) -> ImportReport {
        let mut imported = TableCounts::default();
        let mut skipped = TableCounts::default();

        for user in document.data.users {
            if self.repository.users.insert_existing(user).await {
                imported.users += 1;
            } else {
                skipped.users += 1;
            }
        }
        for notebook in document.data.notebooks {
            if self.repository.notebooks.insert_existing(notebook).await {
                imported.notebooks += 1;
            } else {
                skipped.notebooks += 1;
            }
        }
        for celular in document.data.celulares {
            if self.repository.celulares.insert_existing(celular).await {
                imported.celulares += 1;
            } else {
                skipped.celulares += 1;
            }
        }
        for terminal in document.data.terminais {
            if self.repository.terminais.insert_existing(terminal).await {
                imported.terminais += 1;
            } else {
                skipped.terminais += 1;
            }
        }
        for entry in document.data.historico {
            if self.repository.historico.insert_existing(entry).await {
                imported.historico += 1;
            } else {
                skipped.historico += 1;
            }
        }

        tracing::info!(
            users = imported.users,
            notebooks = imported.notebooks,
            celulares = imported.celulares,
            terminais = imported.terminais,
            historico = imported.historico,
            "Imported backup"
        );
        ImportReport { imported, skipped }
    }
}
