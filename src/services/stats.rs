//! Dashboard statistics service

use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use crate::repository::Repository;

/// Dashboard summary over all equipment tables
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_equipment: i64,
    pub by_status: IndexMap<String, i64>,
    #[serde(rename = "byUF")]
    pub by_uf: IndexMap<String, i64>,
    pub by_segmento: IndexMap<String, i64>,
    pub by_fornecedor: IndexMap<String, i64>,
}

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Recompute the dashboard summary from current equipment state. No
    /// caching; a full scan of the three tables on every call.
    ///
    /// Keys are the literal strings found in the data. Only notebooks carry
    /// a supplier, so celulares and terminais never touch byFornecedor.
    pub async fn dashboard(&self) -> DashboardStats {
        let notebooks = self.repository.notebooks.list().await;
        let celulares = self.repository.celulares.list().await;
        let terminais = self.repository.terminais.list().await;

        let mut stats = DashboardStats {
            total_equipment: 0,
            by_status: IndexMap::new(),
            by_uf: IndexMap::new(),
            by_segmento: IndexMap::new(),
            by_fornecedor: IndexMap::new(),
        };

        let tuples = notebooks
            .iter()
            .map(|n| (&n.status, &n.uf, &n.segmento, Some(&n.fornecedor)))
            .chain(
                celulares
                    .iter()
                    .map(|c| (&c.status, &c.uf, &c.segmento, None)),
            )
            .chain(
                terminais
                    .iter()
                    .map(|t| (&t.status, &t.uf, &t.segmento, None)),
            );

        for (status, uf, segmento, fornecedor) in tuples {
            stats.total_equipment += 1;
            *stats.by_status.entry(status.clone()).or_insert(0) += 1;
            *stats.by_uf.entry(uf.clone()).or_insert(0) += 1;
            *stats.by_segmento.entry(segmento.clone()).or_insert(0) += 1;
            if let Some(fornecedor) = fornecedor {
                *stats.by_fornecedor.entry(fornecedor.clone()).or_insert(0) += 1;
            }
        }

        stats
    }
}
