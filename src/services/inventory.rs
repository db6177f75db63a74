//! Equipment inventory service
//!
//! Wraps the equipment stores and appends one audit entry after each
//! successful create, update or delete. Recording happens synchronously in
//! the same request; a failed recording would not roll the mutation back.

use crate::{
    error::AppResult,
    models::{
        celular::{Celular, CreateCelular, UpdateCelular},
        historico::{Actor, EquipmentType, HistoricoAction},
        notebook::{CreateNotebook, Notebook, UpdateNotebook},
        terminal::{CreateTerminal, Terminal, UpdateTerminal},
    },
    repository::Repository,
};

use super::historico::HistoricoService;

fn notebook_label(notebook: &Notebook) -> String {
    format!("Notebook {} - {}", notebook.modelo, notebook.responsavel)
}

fn celular_label(celular: &Celular) -> String {
    format!("Celular {} - {}", celular.modelo, celular.responsavel)
}

fn terminal_label(terminal: &Terminal) -> String {
    format!("Terminal {} - {}", terminal.numero_relogio, terminal.segmento)
}

#[derive(Clone)]
pub struct InventoryService {
    repository: Repository,
    historico: HistoricoService,
}

impl InventoryService {
    pub fn new(repository: Repository) -> Self {
        let historico = HistoricoService::new(repository.clone());
        Self {
            repository,
            historico,
        }
    }

    // Notebooks

    pub async fn list_notebooks(&self) -> Vec<Notebook> {
        self.repository.notebooks.list().await
    }

    pub async fn get_notebook(&self, id: &str) -> AppResult<Notebook> {
        self.repository.notebooks.get_by_id(id).await
    }

    pub async fn create_notebook(
        &self,
        data: CreateNotebook,
        actor: &Actor,
    ) -> AppResult<Notebook> {
        let notebook = self.repository.notebooks.create(data).await;
        self.historico
            .record(
                HistoricoAction::Criacao,
                actor,
                EquipmentType::Notebook,
                Some(notebook.id.clone()),
                Some(notebook_label(&notebook)),
            )
            .await;
        tracing::info!(notebook_id = %notebook.id, "Notebook created");
        Ok(notebook)
    }

    pub async fn update_notebook(
        &self,
        id: &str,
        data: UpdateNotebook,
        actor: &Actor,
    ) -> AppResult<Notebook> {
        let notebook = self.repository.notebooks.update(id, data).await?;
        self.historico
            .record(
                HistoricoAction::Edicao,
                actor,
                EquipmentType::Notebook,
                Some(notebook.id.clone()),
                Some(notebook_label(&notebook)),
            )
            .await;
        Ok(notebook)
    }

    /// Delete a notebook. The record is read first so the audit entry can
    /// keep a label snapshot of what was removed.
    pub async fn delete_notebook(&self, id: &str, actor: &Actor) -> AppResult<()> {
        let notebook = self.repository.notebooks.get_by_id(id).await?;
        if self.repository.notebooks.delete(id).await {
            self.historico
                .record(
                    HistoricoAction::Exclusao,
                    actor,
                    EquipmentType::Notebook,
                    Some(notebook.id.clone()),
                    Some(notebook_label(&notebook)),
                )
                .await;
            tracing::info!(notebook_id = %notebook.id, "Notebook deleted");
        }
        Ok(())
    }

    // Celulares

    pub async fn list_celulares(&self) -> Vec<Celular> {
        self.repository.celulares.list().await
    }

    pub async fn get_celular(&self, id: &str) -> AppResult<Celular> {
        self.repository.celulares.get_by_id(id).await
    }

    pub async fn create_celular(&self, data: CreateCelular, actor: &Actor) -> AppResult<Celular> {
        let celular = self.repository.celulares.create(data).await;
        self.historico
            .record(
                HistoricoAction::Criacao,
                actor,
                EquipmentType::Celular,
                Some(celular.id.clone()),
                Some(celular_label(&celular)),
            )
            .await;
        tracing::info!(celular_id = %celular.id, "Celular created");
        Ok(celular)
    }

    pub async fn update_celular(
        &self,
        id: &str,
        data: UpdateCelular,
        actor: &Actor,
    ) -> AppResult<Celular> {
        let celular = self.repository.celulares.update(id, data).await?;
        self.historico
            .record(
                HistoricoAction::Edicao,
                actor,
                EquipmentType::Celular,
                Some(celular.id.clone()),
                Some(celular_label(&celular)),
            )
            .await;
        Ok(celular)
    }

    pub async fn delete_celular(&self, id: &str, actor: &Actor) -> AppResult<()> {
        let celular = self.repository.celulares.get_by_id(id).await?;
        if self.repository.celulares.delete(id).await {
            self.historico
                .record(
                    HistoricoAction::Exclusao,
                    actor,
                    EquipmentType::Celular,
                    Some(celular.id.clone()),
                    Some(celular_label(&celular)),
                )
                .await;
            tracing::info!(celular_id = %celular.id, "Celular deleted");
        }
        Ok(())
    }

    // Terminais

    pub async fn list_terminais(&self) -> Vec<Terminal> {
        self.repository.terminais.list().await
    }

    pub async fn get_terminal(&self, id: &str) -> AppResult<Terminal> {
        self.repository.terminais.get_by_id(id).await
    }

    pub async fn create_terminal(
        &self,
        data: CreateTerminal,
        actor: &Actor,
    ) -> AppResult<Terminal> {
        let terminal = self.repository.terminais.create(data).await;
        self.historico
            .record(
                HistoricoAction::Criacao,
                actor,
                EquipmentType::Terminal,
                Some(terminal.id.clone()),
                Some(terminal_label(&terminal)),
            )
            .await;
        tracing::info!(terminal_id = %terminal.id, "Terminal created");
        Ok(terminal)
    }

    pub async fn update_terminal(
        &self,
        id: &str,
        data: UpdateTerminal,
        actor: &Actor,
    ) -> AppResult<Terminal> {
        let terminal = self.repository.terminais.update(id, data).await?;
        self.historico
            .record(
                HistoricoAction::Edicao,
                actor,
                EquipmentType::Terminal,
                Some(terminal.id.clone()),
                Some(terminal_label(&terminal)),
            )
            .await;
        Ok(terminal)
    }

    pub async fn delete_terminal(&self, id: &str, actor: &Actor) -> AppResult<()> {
        let terminal = self.repository.terminais.get_by_id(id).await?;
        if self.repository.terminais.delete(id).await {
            self.historico
                .record(
                    HistoricoAction::Exclusao,
                    actor,
                    EquipmentType::Terminal,
                    Some(terminal.id.clone()),
                    Some(terminal_label(&terminal)),
                )
                .await;
            tracing::info!(terminal_id = %terminal.id, "Terminal deleted");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn notebook_input() -> CreateNotebook {
        CreateNotebook {
            responsavel: "Maria Silva".to_string(),
            uf: "SP".to_string(),
            centro_custo: None,
            segmento: "Varejo".to_string(),
            cnpj: None,
            modelo: "Dell Latitude 5440".to_string(),
            fornecedor: "OPUS".to_string(),
            status: "EM USO".to_string(),
            processador: None,
            office: None,
            senha_admin: None,
            patrimonio: None,
            data_recebimento: None,
            valor: None,
            data_checagem: None,
            termo_link: None,
            foto_link: None,
            checklist_termo: None,
            checklist_antivirus: None,
            checklist_ferramenta_a: None,
            checklist_ferramenta_b: None,
        }
    }

    fn terminal_input() -> CreateTerminal {
        CreateTerminal {
            numero_relogio: "REP-017".to_string(),
            status: "EM USO".to_string(),
            uf: "MG".to_string(),
            segmento: "Logística".to_string(),
            centro_custo: None,
            status_next: None,
            observacao: None,
            data_checagem: None,
            termo_link: None,
            foto_link: None,
        }
    }

    #[tokio::test]
    async fn every_mutation_appends_exactly_one_entry() {
        let repository = Repository::new();
        let inventory = InventoryService::new(repository.clone());
        let actor = Actor::system();

        let notebook = inventory
            .create_notebook(notebook_input(), &actor)
            .await
            .unwrap();
        assert_eq!(repository.historico.list_all().await.len(), 1);

        inventory
            .update_notebook(&notebook.id, UpdateNotebook::default(), &actor)
            .await
            .unwrap();
        assert_eq!(repository.historico.list_all().await.len(), 2);

        inventory.delete_notebook(&notebook.id, &actor).await.unwrap();
        let entries = repository.historico.list_all().await;
        assert_eq!(entries.len(), 3);

        // Newest first: exclusao, edicao, criacao, all for the same record
        assert_eq!(entries[0].action, HistoricoAction::Exclusao);
        assert_eq!(entries[1].action, HistoricoAction::Edicao);
        assert_eq!(entries[2].action, HistoricoAction::Criacao);
        for entry in &entries {
            assert_eq!(entry.equipment_id.as_deref(), Some(notebook.id.as_str()));
            assert_eq!(entry.equipment_type, EquipmentType::Notebook);
        }
    }

    #[tokio::test]
    async fn delete_keeps_prior_entries() {
        let repository = Repository::new();
        let inventory = InventoryService::new(repository.clone());
        let actor = Actor::system();

        let notebook = inventory
            .create_notebook(notebook_input(), &actor)
            .await
            .unwrap();
        inventory
            .update_notebook(&notebook.id, UpdateNotebook::default(), &actor)
            .await
            .unwrap();
        inventory
            .update_notebook(&notebook.id, UpdateNotebook::default(), &actor)
            .await
            .unwrap();
        assert_eq!(repository.historico.list_all().await.len(), 3);

        inventory.delete_notebook(&notebook.id, &actor).await.unwrap();

        let entries = repository.historico.list_for_equipment(&notebook.id).await;
        assert_eq!(entries.len(), 4, "no entry is cascade-deleted");
        assert_eq!(entries[0].action, HistoricoAction::Exclusao);
    }

    #[tokio::test]
    async fn delete_missing_equipment_records_nothing() {
        let repository = Repository::new();
        let inventory = InventoryService::new(repository.clone());

        assert!(matches!(
            inventory.delete_notebook("nope", &Actor::system()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(repository.historico.list_all().await.is_empty());
    }

    #[tokio::test]
    async fn audit_entry_snapshots_actor_and_label() {
        let repository = Repository::new();
        let inventory = InventoryService::new(repository.clone());
        let actor = Actor {
            id: "u7".to_string(),
            name: "João".to_string(),
        };

        let terminal = inventory
            .create_terminal(terminal_input(), &actor)
            .await
            .unwrap();

        let entry = &repository.historico.list_all().await[0];
        assert_eq!(entry.user_id, "u7");
        assert_eq!(entry.user_name, "João");
        assert_eq!(entry.details, "Cadastrou novo equipamento");
        assert_eq!(
            entry.equipment.as_deref(),
            Some(format!("Terminal {} - {}", terminal.numero_relogio, terminal.segmento).as_str())
        );
    }

    #[tokio::test]
    async fn system_fallback_actor_is_recorded_as_sistema() {
        let repository = Repository::new();
        let inventory = InventoryService::new(repository.clone());

        inventory
            .create_terminal(terminal_input(), &Actor::system())
            .await
            .unwrap();

        let entry = &repository.historico.list_all().await[0];
        assert_eq!(entry.user_id, "system");
        assert_eq!(entry.user_name, "Sistema");
    }
}
