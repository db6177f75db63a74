//! Users service

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, UpdateUser, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<User> {
        self.repository.users.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    /// Create a user. Email uniqueness is an app-level pre-check performed
    /// before any write; the store itself does not enforce it.
    pub async fn create(&self, data: CreateUser) -> AppResult<User> {
        if self.repository.users.get_by_email(&data.email).await.is_some() {
            return Err(AppError::Conflict("Email já cadastrado".to_string()));
        }
        Ok(self.repository.users.create(data).await)
    }

    pub async fn update(&self, id: &str, data: UpdateUser) -> AppResult<User> {
        self.repository.users.update(id, data).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.repository.users.delete(id).await {
            return Err(AppError::NotFound(format!("Usuário {} não encontrado", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Perfil;

    fn create_input(email: &str) -> CreateUser {
        CreateUser {
            nome: "Maria Silva".to_string(),
            email: email.to_string(),
            senha: "secreta".to_string(),
            perfil: Perfil::Controle,
            ativo: None,
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let service = UsersService::new(Repository::new());
        service.create(create_input("ana@corp.com")).await.unwrap();

        assert!(matches!(
            service.create(create_input("ana@corp.com")).await,
            Err(AppError::Conflict(_))
        ));
        assert_eq!(service.list().await.len(), 1, "no partial write");
    }

    #[tokio::test]
    async fn email_differing_only_in_case_is_accepted() {
        let service = UsersService::new(Repository::new());
        service.create(create_input("ana@corp.com")).await.unwrap();
        service.create(create_input("Ana@corp.com")).await.unwrap();
        assert_eq!(service.list().await.len(), 2);
    }

    #[tokio::test]
    async fn delete_missing_user_is_not_found() {
        let service = UsersService::new(Repository::new());
        assert!(matches!(
            service.delete("nope").await,
            Err(AppError::NotFound(_))
        ));
    }
}
