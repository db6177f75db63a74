//! Authentication service

use crate::{
    error::{AppError, AppResult},
    models::user::User,
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
}

impl AuthService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Verify credentials and return the matching user.
    ///
    /// The stored credential is compared verbatim; there is no hashing and
    /// no session is established. An unknown email and a wrong senha are
    /// indistinguishable to the caller, an inactive account is not.
    pub async fn login(&self, email: &str, senha: &str) -> AppResult<User> {
        let user = self
            .repository
            .users
            .get_by_email(email)
            .await
            .ok_or_else(|| AppError::Authentication("Credenciais inválidas".to_string()))?;

        if user.senha != senha {
            return Err(AppError::Authentication("Credenciais inválidas".to_string()));
        }

        if !user.ativo {
            return Err(AppError::Authorization("Usuário inativo".to_string()));
        }

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{CreateUser, Perfil};

    async fn service_with_user(ativo: bool) -> AuthService {
        let repository = Repository::new();
        repository
            .users
            .create(CreateUser {
                nome: "Maria Silva".to_string(),
                email: "maria@corp.com".to_string(),
                senha: "s3nh4".to_string(),
                perfil: Perfil::Suporte,
                ativo: Some(ativo),
            })
            .await;
        AuthService::new(repository)
    }

    #[tokio::test]
    async fn valid_credentials_return_the_user() {
        let auth = service_with_user(true).await;
        let user = auth.login("maria@corp.com", "s3nh4").await.unwrap();
        assert_eq!(user.email, "maria@corp.com");
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_senha_look_the_same() {
        let auth = service_with_user(true).await;
        assert!(matches!(
            auth.login("nobody@corp.com", "s3nh4").await,
            Err(AppError::Authentication(_))
        ));
        assert!(matches!(
            auth.login("maria@corp.com", "errada").await,
            Err(AppError::Authentication(_))
        ));
    }

    #[tokio::test]
    async fn inactive_user_is_forbidden_not_unauthorized() {
        let auth = service_with_user(false).await;
        assert!(matches!(
            auth.login("maria@corp.com", "s3nh4").await,
            Err(AppError::Authorization(_))
        ));
    }
}
