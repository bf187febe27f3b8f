use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Duration;

use crate::domain::user::models::Authenticated;
use crate::domain::user::models::AuthenticationState;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Owns no state of its own: records live in the injected repository and
/// the signing key in the injected authenticator.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    token_ttl: Duration,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password hasher and token signer
    /// * `token_ttl` - Lifetime of tokens issued at login
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>, token_ttl: Duration) -> Self {
        Self {
            repository,
            authenticator,
            token_ttl,
        }
    }

    async fn login(&self, username: &str, password: &str) -> Result<Authenticated, UserError> {
        let user = match Username::new(username.to_string()) {
            Ok(username) => self.repository.find_by_username(&username).await?,
            Err(_) => None,
        };

        // Unknown user and wrong password are indistinguishable to the caller.
        let user = user.ok_or(UserError::InvalidCredentials)?;

        let result = self
            .authenticator
            .authenticate(
                password,
                &user.password_hash,
                user.username.as_str(),
                self.token_ttl,
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                AuthenticationError::PasswordError(err) => UserError::Password(err),
                AuthenticationError::JwtError(err) => UserError::TokenIssuance(err.to_string()),
            })?;

        Ok(Authenticated {
            user,
            access_token: result.access_token,
        })
    }

    async fn resolve_token(&self, token: String) -> Result<Authenticated, UserError> {
        let claims = self
            .authenticator
            .validate_token(&token)
            .map_err(|e| UserError::Unauthenticated(e.to_string()))?;

        let username =
            Username::new(claims.sub).map_err(|e| UserError::Unauthenticated(e.to_string()))?;
        let user = self.get_user_by_username(&username).await?;

        Ok(Authenticated {
            user,
            access_token: token,
        })
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if self.repository.exists(&command.username).await? {
            return Err(UserError::UsernameAlreadyExists(
                command.username.as_str().to_string(),
            ));
        }

        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self.authenticator.hash_password(&command.password)?;

        let user = User {
            username: command.username,
            email: command.email,
            display_name: command.display_name,
            password_hash,
        };

        // The repository re-checks both keys under its own lock.
        let created_user = self.repository.create(user).await?;

        tracing::info!(username = %created_user.username, "User registered");

        Ok(created_user)
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }

    async fn authenticate(&self, state: AuthenticationState) -> AuthenticationState {
        let outcome = match state {
            AuthenticationState::Anonymous => Err(UserError::MissingCredentials),
            AuthenticationState::Authenticating(Credentials::Password { username, password }) => {
                let outcome = self.login(&username, &password).await;
                if let Err(e) = &outcome {
                    tracing::warn!(username = %username, error = %e, "Login rejected");
                }
                outcome
            }
            AuthenticationState::Authenticating(Credentials::Bearer(token)) => {
                self.resolve_token(token).await
            }
            terminal => return terminal,
        };

        match &outcome {
            Err(UserError::Unauthenticated(reason)) => {
                tracing::debug!(reason = %reason, "Bearer token rejected");
            }
            Err(UserError::NotFoundByUsername(username)) => {
                tracing::warn!(username = %username, "Bearer token for unknown user");
            }
            _ => {}
        }

        outcome.into()
    }
}
