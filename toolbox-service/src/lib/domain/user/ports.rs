use async_trait::async_trait;

use crate::domain::user::models::AuthenticationState;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, email, password and display name
    ///
    /// # Returns
    /// Stored user record
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Hashing failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Retrieve user by unique username.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;

    /// Drive an authentication attempt to a terminal state.
    ///
    /// Password credentials are checked against the store and, on success,
    /// exchanged for a fresh token. Bearer credentials are verified and
    /// resolved back to their user. Terminal states are returned unchanged.
    async fn authenticate(&self, state: AuthenticationState) -> AuthenticationState;
}

/// Credential store for user records.
///
/// Implementations must make [`create`](Self::create) atomic with respect
/// to its uniqueness checks.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by username (None if not found).
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address (None if not found).
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;

    /// Whether a record is stored under `username`.
    async fn exists(&self, username: &Username) -> Result<bool, UserError>;
}
