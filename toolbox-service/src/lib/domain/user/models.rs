use std::fmt;
use std::str::FromStr;

use crate::user::errors::EmailError;
use crate::user::errors::UserError;
use crate::user::errors::UsernameError;

/// User record held by the credential store.
///
/// `password_hash` is a PHC string and never leaves the domain layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: Username,
    pub email: EmailAddress,
    pub display_name: Option<String>,
    pub password_hash: String,
}

/// Username value type, the unique key of a user record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a new username.
    ///
    /// # Errors
    /// * `Empty` - Username is the empty string
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
    pub display_name: Option<String>,
}

impl RegisterUserCommand {
    /// # Arguments
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(
        username: Username,
        email: EmailAddress,
        password: String,
        display_name: Option<String>,
    ) -> Self {
        Self {
            username,
            email,
            password,
            display_name,
        }
    }
}

/// Factors a client can present to prove who it is.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Password { username: String, password: String },
    Bearer(String),
}

// Secrets stay out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .finish_non_exhaustive(),
            Credentials::Bearer(_) => f.write_str("Bearer(..)"),
        }
    }
}

/// Identity established for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticated {
    pub user: User,
    /// Token issued at login, or the bearer token that was presented
    pub access_token: String,
}

/// Per-request authentication progress.
///
/// `Anonymous` and `Authenticating` are the entry states; `Authenticated`
/// and `Rejected` are terminal. Rejections never say which factor failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationState {
    Anonymous,
    Authenticating(Credentials),
    Authenticated(Authenticated),
    Rejected(UserError),
}

impl AuthenticationState {
    /// Entry state for whatever the client presented.
    pub fn begin(credentials: Option<Credentials>) -> Self {
        match credentials {
            Some(credentials) => AuthenticationState::Authenticating(credentials),
            None => AuthenticationState::Anonymous,
        }
    }

    /// Collapse a state into a result. Non-terminal states count as
    /// missing credentials.
    pub fn into_result(self) -> Result<Authenticated, UserError> {
        match self {
            AuthenticationState::Authenticated(authenticated) => Ok(authenticated),
            AuthenticationState::Rejected(err) => Err(err),
            AuthenticationState::Anonymous | AuthenticationState::Authenticating(_) => {
                Err(UserError::MissingCredentials)
            }
        }
    }
}

impl From<Result<Authenticated, UserError>> for AuthenticationState {
    fn from(result: Result<Authenticated, UserError>) -> Self {
        match result {
            Ok(authenticated) => AuthenticationState::Authenticated(authenticated),
            Err(err) => AuthenticationState::Rejected(err),
        }
    }
}
