//! Authentication primitives
//!
//! Building blocks for username/password login with bearer tokens:
//! - Password hashing (Argon2id, PHC string output)
//! - Signed, expiring tokens (HS256 JWT with `sub`/`exp`/`iat` claims)
//! - An `Authenticator` tying both together
//!
//! Services own their user records and decide how failures map to their
//! transport; this crate only answers "does the password match" and
//! "is this token ours and still valid".
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Issuing and verifying tokens
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! let hash = auth.hash_password("password123").unwrap();
//! let result = auth
//!     .authenticate("password123", &hash, "alice", Duration::minutes(30))
//!     .unwrap();
//!
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
