use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by access tokens.
///
/// Only the subject and its validity window are encoded; everything else
/// about the user is looked up server-side when the token is presented.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,

    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,
}

impl Claims {
    /// Lifetime used when the caller does not pick one.
    pub const DEFAULT_TTL_MINUTES: i64 = 15;

    /// Claims for `subject` expiring `ttl` from now.
    pub fn for_subject(subject: impl ToString, ttl: Duration) -> Self {
        Self::issued_at(subject, Utc::now(), ttl)
    }

    /// Claims for `subject` with the default lifetime.
    pub fn with_default_ttl(subject: impl ToString) -> Self {
        Self::for_subject(subject, Self::default_ttl())
    }

    /// Claims issued at an explicit instant.
    ///
    /// # Arguments
    /// * `subject` - Username the token speaks for
    /// * `issued_at` - Issue instant
    /// * `ttl` - Lifetime; `exp = issued_at + ttl`, clamped to the latest
    ///   representable instant
    pub fn issued_at(subject: impl ToString, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
            iat: issued_at.timestamp(),
        }
    }

    pub fn default_ttl() -> Duration {
        Duration::minutes(Self::DEFAULT_TTL_MINUTES)
    }
}
