use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::models::AuthenticationState;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Extension type carrying the user resolved from the bearer token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

/// Middleware that resolves the bearer token to a user and adds it to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let credentials = bearer_token(req.headers()).map(Credentials::Bearer);

    let authenticated = state
        .user_service
        .authenticate(AuthenticationState::begin(credentials))
        .await
        .into_result()?;

    req.extensions_mut()
        .insert(AuthenticatedUser(authenticated.user));

    Ok(next.run(req).await)
}

/// Token from an `Authorization: Bearer <token>` header. Any other scheme,
/// an empty token or an unreadable header counts as no credentials.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}
