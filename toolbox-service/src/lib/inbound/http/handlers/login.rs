use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::AuthenticationState;
use crate::domain::user::models::Credentials;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::extract::ApiForm;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<LoginForm>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let credentials = Credentials::Password {
        username: form.username,
        password: form.password,
    };

    let authenticated = state
        .user_service
        .authenticate(AuthenticationState::begin(Some(credentials)))
        .await
        .into_result()?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            message: "Login successful".to_string(),
            access_token: authenticated.access_token,
            token_type: "bearer".to_string(),
            user: (&authenticated.user).into(),
        },
    ))
}

/// Form-encoded login fields (`application/x-www-form-urlencoded`)
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    pub access_token: String,
    pub token_type: String,
    pub user: UserData,
}
