use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::User;
use crate::inbound::http::middleware::RequestCancellation;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::FieldErrors;
use crate::inbound::http::validation::Rule;
use crate::inbound::http::validation::Validate;
use crate::inbound::http::validation::ValidatedJson;
use crate::inbound::http::validation::Validator;

pub async fn login(
    State(state): State<AppState>,
    RequestCancellation(cancel): RequestCancellation,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let outcome = state
        .auth_service
        .login(LoginCommand::new(body.email, body.password), &cancel)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            user: (&outcome.user).into(),
            token: outcome.token,
        },
    ))
}

#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .field(
                "email",
                &self.email,
                &[Rule::Required, Rule::Email, Rule::MaxLength(255)],
            )
            .field(
                "password",
                &self.password,
                &[Rule::Required, Rule::MinLength(8), Rule::MaxLength(40)],
            )
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub user: UserData,
    pub token: String,
}

/// Public view of a user; never includes the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_i64(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}
