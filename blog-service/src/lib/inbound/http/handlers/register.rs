use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::login::UserData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::RegisterCommand;
use crate::inbound::http::middleware::RequestCancellation;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::FieldErrors;
use crate::inbound::http::validation::Rule;
use crate::inbound::http::validation::Validate;
use crate::inbound::http::validation::ValidatedJson;
use crate::inbound::http::validation::Validator;

pub async fn register(
    State(state): State<AppState>,
    RequestCancellation(cancel): RequestCancellation,
    ValidatedJson(body): ValidatedJson<RegisterRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let command = RegisterCommand::new(body.username, body.email, body.password)?;

    state
        .auth_service
        .register(command, &cancel)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for registration (raw JSON)
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    username: String,
    email: String,
    password: String,
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), FieldErrors> {
        Validator::new()
            .field(
                "username",
                &self.username,
                &[
                    Rule::Required,
                    Rule::MinLength(5),
                    Rule::MaxLength(30),
                    Rule::Alphanumeric,
                ],
            )
            .field(
                "email",
                &self.email,
                &[Rule::Required, Rule::Email, Rule::MaxLength(255)],
            )
            .field(
                "password",
                &self.password,
                &[
                    Rule::Required,
                    Rule::MinLength(12),
                    Rule::MaxLength(40),
                    Rule::ContainsUppercase,
                    Rule::ContainsLowercase,
                    Rule::ContainsDigit,
                    Rule::ContainsSpecial,
                ],
            )
            .finish()
    }
}
