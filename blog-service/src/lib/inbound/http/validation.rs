//! Declarative request validation.
//!
//! Each field is checked against an ordered list of [`Rule`]s; the first rule
//! it breaks is reported under the field's serialized name. Every field is
//! checked, so one response lists all offending fields.

use std::collections::BTreeMap;
use std::str::FromStr;

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::inbound::http::handlers::ApiError;

const SPECIAL_CHARACTERS: &str = "!@#$%^&*";

/// A single constraint on a string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    /// Minimum length in characters.
    MinLength(usize),
    /// Maximum length in characters.
    MaxLength(usize),
    /// Email syntax, ignoring surrounding whitespace.
    Email,
    /// Unicode letters and digits only.
    Alphanumeric,
    /// At least one Unicode uppercase letter.
    ContainsUppercase,
    /// At least one Unicode lowercase letter.
    ContainsLowercase,
    /// At least one Unicode numeral, not only ASCII `0-9`.
    ContainsDigit,
    /// At least one of `!@#$%^&*`.
    ContainsSpecial,
}

impl Rule {
    /// Message describing the violation, or `None` if `value` satisfies the rule.
    fn check(&self, value: &str) -> Option<String> {
        let passes = match self {
            Rule::Required => !value.trim().is_empty(),
            Rule::MinLength(min) => value.chars().count() >= *min,
            Rule::MaxLength(max) => value.chars().count() <= *max,
            Rule::Email => email_address::EmailAddress::from_str(value.trim()).is_ok(),
            Rule::Alphanumeric => value.chars().all(char::is_alphanumeric),
            Rule::ContainsUppercase => value.chars().any(char::is_uppercase),
            Rule::ContainsLowercase => value.chars().any(char::is_lowercase),
            Rule::ContainsDigit => value.chars().any(char::is_numeric),
            Rule::ContainsSpecial => value.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        };

        if passes {
            return None;
        }

        Some(match self {
            Rule::Required => "is required".to_string(),
            Rule::MinLength(min) => format!("must be at least {} characters", min),
            Rule::MaxLength(max) => format!("must be at most {} characters", max),
            Rule::Email => "must be a valid email address".to_string(),
            Rule::Alphanumeric => "must contain only letters and digits".to_string(),
            Rule::ContainsUppercase => "must contain an uppercase letter".to_string(),
            Rule::ContainsLowercase => "must contain a lowercase letter".to_string(),
            Rule::ContainsDigit => "must contain a digit".to_string(),
            Rule::ContainsSpecial => {
                format!("must contain one of {}", SPECIAL_CHARACTERS)
            }
        })
    }
}

/// Field name to violation message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Collects the first violation of each field.
#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, value: &str, rules: &[Rule]) -> Self {
        if let Some(message) = rules.iter().find_map(|rule| rule.check(value)) {
            self.errors.0.insert(name.to_string(), message);
        }
        self
    }

    /// Record `message` for `name` unless `holds`; for non-string fields.
    pub fn check(mut self, name: &str, holds: bool, message: &str) -> Self {
        if !holds && !self.errors.0.contains_key(name) {
            self.errors.0.insert(name.to_string(), message.to_string());
        }
        self
    }

    pub fn finish(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Request bodies that carry their own field constraints.
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

/// JSON body extractor that also runs [`Validate`].
///
/// Undecodable bodies are rejected with `400 {"error": "invalid request"}`,
/// constraint violations with `400 {"error": "validation failed", "fields": ...}`.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(reject_body)?;

        value.validate().map_err(ApiError::Validation)?;

        Ok(Self(value))
    }
}

fn reject_body(rejection: JsonRejection) -> ApiError {
    tracing::debug!(error = %rejection, "Request body rejected");

    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::BadRequest("invalid request".to_string())
    }
}
