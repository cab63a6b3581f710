use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::PasswordError;
use crate::domain::user::errors::UserError;
use crate::domain::user::errors::UsernameError;

/// User entity as exposed to callers.
///
/// Carries no password material; the stored hash only travels inside
/// [`UserCredentials`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub created_at: DateTime<Utc>,
}

/// User together with the stored password hash, as loaded for login.
#[derive(Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredentials")
            .field("user", &self.user)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// User record ready to be persisted; the store assigns the identifier.
#[derive(Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    /// Get the raw numeric identifier.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Trimmed, non-empty and at most 30 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 30;

    /// Create a new valid username.
    ///
    /// # Arguments
    /// * `username` - Raw username string (surrounding whitespace is dropped)
    ///
    /// # Errors
    /// * `Empty` - Nothing left after trimming
    /// * `TooLong` - Longer than 30 characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let username = username.trim();
        let length = username.chars().count();

        if length == 0 {
            Err(UsernameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(username.to_string()))
        }
    }

    /// Get username as string slice.
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
/// Always stored in normalized form (trimmed, lowercase) and validated with an
/// RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated, normalized email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Errors
    /// * `Empty` - Nothing left after trimming
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = Self::normalize(&email);

        if email.is_empty() {
            return Err(EmailError::Empty);
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Canonical lookup form of an email: trimmed and lowercased.
    pub fn normalize(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password in transit to the hasher.
///
/// Never printed, never persisted.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    /// Wrap a plaintext password, rejecting empty input.
    ///
    /// Whitespace is significant and kept as-is.
    pub fn new(password: String) -> Result<Self, PasswordError> {
        if password.is_empty() {
            Err(PasswordError::Empty)
        } else {
            Ok(Self(password))
        }
    }

    /// Access the plaintext, e.g. to hash or verify it.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: Password,
}

impl RegisterCommand {
    /// Normalize and check raw registration input.
    ///
    /// # Errors
    /// * `InvalidUsername` - Username empty after trimming or too long
    /// * `InvalidEmail` - Email empty after normalization or malformed
    /// * `Password` - Password empty
    pub fn new(username: String, email: String, password: String) -> Result<Self, UserError> {
        Ok(Self {
            username: Username::new(username)?,
            email: EmailAddress::new(email)?,
            password: Password::new(password)?,
        })
    }
}

/// Command to log in with an email and password.
///
/// Login input is deliberately not validated beyond normalization: any
/// mismatch, including a malformed email, surfaces as invalid credentials.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: String,
    pub password: Password,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Self {
        Self {
            email: EmailAddress::normalize(&email),
            password: Password(password),
        }
    }
}

/// Successful login: the user and a freshly issued access token.
pub struct LoginOutcome {
    pub user: User,
    pub token: String,
}

impl fmt::Debug for LoginOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginOutcome")
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_trimmed_and_lowercased() {
        let email = EmailAddress::new("  A@X.com ".to_string()).unwrap();
        assert_eq!(email.as_str(), "a@x.com");
    }

    #[test]
    fn test_email_rejects_blank_and_malformed_input() {
        assert_eq!(EmailAddress::new("   ".to_string()), Err(EmailError::Empty));
        assert!(matches!(
            EmailAddress::new("not-an-email".to_string()),
            Err(EmailError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_username_is_trimmed() {
        let username = Username::new("  alice123 ".to_string()).unwrap();
        assert_eq!(username.as_str(), "alice123");
    }

    #[test]
    fn test_username_length_limits() {
        assert_eq!(Username::new(" \t ".to_string()), Err(UsernameError::Empty));
        assert_eq!(
            Username::new("a".repeat(31)),
            Err(UsernameError::TooLong {
                max: 30,
                actual: 31
            })
        );
        assert!(Username::new("a".repeat(30)).is_ok());
    }

    #[test]
    fn test_register_command_rejects_empty_fields() {
        let result = RegisterCommand::new(
            "alice123".to_string(),
            "a@x.com".to_string(),
            String::new(),
        );
        assert!(matches!(
            result,
            Err(UserError::Password(PasswordError::Empty))
        ));

        let result = RegisterCommand::new(
            "   ".to_string(),
            "a@x.com".to_string(),
            "Str0ng!Passw0rd".to_string(),
        );
        assert!(matches!(result, Err(UserError::InvalidUsername(_))));

        let result = RegisterCommand::new(
            "alice123".to_string(),
            " ".to_string(),
            "Str0ng!Passw0rd".to_string(),
        );
        assert!(matches!(result, Err(UserError::InvalidEmail(_))));
    }

    #[test]
    fn test_login_command_normalizes_email() {
        let command = LoginCommand::new(" A@x.COM".to_string(), "secret".to_string());
        assert_eq!(command.email, "a@x.com");
    }

    #[test]
    fn test_secrets_are_redacted_in_debug_output() {
        let command = RegisterCommand::new(
            "alice123".to_string(),
            "a@x.com".to_string(),
            "Str0ng!Passw0rd".to_string(),
        )
        .unwrap();

        assert!(!format!("{:?}", command).contains("Str0ng!Passw0rd"));
    }
}
