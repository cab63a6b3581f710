use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserCredentials;

/// Port for registration and login.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user account.
    ///
    /// # Arguments
    /// * `command` - Normalized username, email and plaintext password
    /// * `cancel` - Aborts the operation when the caller goes away
    ///
    /// # Returns
    /// Created user, without password material
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Hashing failed
    /// * `Cancelled` - Cancellation was requested first
    /// * `DatabaseError` - Database operation failed
    async fn register(
        &self,
        command: RegisterCommand,
        cancel: &CancellationToken,
    ) -> Result<User, UserError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `TokenSigning` - Token could not be issued
    /// * `Cancelled` - Cancellation was requested first
    /// * `DatabaseError` - Database operation failed
    async fn login(
        &self,
        command: LoginCommand,
        cancel: &CancellationToken,
    ) -> Result<LoginOutcome, UserError>;
}

/// Persistence operations for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user; the store assigns id and creation time.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve a user and its password hash by normalized email.
    ///
    /// # Returns
    /// Optional credentials (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, UserError>;
}
