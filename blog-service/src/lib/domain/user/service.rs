use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use tokio_util::sync::CancellationToken;

use crate::domain::cancellation::run_until_cancelled;
use crate::domain::user::errors::PasswordError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;

/// Domain service implementation for registration and login.
///
/// Password hashing and verification are CPU-bound and run on the blocking
/// thread pool so they never stall the async executor.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn hash_password(&self, password: Password) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose()))
            .await
            .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))?
            .map_err(|e| UserError::Password(PasswordError::HashingFailed(e.to_string())))
    }

    async fn verify_and_issue(
        &self,
        password: Password,
        password_hash: String,
        user: &User,
    ) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let user_id = user.id.as_i64();

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(password.expose(), &password_hash, user_id)
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Verification task failed: {}", e)))??;

        Ok(result.access_token)
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(
        &self,
        command: RegisterCommand,
        cancel: &CancellationToken,
    ) -> Result<User, UserError> {
        let existing =
            run_until_cancelled(cancel, self.repository.find_by_email(command.email.as_str()))
                .await?;

        if existing.is_some() {
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        let password_hash = run_until_cancelled(cancel, self.hash_password(command.password)).await?;

        let new_user = NewUser {
            username: command.username,
            email: command.email,
            password_hash,
        };

        // The unique constraints still decide races between concurrent registrations.
        let user = run_until_cancelled(cancel, self.repository.create(new_user)).await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    async fn login(
        &self,
        command: LoginCommand,
        cancel: &CancellationToken,
    ) -> Result<LoginOutcome, UserError> {
        let credentials = run_until_cancelled(cancel, self.repository.find_by_email(&command.email))
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let token = run_until_cancelled(
            cancel,
            self.verify_and_issue(command.password, credentials.password_hash, &credentials.user),
        )
        .await?;

        tracing::info!(user_id = %credentials.user.id, "User logged in");

        Ok(LoginOutcome {
            user: credentials.user,
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use auth::JwtHandler;
    use auth::PasswordHasher;
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::UserCredentials;
    use crate::domain::user::models::UserId;
    use crate::domain::user::models::Username;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, UserError>;
        }
    }

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::from_parts(
            PasswordHasher::with_work_factor(1024, 1, 1).unwrap(),
            JwtHandler::new(SECRET).unwrap(),
        ))
    }

    fn stored_user(id: i64) -> User {
        User {
            id: UserId(id),
            username: Username::new("alice123".to_string()).unwrap(),
            email: EmailAddress::new("a@x.com".to_string()).unwrap(),
            created_at: Utc::now(),
        }
    }

    fn register_command() -> RegisterCommand {
        RegisterCommand::new(
            "alice123".to_string(),
            "A@x.com ".to_string(),
            "Str0ng!Passw0rd".to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_register_stores_normalized_email_and_hash() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .withf(|email| email == "a@x.com")
            .times(1)
            .returning(|_| Ok(None));

        repository
            .expect_create()
            .withf(|user| {
                user.email.as_str() == "a@x.com"
                    && user.username.as_str() == "alice123"
                    && user.password_hash.starts_with("$argon2id$")
                    && !user.password_hash.contains("Str0ng!Passw0rd")
            })
            .times(1)
            .returning(|_| Ok(stored_user(1)));

        let service = AuthService::new(Arc::new(repository), authenticator());
        let user = service
            .register(register_command(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(user.id, UserId(1));
        assert_eq!(user.email.as_str(), "a@x.com");
    }

    #[tokio::test]
    async fn test_register_duplicate_email_skips_insert() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| {
                Ok(Some(UserCredentials {
                    user: stored_user(1),
                    password_hash: "$argon2id$stored".to_string(),
                }))
            });
        repository.expect_create().times(0);

        let service = AuthService::new(Arc::new(repository), authenticator());
        let result = service
            .register(register_command(), &CancellationToken::new())
            .await;

        assert!(matches!(result, Err(UserError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_register_conflict_from_store_propagates() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .times(1)
            .returning(|user| Err(UserError::UsernameAlreadyExists(user.username.to_string())));

        let service = AuthService::new(Arc::new(repository), authenticator());
        let result = service
            .register(register_command(), &CancellationToken::new())
            .await;

        assert!(matches!(result, Err(UserError::UsernameAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_register_with_cancelled_token_fails() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .returning(|_| Ok(None));

        let cancel = CancellationToken::new();
        cancel.cancel();

        let service = AuthService::new(Arc::new(repository), authenticator());
        let result = service.register(register_command(), &cancel).await;

        assert!(matches!(result, Err(UserError::Cancelled(_))));
    }

    #[tokio::test]
    async fn test_login_issues_token_for_user() {
        let authenticator = authenticator();
        let password_hash = authenticator.hash_password("Str0ng!Passw0rd").unwrap();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .withf(|email| email == "a@x.com")
            .times(1)
            .returning(move |_| {
                Ok(Some(UserCredentials {
                    user: stored_user(7),
                    password_hash: password_hash.clone(),
                }))
            });

        let service = AuthService::new(Arc::new(repository), Arc::clone(&authenticator));
        let outcome = service
            .login(
                LoginCommand::new(" A@X.com".to_string(), "Str0ng!Passw0rd".to_string()),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(outcome.user.id, UserId(7));
        assert_eq!(authenticator.validate_token(&outcome.token).unwrap(), 7);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let authenticator = authenticator();
        let password_hash = authenticator.hash_password("Str0ng!Passw0rd").unwrap();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .returning(move |email| {
                if email == "a@x.com" {
                    Ok(Some(UserCredentials {
                        user: stored_user(7),
                        password_hash: password_hash.clone(),
                    }))
                } else {
                    Ok(None)
                }
            });

        let service = AuthService::new(Arc::new(repository), authenticator);
        let cancel = CancellationToken::new();

        let wrong_password = service
            .login(
                LoginCommand::new("a@x.com".to_string(), "Wr0ng!Passw0rd".to_string()),
                &cancel,
            )
            .await
            .unwrap_err();
        let unknown_email = service
            .login(
                LoginCommand::new("b@x.com".to_string(), "Str0ng!Passw0rd".to_string()),
                &cancel,
            )
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, UserError::InvalidCredentials));
        assert!(matches!(unknown_email, UserError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_registered_password_logs_in() {
        let created: Arc<Mutex<Option<NewUser>>> = Arc::new(Mutex::new(None));
        let authenticator = authenticator();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        let sink = Arc::clone(&created);
        repository.expect_create().times(1).returning(move |user| {
            *sink.lock().unwrap() = Some(user);
            Ok(stored_user(3))
        });

        let service = AuthService::new(Arc::new(repository), Arc::clone(&authenticator));
        service
            .register(register_command(), &CancellationToken::new())
            .await
            .unwrap();

        let stored = created.lock().unwrap().take().unwrap();
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_email().returning(move |_| {
            Ok(Some(UserCredentials {
                user: stored_user(3),
                password_hash: stored.password_hash.clone(),
            }))
        });

        let service = AuthService::new(Arc::new(repository), authenticator);
        let outcome = service
            .login(
                LoginCommand::new("a@x.com".to_string(), "Str0ng!Passw0rd".to_string()),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(outcome.user.id, UserId(3));
    }
}
