use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::StoredCredentials;
use auth::USER_ID_CLAIM;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::PhoneNumber;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserUpdate;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;
use crate::user::validation::validate;
use crate::user::validation::validate_supplied;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    /// Resolve the user id carried by a bearer token.
    ///
    /// Every header or token problem collapses into `Unauthorized`. A valid
    /// token with an unusable subject is a server fault, since only this
    /// service signs tokens.
    fn authenticated_user_id(&self, authorization: Option<&str>) -> Result<UserId, UserError> {
        let header = authorization.ok_or(UserError::Unauthorized)?;

        let token = self.authenticator.validate_bearer(header).map_err(|e| {
            tracing::warn!("Rejected bearer token: {}", e);
            UserError::Unauthorized
        })?;

        let subject = token.claim(USER_ID_CLAIM)?;
        Ok(UserId::from_string(subject)?)
    }

    async fn load_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<UserId, UserError> {
        validate(&command).into_result()?;

        let phone_number = PhoneNumber::normalize(&command.phone_number);

        // The store's unique constraint still decides concurrent registrations.
        if self
            .repository
            .find_by_phone_number(&phone_number)
            .await?
            .is_some()
        {
            return Err(UserError::PhoneNumberAlreadyRegistered);
        }

        let password_hash = self.authenticator.hash_password(&command.password)?;

        let created_user = self
            .repository
            .create(NewUser {
                full_name: command.full_name,
                phone_number,
                password_hash,
            })
            .await?;

        tracing::info!("Registered user {}", created_user.id);

        Ok(created_user.id)
    }

    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, UserError> {
        validate(&command).into_result()?;

        let phone_number = PhoneNumber::normalize(&command.phone_number);
        let user = self.repository.find_by_phone_number(&phone_number).await?;

        let credentials = user.as_ref().map(|u| StoredCredentials {
            subject: u.id.to_string(),
            password_hash: &u.password_hash,
        });

        let result = self
            .authenticator
            .authenticate(&command.password, credentials)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                AuthenticationError::JwtError(e) => UserError::Token(e),
            })?;

        // authenticate only succeeds when a user was found
        let user_id = user.map(|u| u.id).ok_or(UserError::InvalidCredentials)?;

        tracing::debug!("User {} logged in", user_id);

        Ok(LoginOutcome {
            user_id,
            token: result.access_token,
        })
    }

    async fn get_user(&self, authorization: Option<&str>) -> Result<User, UserError> {
        let user_id = self.authenticated_user_id(authorization)?;
        self.load_user(&user_id).await
    }

    async fn update_user(
        &self,
        authorization: Option<&str>,
        command: Result<UpdateUserCommand, UserError>,
    ) -> Result<User, UserError> {
        let user_id = self.authenticated_user_id(authorization)?;
        let user = self.load_user(&user_id).await?;
        let command = command?;

        if command.is_empty() {
            return Err(UserError::EmptyUpdate);
        }

        validate_supplied(&command).into_result()?;

        let mut update = UserUpdate {
            full_name: user.full_name,
            phone_number: user.phone_number,
        };

        if !command.phone_number.is_empty() {
            let phone_number = PhoneNumber::normalize(&command.phone_number);

            if let Some(existing) = self
                .repository
                .find_by_phone_number(&phone_number)
                .await?
            {
                if existing.id != user.id {
                    return Err(UserError::PhoneNumberAlreadyRegistered);
                }
            }

            update.phone_number = phone_number;
        }

        if !command.full_name.is_empty() {
            update.full_name = command.full_name;
        }

        let updated_user = self.repository.update(&user.id, update).await?;

        tracing::info!("Updated user {}", updated_user.id);

        Ok(updated_user)
    }
}
