use async_trait::async_trait;

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

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// # Arguments
    /// * `command` - Raw full name, password and phone number
    ///
    /// # Returns
    /// Identifier assigned by the store
    ///
    /// # Errors
    /// * `Validation` - One or more fields violate their rules
    /// * `PhoneNumberAlreadyRegistered` - Normalized phone number is taken
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<UserId, UserError>;

    /// Exchange a phone number and password for a bearer token.
    ///
    /// # Arguments
    /// * `command` - Raw phone number and password
    ///
    /// # Returns
    /// The account id and a signed token
    ///
    /// # Errors
    /// * `Validation` - One or more fields violate their rules
    /// * `InvalidCredentials` - Unknown phone number or wrong password
    /// * `Token` - Token signing failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, UserError>;

    /// Resolve the profile of the token holder.
    ///
    /// # Arguments
    /// * `authorization` - Raw `Authorization` header value, if present
    ///
    /// # Returns
    /// User entity
    ///
    /// # Errors
    /// * `Unauthorized` - Header missing or malformed, token invalid or expired
    /// * `NotFound` - Token subject no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, authorization: Option<&str>) -> Result<User, UserError>;

    /// Change the token holder's full name and/or phone number.
    ///
    /// # Arguments
    /// * `authorization` - Raw `Authorization` header value, if present
    /// * `command` - Fields to change; empty strings are left unchanged. An
    ///   `Err` carries a request body that could not be read, and is only
    ///   reported once the caller is authenticated.
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `Unauthorized` - Header missing or malformed, token invalid or expired
    /// * `NotFound` - Token subject no longer exists
    /// * `MalformedRequest` - Request body could not be read
    /// * `EmptyUpdate` - Both fields are empty
    /// * `Validation` - A supplied field violates its rules
    /// * `PhoneNumberAlreadyRegistered` - New phone number belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn update_user(
        &self,
        authorization: Option<&str>,
        command: Result<UpdateUserCommand, UserError>,
    ) -> Result<User, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Arguments
    /// * `user` - Record to insert
    ///
    /// # Returns
    /// Created user entity with its assigned id
    ///
    /// # Errors
    /// * `PhoneNumberAlreadyRegistered` - Phone number is already stored
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by normalized phone number.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_phone_number(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<Option<User>, UserError>;

    /// Overwrite the profile fields of an existing user.
    ///
    /// # Arguments
    /// * `id` - User ID to update
    /// * `update` - New full name and phone number
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `NotFound` - No row has this id
    /// * `PhoneNumberAlreadyRegistered` - Phone number belongs to another row
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, id: &UserId, update: UserUpdate) -> Result<User, UserError>;
}
