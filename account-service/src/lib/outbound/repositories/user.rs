use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::PhoneNumber;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserUpdate;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Unique constraint on the normalized phone number column.
const PHONE_NUMBER_CONSTRAINT: &str = "users_phone_number_key";

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    full_name: String,
    phone_number: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId(row.id),
            full_name: row.full_name,
            phone_number: PhoneNumber::normalize(&row.phone_number),
            password_hash: row.password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn map_write_error(e: sqlx::Error) -> UserError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some(PHONE_NUMBER_CONSTRAINT) {
            return UserError::PhoneNumberAlreadyRegistered;
        }
    }
    UserError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (full_name, phone_number, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, full_name, phone_number, password_hash, created_at, updated_at
            "#,
        )
        .bind(&user.full_name)
        .bind(user.phone_number.as_str())
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, full_name, phone_number, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(row.map(User::from))
    }

    async fn find_by_phone_number(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, full_name, phone_number, password_hash, created_at, updated_at
            FROM users
            WHERE phone_number = $1
            "#,
        )
        .bind(phone_number.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(row.map(User::from))
    }

    async fn update(&self, id: &UserId, update: UserUpdate) -> Result<User, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET full_name = $2, phone_number = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, full_name, phone_number, password_hash, created_at, updated_at
            "#,
        )
        .bind(id.0)
        .bind(&update.full_name)
        .bind(update.phone_number.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        row.map(User::from)
            .ok_or(UserError::NotFound(id.to_string()))
    }
}
