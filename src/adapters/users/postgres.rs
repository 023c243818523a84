//! PostgreSQL implementation of UserRepository.
//!
//! Live-record filtering (`deleted_at IS NULL`) happens in every query here,
//! and the partial unique index `users_email_active_key` enforces email
//! uniqueness among live rows.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::user::{NewUser, User, UserChanges};
use crate::ports::{RepositoryError, UserRepository};

/// Unique index on live emails.
const EMAIL_ACTIVE_KEY: &str = "users_email_active_key";

const USER_COLUMNS: &str = "id, name, email, age, created_at, modified_at, deleted_at";

/// Builds a lazily connecting pool. Every session gets the configured
/// `statement_timeout`, and acquiring a connection is bounded too.
pub fn connect_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = PgConnectOptions::from_str(&config.url)?.options([(
        "statement_timeout",
        config.statement_timeout().as_millis().to_string(),
    )]);

    Ok(PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect_lazy_with(options))
}

/// Applies the embedded migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let row: UserRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO users (name, email, age, created_at, modified_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(user.name())
        .bind(user.email())
        .bind(user.age())
        .bind(user.created().as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, user.email()))?;

        row.try_into()
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let rows: Vec<UserRow> = sqlx::query_as(&format!(
            "SELECT {} FROM users WHERE deleted_at IS NULL ORDER BY created_at, id",
            USER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {} FROM users WHERE id = $1 AND deleted_at IS NULL",
            USER_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {} FROM users WHERE email = $1 AND deleted_at IS NULL",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_age(&self, age: i32) -> Result<Vec<User>, RepositoryError> {
        let rows: Vec<UserRow> = sqlx::query_as(&format!(
            "SELECT {} FROM users WHERE age = $1 AND deleted_at IS NULL ORDER BY created_at, id",
            USER_COLUMNS
        ))
        .bind(age)
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn update(
        &self,
        id: &UserId,
        changes: &UserChanges,
        now: Timestamp,
    ) -> Result<Option<User>, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                age = COALESCE($4, age),
                modified_at = $5
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(changes.name())
        .bind(changes.email())
        .bind(changes.age())
        .bind(now.as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, changes.email().unwrap_or_default()))?;

        row.map(User::try_from).transpose()
    }

    async fn soft_delete(&self, id: &UserId, now: Timestamp) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET deleted_at = $2, modified_at = $2
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.as_uuid())
        .bind(now.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_read_error)?;
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Row mapping
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: uuid::Uuid,
    name: String,
    email: String,
    age: i32,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        if row.name.is_empty() || row.email.is_empty() {
            return Err(RepositoryError::Corrupt(format!(
                "user {} has an empty name or email",
                row.id
            )));
        }
        Ok(User {
            id: UserId::from_uuid(row.id),
            name: row.name,
            email: row.email,
            age: row.age,
            created: Timestamp::from_datetime(row.created_at),
            modified: Timestamp::from_datetime(row.modified_at),
            deleted: row.deleted_at.map(Timestamp::from_datetime),
        })
    }
}

fn map_read_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => RepositoryError::Unavailable(err.to_string()),
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) | sqlx::Error::ColumnNotFound(_) => {
            RepositoryError::Corrupt(err.to_string())
        }
        _ => RepositoryError::Query(err.to_string()),
    }
}

fn map_write_error(err: sqlx::Error, email: &str) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() && db_err.constraint() == Some(EMAIL_ACTIVE_KEY) {
            return RepositoryError::Duplicate {
                email: email.to_string(),
            };
        }
    }
    map_read_error(err)
}
