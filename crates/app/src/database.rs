//! Database connection management

use std::num::TryFromIntError;

use sqlx::{PgPool, Postgres, Row, Transaction, migrate::MigrateError, postgres::PgRow};

use crate::ids::TypedId;

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction on a pooled connection.
    ///
    /// Dropping the transaction without committing rolls it back.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection can be acquired or `BEGIN` fails.
    pub async fn begin_transaction(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Apply the bundled schema migrations.
///
/// # Errors
///
/// Returns an error if a migration fails or the applied history diverges.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Decode an `INTEGER` id column into a typed id.
pub(crate) fn try_get_id<T>(row: &PgRow, col: &str) -> Result<TypedId<T>, sqlx::Error> {
    let id: i32 = row.try_get(col)?;

    TypedId::try_from(id).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

/// Decode a nullable `INTEGER` id column into a typed id.
pub(crate) fn try_get_optional_id<T>(
    row: &PgRow,
    col: &str,
) -> Result<Option<TypedId<T>>, sqlx::Error> {
    row.try_get::<Option<i32>, _>(col)?
        .map(TypedId::<T>::try_from)
        .transpose()
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: col.to_string(),
            source: Box::new(e),
        })
}

/// Decode a non-negative `INTEGER`/`BIGINT` column.
pub(crate) fn try_get_amount<A, U>(row: &PgRow, col: &str) -> Result<U, sqlx::Error>
where
    A: for<'r> sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
    U: TryFrom<A, Error = TryFromIntError>,
{
    let amount: A = row.try_get(col)?;

    U::try_from(amount).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
