//! Pog repository
//!
//! One statement per operation, all writes use RETURNING * so the
//! caller gets the affected row back without a second round-trip.

use sqlx::{FromRow, PgPool};

/// Pog record from database
#[derive(Debug, Clone, FromRow)]
pub struct Pog {
    pub pogs_id: i32,
    pub pogs_name: String,
    pub ticker_symbol: String,
    pub price: f64,
    pub color: String,
}

/// Fields supplied by the caller on create/update.
/// `pogs_id` is generated by the database and never accepted as input.
#[derive(Debug, Clone)]
pub struct NewPog {
    pub pogs_name: String,
    pub ticker_symbol: String,
    pub price: f64,
    pub color: String,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("duplicate pogs_name or ticker_symbol")]
    Duplicate,
}

/// Map a write error, surfacing unique-constraint hits as Duplicate.
fn map_write_error(e: sqlx::Error) -> DbError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => DbError::Duplicate,
        _ => DbError::Sqlx(e),
    }
}

/// Pog repository
pub struct PogRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PogRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all pogs, oldest first.
    pub async fn list(&self) -> Result<Vec<Pog>, DbError> {
        let pogs = sqlx::query_as::<_, Pog>(
            "SELECT pogs_id, pogs_name, ticker_symbol, price, color FROM pogs ORDER BY pogs_id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(pogs)
    }

    /// Get a single pog by id. Returns None when no row matches.
    pub async fn get(&self, id: i32) -> Result<Option<Pog>, DbError> {
        let pog = sqlx::query_as::<_, Pog>(
            "SELECT pogs_id, pogs_name, ticker_symbol, price, color FROM pogs WHERE pogs_id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(pog)
    }

    /// Insert a pog, returning the created row with its generated id.
    ///
    /// A unique-constraint hit on `pogs_name` or `ticker_symbol` maps to
    /// `DbError::Duplicate`; the insert itself is the conflict check.
    pub async fn create(&self, new: &NewPog) -> Result<Pog, DbError> {
        sqlx::query_as::<_, Pog>(
            r#"
            INSERT INTO pogs (pogs_name, ticker_symbol, price, color)
            VALUES ($1, $2, $3, $4)
            RETURNING pogs_id, pogs_name, ticker_symbol, price, color
            "#,
        )
        .bind(&new.pogs_name)
        .bind(&new.ticker_symbol)
        .bind(new.price)
        .bind(&new.color)
        .fetch_one(self.pool)
        .await
        .map_err(map_write_error)
    }

    /// Replace all four mutable fields of the pog matching `id`.
    /// Returns None when no row matches.
    pub async fn update(&self, id: i32, new: &NewPog) -> Result<Option<Pog>, DbError> {
        sqlx::query_as::<_, Pog>(
            r#"
            UPDATE pogs
            SET pogs_name = $1, ticker_symbol = $2, price = $3, color = $4
            WHERE pogs_id = $5
            RETURNING pogs_id, pogs_name, ticker_symbol, price, color
            "#,
        )
        .bind(&new.pogs_name)
        .bind(&new.ticker_symbol)
        .bind(new.price)
        .bind(&new.color)
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(map_write_error)
    }

    /// Delete the pog matching `id`, returning the deleted row.
    /// Returns None when no row matches.
    pub async fn delete(&self, id: i32) -> Result<Option<Pog>, DbError> {
        let pog = sqlx::query_as::<_, Pog>(
            r#"
            DELETE FROM pogs
            WHERE pogs_id = $1
            RETURNING pogs_id, pogs_name, ticker_symbol, price, color
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(pog)
    }
}
