//! Database migrations for the pogs table

use sqlx::PgPool;

/// Run all migrations.
///
/// Idempotent: safe to run on every startup. Uniqueness of `pogs_name`
/// and `ticker_symbol` lives here as named constraints so a concurrent
/// duplicate create loses at the insert itself, not at a pre-check.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running pogs migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pogs (
            pogs_id SERIAL PRIMARY KEY,
            pogs_name TEXT NOT NULL,
            ticker_symbol TEXT NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            color TEXT NOT NULL,
            CONSTRAINT pogs_pogs_name_key UNIQUE (pogs_name),
            CONSTRAINT pogs_ticker_symbol_key UNIQUE (ticker_symbol)
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
