//! Database connection pool using the OnceCell pattern.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("DATABASE_URL must be set")]
    MissingUrl,
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Get or initialize the database connection pool.
/// Uses DATABASE_URL environment variable for the connection string.
pub async fn get_pool() -> Result<&'static PgPool, DbError> {
    POOL.get_or_try_init(|| async {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL").map_err(|_| DbError::MissingUrl)?;

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await?;
        tracing::info!("connected to database");
        Ok(pool)
    })
    .await
}
