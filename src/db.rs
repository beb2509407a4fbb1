//! Database bootstrap
//!
//! Establishes the PostgreSQL pool from the configured connection string and
//! verifies connectivity eagerly. No schema, query, or transaction logic
//! lives here; the pool is a placeholder handed to future storefront
//! collaborators.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use nuwe_core::prelude::*;

use crate::config::ServerConfig;

const MAX_CONNECTIONS: u32 = 5;

/// Connect to the database. A failure here is fatal to startup.
pub async fn connect(config: &ServerConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(&config.database_url)
        .await
        .map_err(|err| Error::database(err.to_string()))?;

    info!("database connection established");
    Ok(pool)
}
