//! Database configuration for the reservation desk.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. Table
//! creation derives the SQL from the entity definitions via
//! `Schema::create_table_from_entity`, so the schema always matches the Rust
//! structs without hand-written SQL.

use crate::entities::Reservation;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Default on-disk database location when `DATABASE_URL` is not set.
/// `mode=rwc` lets `SQLite` create the file on first run.
const DEFAULT_DATABASE_URL: &str = "sqlite://data/vertex_desk.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable,
/// falling back to a local `SQLite` file.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the `SQLite` database.
///
/// Uses [`get_database_url`], so `DATABASE_URL` overrides the default local
/// file. Connection failures propagate as [`crate::errors::Error::Database`].
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates the reservations table from the entity definition.
///
/// Idempotent: uses `IF NOT EXISTS` so repeated startups against the same
/// database file are safe.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut reservation_table = schema.create_table_from_entity(Reservation);
    reservation_table.if_not_exists();

    db.execute(builder.build(&reservation_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ReservationModel;
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Table exists if we can query it
        let _: Vec<ReservationModel> = Reservation::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let _: Vec<ReservationModel> = Reservation::find().limit(1).all(&db).await?;
        Ok(())
    }
}
