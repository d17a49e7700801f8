//! Embedded schema migrations.
//!
//! Migrations from `backend/migrations` are compiled into the binary and run
//! on a dedicated synchronous connection. Call [`run_pending_migrations`]
//! from a blocking context such as `tokio::task::spawn_blocking`.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations embedded from the `migrations` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// The migration connection could not be opened.
    #[error("failed to connect for migrations: {message}")]
    Connection {
        /// Underlying failure.
        message: String,
    },
    /// A migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Apply {
        /// Underlying failure.
        message: String,
    },
}

/// Apply all pending migrations to `database_url`.
///
/// Returns the versions applied by this call; an up-to-date schema yields an
/// empty list.
///
/// # Errors
///
/// Returns [`MigrationError`] when the connection or a migration fails.
pub fn run_pending_migrations(database_url: &str) -> Result<Vec<String>, MigrationError> {
    let mut conn =
        PgConnection::establish(database_url).map_err(|err| MigrationError::Connection {
            message: err.to_string(),
        })?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?
        .into_iter()
        .map(|version| version.to_string())
        .collect::<Vec<_>>();

    info!(count = applied.len(), versions = ?applied, "schema migrations applied");
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use diesel::migration::MigrationSource;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn products_migration_is_embedded() {
        let migrations = MigrationSource::<diesel::pg::Pg>::migrations(&MIGRATIONS)
            .expect("embedded migrations load");
        let names: Vec<String> = migrations
            .iter()
            .map(|migration| migration.name().to_string())
            .collect();
        assert!(
            names.iter().any(|name| name.ends_with("create_products")),
            "missing products migration in {names:?}"
        );
    }

    #[rstest]
    fn unreachable_database_reports_connection_error() {
        let err = run_pending_migrations("postgres://invalid host/none")
            .expect_err("connection should fail");
        assert!(matches!(err, MigrationError::Connection { .. }));
    }
}
