//! Startup initialisation: schema migrations, sample seeding and a
//! connectivity check.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::ports::ProductRepository;
use crate::domain::{
    CatalogueSeedOutcome, CatalogueSeeder, CatalogueSeedingError, CatalogueSnapshot,
};
use crate::outbound::persistence::{DbPool, DieselProductRepository, MigrationError};
use crate::settings::AppSettings;

/// Errors returned while initialising the catalogue.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Applying the embedded migrations failed.
    #[error("schema migration failed: {0}")]
    Migration(#[from] MigrationError),
    /// The blocking migration task panicked or was cancelled.
    #[error("migration task did not complete: {0}")]
    MigrationTask(#[from] tokio::task::JoinError),
    /// Seeding or verification failed.
    #[error("catalogue initialisation failed: {0}")]
    Seeding(#[from] CatalogueSeedingError),
}

/// Migrate the schema, seed when empty and log a verification snapshot.
///
/// # Examples
///
/// ```rust,no_run
/// use ortho_config::OrthoConfig;
/// use product_api::outbound::persistence::DbPool;
/// use product_api::settings::AppSettings;
/// use product_api::startup::initialise_catalogue;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = AppSettings::load_from_iter(std::env::args_os())?;
/// let pool = DbPool::new(settings.pool_config()?).await?;
/// let snapshot = initialise_catalogue(&pool, &settings).await?;
/// println!("{} products", snapshot.total);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`StartupError`] when any step fails; later steps are skipped.
pub async fn initialise_catalogue(
    pool: &DbPool,
    settings: &AppSettings,
) -> Result<CatalogueSnapshot, StartupError> {
    let database_url = settings.database_url().to_owned();
    tokio::task::spawn_blocking(move || {
        crate::outbound::persistence::run_pending_migrations(&database_url)
    })
    .await??;

    let repository = Arc::new(DieselProductRepository::new(pool.clone()));
    seed_and_verify(repository, settings.seed_sample_data()).await
}

/// Seed `repository` when enabled and empty, then log a snapshot.
///
/// # Errors
///
/// Returns [`StartupError::Seeding`] when the repository fails.
pub async fn seed_and_verify(
    repository: Arc<dyn ProductRepository>,
    seed: bool,
) -> Result<CatalogueSnapshot, StartupError> {
    let seeder = CatalogueSeeder::new(repository);

    if seed {
        match seeder.seed_if_empty().await? {
            CatalogueSeedOutcome::Applied { created } => {
                for id in &created {
                    info!(product_id = %id, "sample product created");
                }
                info!(count = created.len(), "sample products seeded");
            }
            CatalogueSeedOutcome::AlreadySeeded { existing } => {
                info!(existing, "catalogue already populated; seeding skipped");
            }
        }
    } else {
        info!(reason = "disabled", "sample product seeding skipped");
    }

    let snapshot = seeder.verify().await?;
    info!(total = snapshot.total, "database connection verified");
    if snapshot.total == 0 {
        warn!("catalogue is empty");
    }
    for product in &snapshot.sample {
        info!(
            product_id = %product.id(),
            name = product.name(),
            price = %product.price(),
            "catalogue sample"
        );
    }
    Ok(snapshot)
}
