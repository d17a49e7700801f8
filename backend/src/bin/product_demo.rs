//! Console walkthrough of the product repository.
//!
//! Loads the server configuration, prepares the database and then creates,
//! reads, updates, lists and deletes a demo product, logging each step.

use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use product_api::domain::ProductDraft;
use product_api::domain::ports::ProductRepository;
use product_api::outbound::persistence::{DbPool, DieselProductRepository};
use product_api::settings::AppSettings;
use product_api::startup::initialise_catalogue;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .compact()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .wrap_err("failed to load configuration")?;
    let pool = DbPool::new(settings.pool_config()?)
        .await
        .wrap_err("failed to build database pool")?;
    initialise_catalogue(&pool, &settings)
        .await
        .wrap_err("catalogue initialisation failed")?;

    let repository: Arc<dyn ProductRepository> = Arc::new(DieselProductRepository::new(pool));
    run_demo(repository.as_ref()).await
}

async fn run_demo(repository: &dyn ProductRepository) -> Result<()> {
    let draft = ProductDraft::new(
        "Demo Widget",
        Some("Created by the console demo".to_owned()),
        Decimal::new(1999, 2),
    )?;
    let created = repository.create(&draft).await?;
    let id = created.id();
    info!(product_id = %id, name = created.name(), price = %created.price(), "created");

    let fetched = repository
        .get_by_id(id)
        .await?
        .ok_or_else(|| eyre!("product {id} vanished after create"))?;
    info!(product_id = %id, name = fetched.name(), "fetched");

    let revised = ProductDraft::new(
        "Demo Widget (revised)",
        fetched.description().map(str::to_owned),
        Decimal::new(2499, 2),
    )?;
    repository.update(id, &revised).await?;
    info!(product_id = %id, price = %revised.price, "updated");

    let all = repository.get_all().await?;
    info!(count = all.len(), "listed");
    for product in &all {
        info!(product_id = %product.id(), name = product.name(), price = %product.price(), "product");
    }

    repository.delete(id).await?;
    info!(product_id = %id, "deleted");

    match repository.get_by_id(id).await? {
        None => info!(product_id = %id, "confirmed absent"),
        Some(_) => return Err(eyre!("product {id} still present after delete")),
    }
    Ok(())
}
