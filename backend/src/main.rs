//! Backend entry-point: loads settings, prepares the database and serves the
//! product REST API.

mod server;

use actix_web::web;
use color_eyre::eyre::WrapErr;
use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use product_api::inbound::http::health::HealthState;
use product_api::outbound::persistence::DbPool;
use product_api::settings::AppSettings;
use product_api::startup::initialise_catalogue;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .wrap_err("failed to load configuration")?;
    let bind_addr = settings.bind_addr()?;
    // Connections open on demand; an unreachable database is reported by
    // initialisation and by each request rather than aborting startup.
    let pool = DbPool::new_lazy(settings.pool_config()?);

    // Keep serving on failure so operators can inspect the logs.
    if let Err(err) = initialise_catalogue(&pool, &settings).await {
        error!(error = %err, "catalogue initialisation failed");
    }

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr).with_db_pool(pool);
    let server = create_server(health_state, config)?;
    server.await?;
    Ok(())
}
