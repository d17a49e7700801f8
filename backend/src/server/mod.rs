//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use product_api::Trace;
#[cfg(debug_assertions)]
use product_api::doc::ApiDoc;
use product_api::domain::ports::{FixtureProductRepository, ProductRepository};
use product_api::inbound::http::health::{HealthState, live, ready};
use product_api::inbound::http::products::configure_products;
use product_api::inbound::http::state::HttpState;
use product_api::outbound::persistence::DieselProductRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Select the product repository: Diesel when a pool is configured,
/// otherwise the in-memory fixture.
fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let products: Arc<dyn ProductRepository> = match &config.db_pool {
        Some(pool) => Arc::new(DieselProductRepository::new(pool.clone())),
        None => {
            warn!("no database pool configured; serving the in-memory catalogue");
            Arc::new(FixtureProductRepository::default())
        }
    };
    web::Data::new(HttpState::new(products))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_products)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the listener is bound.
/// - `config`: pre-built [`ServerConfig`] with the bind address and optional pool.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let bind_addr = config.bind_addr;

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}
