//! Product catalogue service.
//!
//! A REST API over a PostgreSQL `products` table, laid out as ports and
//! adapters:
//!
//! - [`domain`]: product types, validation, the repository port and seeding.
//! - [`inbound::http`]: actix-web handlers, error mapping and health probes.
//! - [`outbound::persistence`]: the Diesel repository, pool and migrations.
//! - [`settings`] and [`startup`]: configuration and process initialisation
//!   shared by the server and the console demo.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
pub mod startup;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
