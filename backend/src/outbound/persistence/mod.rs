//! PostgreSQL persistence adapter using Diesel.
//!
//! - **Thin adapter**: `DieselProductRepository` translates between Diesel
//!   rows and domain products. No business rules live here.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Async pooling**: `bb8` manages `diesel-async` connections.
//! - **Embedded migrations**: the schema ships inside the binary.
//!
//! # Example
//!
//! ```no_run
//! use product_api::outbound::persistence::{DbPool, DieselProductRepository, PoolConfig};
//!
//! # async fn connect() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/products")).await?;
//! let repository = DieselProductRepository::new(pool);
//! # drop(repository);
//! # Ok(())
//! # }
//! ```

mod diesel_product_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_product_repository::DieselProductRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DEFAULT_MIN_IDLE, DbPool, PoolConfig, PoolError,
};
