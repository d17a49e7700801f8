//! Per-test database helpers for the embedded cluster.
//!
//! Database creation and teardown go through `postgres` so Diesel's
//! transaction handling never wraps `DROP DATABASE`. Schemas come from the
//! crate's embedded migrations so tests cannot drift from production.

use postgres::{Client, NoTls};
use product_api::outbound::persistence::run_pending_migrations;
use uuid::Uuid;

use super::format_postgres_error;

/// Fresh database name for one test.
pub fn new_test_database_name() -> String {
    format!("products_test_{}", Uuid::new_v4().simple())
}

/// Drop and recreate `db_name` through the maintenance database at
/// `admin_url`.
pub fn reset_database(admin_url: &str, db_name: &str) -> Result<(), String> {
    let mut client = Client::connect(admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    // Separate statements: a multi-statement query runs in a transaction.
    client
        .batch_execute(&format!("DROP DATABASE IF EXISTS \"{db_name}\""))
        .map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!("CREATE DATABASE \"{db_name}\""))
        .map_err(|err| format_postgres_error(&err))
}

/// Apply the embedded migrations to `url`.
pub fn migrate_schema(url: &str) -> Result<(), String> {
    run_pending_migrations(url)
        .map(|_| ())
        .map_err(|err| err.to_string())
}

/// Drop the `products` table to simulate schema loss.
pub fn drop_products_table(url: &str) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute("DROP TABLE IF EXISTS products;")
        .map_err(|err| format_postgres_error(&err))
}

/// Insert a row directly, bypassing domain validation.
pub fn insert_raw_product(url: &str, name: &str, price: &str) -> Result<u64, String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .execute(
            &format!("INSERT INTO products (name, price) VALUES ($1, {price}::numeric)"),
            &[&name],
        )
        .map_err(|err| format_postgres_error(&err))
}
