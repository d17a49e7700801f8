//! Diesel row types for the `products` table.
//!
//! Rows stay internal to the persistence adapter; the repository converts
//! them into validated domain values.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

use super::schema::products;

/// Row read from `products`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProductRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Insertable product.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = products)]
pub(crate) struct NewProductRow<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Changeset applied by updates.
///
/// A `None` description clears the column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = products)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ProductUpdate<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: Decimal,
}
