//! PostgreSQL-backed `ProductRepository` using Diesel.
//!
//! Rows are turned back into validated domain values on read, so a row that
//! violates product invariants surfaces as a query error instead of leaking
//! into handlers.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use mockable::{Clock, DefaultClock};
use tracing::debug;

use crate::domain::ports::{ProductRepository, ProductRepositoryError};
use crate::domain::{Product, ProductDraft, ProductId};

use super::models::{NewProductRow, ProductRow, ProductUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::products;

/// Diesel implementation of [`ProductRepository`].
#[derive(Clone)]
pub struct DieselProductRepository {
    pool: DbPool,
    clock: Arc<dyn Clock>,
}

impl DieselProductRepository {
    /// Repository over `pool`, stamping `created_at` from the system clock.
    pub fn new(pool: DbPool) -> Self {
        Self::with_clock(pool, Arc::new(DefaultClock))
    }

    /// Repository over `pool` with an explicit clock.
    pub fn with_clock(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

fn map_pool_error(error: PoolError) -> ProductRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    ProductRepositoryError::connection(message)
}

fn map_diesel_error(error: DieselError) -> ProductRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, info) => {
            ProductRepositoryError::validation(info.message())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ProductRepositoryError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => ProductRepositoryError::query("database query error"),
        _ => ProductRepositoryError::query("database error"),
    }
}

fn row_to_product(row: ProductRow) -> Result<Product, ProductRepositoryError> {
    let ProductRow {
        id,
        name,
        description,
        price,
        created_at,
        is_active,
    } = row;

    let draft = ProductDraft::new(name, description, price).map_err(|err| {
        ProductRepositoryError::query(format!("stored product {id} is invalid: {err}"))
    })?;
    Ok(Product::new(ProductId::new(id), draft, created_at, is_active))
}

#[async_trait]
impl ProductRepository for DieselProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ProductRow> = products::table
            .order(products::id.asc())
            .select(ProductRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_product).collect()
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ProductRow> = products::table
            .find(id.get())
            .select(ProductRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_product).transpose()
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewProductRow {
            name: draft.name.as_ref(),
            description: draft.description.as_deref(),
            price: draft.price.amount(),
            created_at: self.clock.utc(),
            is_active: true,
        };

        let row: ProductRow = diesel::insert_into(products::table)
            .values(&new_row)
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_product(row)
    }

    async fn update(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<(), ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = ProductUpdate {
            name: draft.name.as_ref(),
            description: draft.description.as_deref(),
            price: draft.price.amount(),
        };

        let affected = diesel::update(products::table.find(id.get()))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if affected == 0 {
            return Err(ProductRepositoryError::not_found(id));
        }
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(products::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if affected == 0 {
            return Err(ProductRepositoryError::not_found(id));
        }
        Ok(())
    }
}
