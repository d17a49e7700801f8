//! Port for product persistence.
//!
//! Handlers, startup seeding and the console demo all reach storage through
//! this trait. [`FixtureProductRepository`] is the in-memory implementation
//! used wherever a database is not wanted.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};

use crate::domain::{Product, ProductDraft, ProductId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by product repository adapters.
    pub enum ProductRepositoryError {
        /// Storage could not be reached.
        Connection { message: String } =>
            "product repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "product repository query failed: {message}",
        /// No product exists with the given id.
        NotFound { id: ProductId } =>
            "product {id} not found",
        /// Storage rejected the values written.
        Validation { message: String } =>
            "product rejected by storage: {message}",
    }
}

/// Port for reading and writing products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every stored product, ordered by id.
    async fn get_all(&self) -> Result<Vec<Product>, ProductRepositoryError>;

    /// The product with `id`, or `None` when absent.
    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductRepositoryError>;

    /// Persist a new product and return it with its generated fields.
    async fn create(&self, draft: &ProductDraft) -> Result<Product, ProductRepositoryError>;

    /// Overwrite name, description and price of an existing product.
    async fn update(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<(), ProductRepositoryError>;

    /// Remove a product.
    async fn delete(&self, id: ProductId) -> Result<(), ProductRepositoryError>;
}

#[derive(Debug)]
struct FixtureStore {
    next_id: i32,
    products: BTreeMap<ProductId, Product>,
}

/// In-memory repository assigning sequential ids from 1.
///
/// # Examples
/// ```
/// use product_api::domain::ProductDraft;
/// use product_api::domain::ports::{FixtureProductRepository, ProductRepository};
/// use rust_decimal::Decimal;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = FixtureProductRepository::default();
/// let draft = ProductDraft::new("Widget", None, Decimal::new(999, 2)).unwrap();
/// let created = repo.create(&draft).await.unwrap();
/// assert_eq!(created.id().get(), 1);
/// # });
/// ```
#[derive(Clone)]
pub struct FixtureProductRepository {
    store: Arc<Mutex<FixtureStore>>,
    clock: Arc<dyn Clock>,
}

impl Default for FixtureProductRepository {
    fn default() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl FixtureProductRepository {
    /// Create an empty repository stamping `created_at` from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(Mutex::new(FixtureStore {
                next_id: 1,
                products: BTreeMap::new(),
            })),
            clock,
        }
    }

    fn lock(&self) -> MutexGuard<'_, FixtureStore> {
        self.store.lock().unwrap_or_else(|err| err.into_inner())
    }
}

#[async_trait]
impl ProductRepository for FixtureProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        Ok(self.lock().products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        Ok(self.lock().products.get(&id).cloned())
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product, ProductRepositoryError> {
        let mut store = self.lock();
        let id = ProductId::new(store.next_id);
        store.next_id = store
            .next_id
            .checked_add(1)
            .ok_or_else(|| ProductRepositoryError::query("product id sequence exhausted"))?;
        let product = Product::new(id, draft.clone(), self.clock.utc(), true);
        store.products.insert(id, product.clone());
        Ok(product)
    }

    async fn update(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<(), ProductRepositoryError> {
        let mut store = self.lock();
        let existing = store
            .products
            .remove(&id)
            .ok_or_else(|| ProductRepositoryError::not_found(id))?;
        store.products.insert(id, existing.with_draft(draft.clone()));
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), ProductRepositoryError> {
        self.lock()
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ProductRepositoryError::not_found(id))
    }
}
