//! Sample catalogue seeding and connectivity verification.
//!
//! On an empty store the seeder writes two sample products. The verification
//! read returns the total count plus the first few products so startup can
//! log proof that storage is reachable.

use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::ports::{ProductRepository, ProductRepositoryError};
use crate::domain::{Product, ProductDraft, ProductId, ProductValidationError};

/// Number of products returned by [`CatalogueSeeder::verify`].
pub const VERIFICATION_SAMPLE_SIZE: usize = 3;

/// Result of a seeding attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueSeedOutcome {
    /// The store was empty and sample products were written.
    Applied {
        /// Ids assigned to the created products, in creation order.
        created: Vec<ProductId>,
    },
    /// The store already held products; nothing was written.
    AlreadySeeded {
        /// Number of products found.
        existing: usize,
    },
}

/// Snapshot read after seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueSnapshot {
    /// Total number of stored products.
    pub total: usize,
    /// Up to [`VERIFICATION_SAMPLE_SIZE`] products, lowest id first.
    pub sample: Vec<Product>,
}

/// Errors raised while seeding or verifying the catalogue.
#[derive(Debug, Error)]
pub enum CatalogueSeedingError {
    /// A built-in sample product failed validation.
    #[error("sample product failed validation: {0}")]
    InvalidSample(#[from] ProductValidationError),
    /// Storage failed while reading or writing.
    #[error("catalogue storage error: {0}")]
    Repository(#[from] ProductRepositoryError),
}

/// Built-in sample products written to an empty store.
///
/// # Errors
///
/// Returns [`ProductValidationError`] if a sample violates draft validation.
pub fn sample_products() -> Result<Vec<ProductDraft>, ProductValidationError> {
    Ok(vec![
        ProductDraft::new(
            "Sample Product 1",
            Some("Test product for database verification".to_owned()),
            Decimal::new(2999, 2),
        )?,
        ProductDraft::new(
            "Sample Product 2",
            Some("Another test product".to_owned()),
            Decimal::new(4999, 2),
        )?,
    ])
}

/// Seeds and verifies the catalogue through the repository port.
#[derive(Clone)]
pub struct CatalogueSeeder {
    repository: Arc<dyn ProductRepository>,
}

impl CatalogueSeeder {
    /// Create a seeder over `repository`.
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Write [`sample_products`] when the store holds no products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueSeedingError`] when listing or creating fails.
    pub async fn seed_if_empty(&self) -> Result<CatalogueSeedOutcome, CatalogueSeedingError> {
        let existing = self.repository.get_all().await?.len();
        if existing > 0 {
            return Ok(CatalogueSeedOutcome::AlreadySeeded { existing });
        }

        let mut created = Vec::new();
        for draft in sample_products()? {
            let product = self.repository.create(&draft).await?;
            created.push(product.id());
        }
        Ok(CatalogueSeedOutcome::Applied { created })
    }

    /// Read the product count and the first few products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueSeedingError::Repository`] when listing fails.
    pub async fn verify(&self) -> Result<CatalogueSnapshot, CatalogueSeedingError> {
        let products = self.repository.get_all().await?;
        let total = products.len();
        let sample = products
            .into_iter()
            .take(VERIFICATION_SAMPLE_SIZE)
            .collect();
        Ok(CatalogueSnapshot { total, sample })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::ports::{FixtureProductRepository, MockProductRepository};

    #[fixture]
    fn repository() -> Arc<FixtureProductRepository> {
        Arc::new(FixtureProductRepository::default())
    }

    #[rstest]
    #[tokio::test]
    async fn seeds_two_products_into_empty_store(repository: Arc<FixtureProductRepository>) {
        let seeder = CatalogueSeeder::new(repository.clone());

        let outcome = seeder.seed_if_empty().await.expect("seeding succeeds");

        assert_eq!(
            outcome,
            CatalogueSeedOutcome::Applied {
                created: vec![ProductId::new(1), ProductId::new(2)]
            }
        );
        let stored = repository.get_all().await.expect("list");
        let names: Vec<&str> = stored.iter().map(Product::name).collect();
        assert_eq!(names, vec!["Sample Product 1", "Sample Product 2"]);
        assert_eq!(stored.first().map(Product::price), Some(Decimal::new(2999, 2)));
    }

    #[rstest]
    #[tokio::test]
    async fn leaves_non_empty_store_untouched(repository: Arc<FixtureProductRepository>) {
        let existing = ProductDraft::new("Widget", None, Decimal::new(999, 2)).expect("draft");
        repository.create(&existing).await.expect("create");
        let seeder = CatalogueSeeder::new(repository.clone());

        let outcome = seeder.seed_if_empty().await.expect("seeding succeeds");

        assert_eq!(outcome, CatalogueSeedOutcome::AlreadySeeded { existing: 1 });
        assert_eq!(repository.get_all().await.expect("list").len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn seeding_twice_is_idempotent(repository: Arc<FixtureProductRepository>) {
        let seeder = CatalogueSeeder::new(repository.clone());

        seeder.seed_if_empty().await.expect("first run");
        let second = seeder.seed_if_empty().await.expect("second run");

        assert_eq!(second, CatalogueSeedOutcome::AlreadySeeded { existing: 2 });
    }

    #[rstest]
    #[tokio::test]
    async fn verify_caps_the_sample(repository: Arc<FixtureProductRepository>) {
        for cents in [100, 200, 300, 400, 500] {
            let draft = ProductDraft::new("Item", None, Decimal::new(cents, 2)).expect("draft");
            repository.create(&draft).await.expect("create");
        }
        let seeder = CatalogueSeeder::new(repository);

        let snapshot = seeder.verify().await.expect("verify");

        assert_eq!(snapshot.total, 5);
        let ids: Vec<i32> = snapshot.sample.iter().map(|p| p.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[rstest]
    #[tokio::test]
    async fn storage_failures_abort_seeding() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_get_all()
            .times(1)
            .return_once(|| Err(ProductRepositoryError::connection("refused")));
        repository.expect_create().never();
        let seeder = CatalogueSeeder::new(Arc::new(repository));

        let err = seeder.seed_if_empty().await.expect_err("seeding fails");

        assert!(matches!(
            err,
            CatalogueSeedingError::Repository(ProductRepositoryError::Connection { .. })
        ));
    }
}
