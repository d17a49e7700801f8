//! Domain primitives, services and ports.
//!
//! Purpose: define the product catalogue types shared by the HTTP adapter,
//! the persistence adapter and the console demo. Types here know nothing
//! about actix-web or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - Product and its validated parts (`ProductDraft`, `ProductName`,
//!   `ProductPrice`, `ProductId`).
//! - CatalogueSeeder: sample data seeding and connectivity verification.
//! - TraceId: request-scoped correlation identifier.

pub mod catalogue_seed;
pub mod error;
pub mod ports;
pub mod product;
pub mod trace_id;

pub use self::catalogue_seed::{
    CatalogueSeedOutcome, CatalogueSeeder, CatalogueSeedingError, CatalogueSnapshot,
    VERIFICATION_SAMPLE_SIZE, sample_products,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::product::{
    PRICE_MAX, PRICE_SCALE, PRODUCT_NAME_MAX, Product, ProductDraft, ProductId, ProductName,
    ProductPrice, ProductValidationError,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
