//! Domain ports for the hexagonal boundary.
//!
//! Ports describe what the domain needs from driven adapters. Each trait
//! exposes a typed error so adapters map their failures into predictable
//! variants.

mod macros;
pub(crate) use macros::define_port_error;

mod product_repository;

#[cfg(test)]
pub use product_repository::MockProductRepository;
pub use product_repository::{
    FixtureProductRepository, ProductRepository, ProductRepositoryError,
};
