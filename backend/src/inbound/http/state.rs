//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see domain ports, so
//! tests can swap in the in-memory repository or a mock.

use std::sync::Arc;

use crate::domain::ports::ProductRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Product storage.
    pub products: Arc<dyn ProductRepository>,
}

impl HttpState {
    /// Bundle the product repository for handlers.
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}
