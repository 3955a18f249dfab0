//! # Catalog State
//!
//! Wraps the static `Catalog` for use in commands.
//!
//! The catalog is read-only after startup, so it is shared behind an `Arc`
//! with no lock.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub fn add_to_cart(site: &Site, dish_id: &str) -> Result<CartResponse, ApiError> {
//!     let dish = site.state::<CatalogState>()?.inner().require_dish(dish_id)?;
//!     // ...
//! }
//! ```

use std::sync::Arc;

use feast_core::{Catalog, CoreResult};

/// Wrapper around `Catalog` for site state management.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// Loads the fixtures compiled into `feast-core`.
    pub fn bundled() -> CoreResult<Self> {
        Catalog::bundled().map(Self::new)
    }

    /// Returns a reference to the inner Catalog.
    pub fn inner(&self) -> &Catalog {
        &self.catalog
    }
}
