//! # feast-core: Pure Domain Logic for Festive Feast
//!
//! This crate holds the stateful, reusable logic behind the catering site:
//! the session cart, the bilingual text lookup, the static catalog and the
//! form validation rules. Nothing in here touches the outside world.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Festive Feast Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Display Components                           │   │
//! │  │    Navbar ──► Menu Cards ──► Cart Sidebar ──► Forms ──► Footer  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON commands                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    feast-site (commands + state)                │   │
//! │  │    add_to_cart, toggle_language, submit_review, etc.            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ feast-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   i18n    │  │   cart    │  │ validation│  │   │
//! │  │   │   Dish    │  │ Language  │  │   Cart    │  │  reviews  │  │   │
//! │  │   │  Review   │  │  t(key)   │  │ CartItem  │  │  booking  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                        ┌───────────┐                            │   │
//! │  │                        │  catalog  │                            │   │
//! │  │                        │  fixtures │                            │   │
//! │  │                        └───────────┘                            │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Dish, GalleryEvent, Review, etc.)
//! - [`i18n`] - Language set and the static translation table
//! - [`cart`] - Session cart with unique-by-id membership
//! - [`catalog`] - Static menu, gallery and review fixtures
//! - [`validation`] - Review and booking form rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use feast_core::cart::Cart;
//! use feast_core::catalog::Catalog;
//! use feast_core::i18n::{translations, Language};
//!
//! let catalog = Catalog::bundled().unwrap();
//! let mut cart = Cart::new();
//! let now = chrono::Utc::now();
//!
//! let dish = &catalog.dishes()[0];
//! assert!(cart.add_item(dish, now));
//! assert!(!cart.add_item(dish, now)); // already present
//! assert_eq!(cart.count(), 1);
//!
//! let table = translations();
//! assert_eq!(table.translate(Language::En, "menu"), "Menu");
//! assert_eq!(table.translate(Language::Ta, "no_such_key"), "no_such_key");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, MenuFilter};
pub use error::{CoreError, CoreResult, ValidationError};
pub use i18n::{translations, Language, TranslationTable};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Lowest star rating a review may carry.
pub const MIN_RATING: u8 = 1;

/// Highest star rating a review may carry.
pub const MAX_RATING: u8 = 5;

/// Largest party a single booking inquiry may request.
///
/// Bigger events are handled by phone, not through the form.
pub const MAX_GUEST_COUNT: u32 = 5000;
