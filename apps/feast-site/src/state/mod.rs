//! # State Module
//!
//! Session state for the site.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each store
//! is its own managed type. The cart and language stores have nothing to do
//! with each other, and each command asks the [`Site`](crate::site::Site)
//! for exactly the stores it reads.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Site::builder()                            │   │
//! │  │  .manage(config_state)                                          │   │
//! │  │  .manage(catalog_state)                                         │   │
//! │  │  .manage(cart_state)                                            │   │
//! │  │  .manage(language_state)                                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │      ┌──────────────────┬────┴─────────────┬──────────────────┐        │
//! │      ▼                  ▼                  ▼                  ▼         │
//! │  ┌──────────┐   ┌──────────────┐   ┌──────────────┐   ┌────────────┐   │
//! │  │CartState │   │LanguageState │   │ CatalogState │   │ConfigState │   │
//! │  │Arc<Mutex<│   │Arc<Mutex<    │   │ Arc<Catalog> │   │ read-only  │   │
//! │  │  Cart>>  │   │  Language>>  │   │              │   │            │   │
//! │  └──────────┘   └──────────────┘   └──────────────┘   └────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod language;

pub use cart::{CartState, CartSummary};
pub use catalog::CatalogState;
pub use config::{BuildMode, ConfigState};
pub use language::{LanguageState, Translator};
