//! # Cart State
//!
//! Owns the session cart for the lifetime of the site.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Display Action           Command                 Cart State Change     │
//! │  ──────────────           ───────                 ─────────────────     │
//! │                                                                         │
//! │  "Add to Cart" ──────────► add_to_cart() ───────► push unless present  │
//! │                                                                         │
//! │  ✕ on cart row ──────────► remove_from_cart() ──► drop matching id     │
//! │                                                                         │
//! │  "Clear Cart" ───────────► clear_cart() ────────► empty                │
//! │                                                                         │
//! │  Badge / sidebar ────────► get_cart() ──────────► (read only)          │
//! │                                                                         │
//! │  NOTE: every call takes the lock, so a read issued right after a       │
//! │        mutation always sees it.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use feast_core::{Cart, CartItem, Dish};
use serde::Serialize;

/// Count summary for badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub count: usize,
    pub is_empty: bool,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            count: cart.count(),
            is_empty: cart.is_empty(),
        }
    }
}

/// Site-managed cart state.
///
/// Uses `Arc<Mutex<Cart>>` so the store can be shared with whatever drives
/// the session without handing out `&mut Cart`.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState::default()
    }

    fn lock(&self) -> MutexGuard<'_, Cart> {
        // A panic mid-mutation cannot leave a Vec push/remove half done,
        // so the cart behind a poisoned lock is still consistent.
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use feast_site::state::{CartState, CartSummary};
    ///
    /// let cart_state = CartState::new();
    /// let summary = cart_state.with_cart(|cart| CartSummary::from(cart));
    /// assert_eq!(summary.count, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.lock();
        f(&mut cart)
    }

    /// Adds a dish unless already present, stamped with the current time.
    /// Returns `true` if added.
    pub fn add_item(&self, dish: &Dish) -> bool {
        self.with_cart_mut(|cart| cart.add_item(dish, Utc::now()))
    }

    /// Removes a dish by id if present. Returns `true` if removed.
    pub fn remove_item(&self, id: &str) -> bool {
        self.with_cart_mut(|cart| cart.remove_item(id))
    }

    pub fn clear(&self) {
        self.with_cart_mut(Cart::clear);
    }

    pub fn count(&self) -> usize {
        self.with_cart(Cart::count)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.with_cart(|cart| cart.contains(id))
    }

    /// Copy of the current entries, oldest first.
    pub fn items(&self) -> Vec<CartItem> {
        self.with_cart(|cart| cart.items().to_vec())
    }
}
