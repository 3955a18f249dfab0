//! # Cart
//!
//! The set of dishes a visitor intends to ask about in a booking inquiry.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  add_item(dish)     id absent?  ──yes──► push to the end                │
//! │                                 ──no───► no-op                          │
//! │                                                                         │
//! │  remove_item(id)    id present? ──yes──► drop that entry                │
//! │                                 ──no───► no-op                          │
//! │                                                                         │
//! │  clear()            always ────────────► empty                          │
//! │                                                                         │
//! │  count() / items()  computed from the one owned Vec on every read       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no quantity: a dish is either in the cart or not. No operation
//! can fail. The bool results only say whether anything changed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{BilingualText, Dish, DishCategory};

// =============================================================================
// Cart Item
// =============================================================================

/// One dish in the cart.
///
/// Copies the catalog record at the time it was added, so the cart renders
/// the same way for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub name: BilingualText,
    pub category: DishCategory,
    pub description: BilingualText,
    pub image: String,
    /// When this dish was added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Snapshots a dish for the cart, stamped with `added_at`.
    pub fn from_dish(dish: &Dish, added_at: DateTime<Utc>) -> Self {
        CartItem {
            id: dish.id.clone(),
            name: dish.name.clone(),
            category: dish.category,
            description: dish.description.clone(),
            image: dish.image.clone(),
            added_at,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The session cart.
///
/// ## Invariants
/// - At most one entry per `id`
/// - Entries stay in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds `dish` unless an entry with the same id is already present.
    ///
    /// The caller supplies the clock reading so the cart stays a pure value.
    /// Returns `true` if the dish was appended.
    pub fn add_item(&mut self, dish: &Dish, added_at: DateTime<Utc>) -> bool {
        if self.contains(&dish.id) {
            return false;
        }
        self.items.push(CartItem::from_dish(dish, added_at));
        true
    }

    /// Removes the entry with this id, if any.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove_item(&mut self, id: &str) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of dishes in the cart.
    #[inline]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// All entries, oldest first.
    #[inline]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Checks whether a dish with this id is in the cart.
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids of all entries, oldest first.
    pub fn ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
