//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Contact  │────►│ Booking  │       │
//! │  │  Cart    │     │          │     │   Page   │     │ Inquiry  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart    proceed_to_contact                     │
//! │                   remove_from_cart   (contact.rs)                       │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Adding a dish twice or removing one that is not there is not an error;
//! the cart is simply returned as it is.

use chrono::{DateTime, Utc};
use feast_core::{Cart, CartItem, DishCategory};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::site::Site;
use crate::state::{CartState, CartSummary, CatalogState, LanguageState, Translator};

/// Arguments naming one dish.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishArgs {
    pub dish_id: String,
}

/// A cart row resolved into the active language.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: DishCategory,
    pub category_label: String,
    pub image: String,
    pub added_at: DateTime<Utc>,
}

impl CartItemView {
    fn new(item: &CartItem, t: &Translator) -> Self {
        CartItemView {
            id: item.id.clone(),
            name: t.text(&item.name),
            description: t.text(&item.description),
            category: item.category,
            category_label: t.t(item.category.label_key()),
            image: item.image.clone(),
            added_at: item.added_at,
        }
    }
}

/// Cart response including items and labels for the cart sidebar.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub title: String,
    pub items: Vec<CartItemView>,
    pub count: usize,
    pub is_empty: bool,
    pub empty_message: String,
    pub clear_label: String,
    pub proceed_label: String,
}

impl CartResponse {
    pub(crate) fn new(cart: &Cart, t: &Translator) -> Self {
        CartResponse {
            title: t.t("yourCart"),
            items: cart
                .items()
                .iter()
                .map(|item| CartItemView::new(item, t))
                .collect(),
            count: cart.count(),
            is_empty: cart.is_empty(),
            empty_message: t.t("cartEmpty"),
            clear_label: t.t("clearCart"),
            proceed_label: t.t("proceedToContact"),
        }
    }
}

/// Builds the cart view under one language snapshot.
pub(crate) fn cart_view(site: &Site) -> Result<CartResponse, ApiError> {
    let cart = site.state::<CartState>()?;
    let t = site.state::<LanguageState>()?.translator();
    Ok(cart.with_cart(|c| CartResponse::new(c, &t)))
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart, items in the order they were added
pub fn get_cart(site: &Site) -> Result<CartResponse, ApiError> {
    debug!("get_cart command");
    cart_view(site)
}

/// Gets the item count for the navbar badge.
pub fn get_cart_count(site: &Site) -> Result<CartSummary, ApiError> {
    debug!("get_cart_count command");
    let cart = site.state::<CartState>()?;
    Ok(cart.with_cart(|c| CartSummary::from(c)))
}

/// Adds a dish to the cart.
///
/// ## Behavior
/// - Dish already in cart: nothing changes
/// - Dish not in cart: appended at the end
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  User clicks "Add to Cart" on a menu card                              │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  invoke('add_to_cart', { dishId: 'd1' })                               │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Look the dish up in the catalog                            │    │
/// │  │  2. Append unless an entry with the same id exists             │    │
/// │  │  3. Return updated cart                                        │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  Card button switches to "Added to Cart"                               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Errors
/// `NOT_FOUND` if the catalog has no dish with this id.
pub fn add_to_cart(site: &Site, dish_id: &str) -> Result<CartResponse, ApiError> {
    debug!(dish_id = %dish_id, "add_to_cart command");

    let dish = site.state::<CatalogState>()?.inner().require_dish(dish_id)?;
    let cart = site.state::<CartState>()?;
    let t = site.state::<LanguageState>()?.translator();

    Ok(cart.with_cart_mut(|c| {
        if !c.add_item(dish, Utc::now()) {
            debug!(dish_id = %dish_id, "dish already in cart");
        }
        CartResponse::new(c, &t)
    }))
}

/// Removes a dish from the cart. Unknown ids leave the cart unchanged.
pub fn remove_from_cart(site: &Site, dish_id: &str) -> Result<CartResponse, ApiError> {
    debug!(dish_id = %dish_id, "remove_from_cart command");

    let cart = site.state::<CartState>()?;
    let t = site.state::<LanguageState>()?.translator();

    Ok(cart.with_cart_mut(|c| {
        c.remove_item(dish_id);
        CartResponse::new(c, &t)
    }))
}

/// Clears all items from the cart.
pub fn clear_cart(site: &Site) -> Result<CartResponse, ApiError> {
    debug!("clear_cart command");

    let cart = site.state::<CartState>()?;
    let t = site.state::<LanguageState>()?.translator();

    Ok(cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::new(c, &t)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_site;
    use crate::error::ErrorCode;

    #[test]
    fn test_add_is_idempotent() {
        let site = test_site();

        add_to_cart(&site, "d1").unwrap();
        let cart = add_to_cart(&site, "d1").unwrap();

        assert_eq!(cart.count, 1);
        assert_eq!(cart.items[0].id, "d1");
    }

    #[test]
    fn test_add_then_remove_is_empty() {
        let site = test_site();

        add_to_cart(&site, "d7").unwrap();
        let cart = remove_from_cart(&site, "d7").unwrap();

        assert!(cart.is_empty);
        assert_eq!(cart.count, 0);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let site = test_site();
        add_to_cart(&site, "d2").unwrap();

        let cart = remove_from_cart(&site, "d99").unwrap();

        assert_eq!(cart.count, 1);
        assert_eq!(cart.items[0].id, "d2");
    }

    #[test]
    fn test_unknown_dish_is_not_found() {
        let site = test_site();

        let err = add_to_cart(&site, "d99").unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(get_cart_count(&site).unwrap().count, 0);
    }

    #[test]
    fn test_clear_always_empties() {
        let site = test_site();
        for id in ["d1", "d2", "d3"] {
            add_to_cart(&site, id).unwrap();
        }

        assert_eq!(clear_cart(&site).unwrap().count, 0);
        assert_eq!(clear_cart(&site).unwrap().count, 0);
    }

    #[test]
    fn test_cart_view_is_localized() {
        let site = test_site();
        add_to_cart(&site, "d1").unwrap();

        let cart = get_cart(&site).unwrap();
        assert_eq!(cart.title, "Your Cart");
        assert_eq!(cart.items[0].name, "Chicken Biryani");
        assert_eq!(cart.items[0].category_label, "Non-Vegetarian");

        site.state::<LanguageState>().unwrap().toggle();

        let cart = get_cart(&site).unwrap();
        assert_eq!(cart.title, "உங்கள் கார்ட்");
        assert_eq!(cart.items[0].name, "சிக்கன் பிரியாணி");
        assert_eq!(cart.items[0].category_label, "அசைவம்");
    }

    #[test]
    fn test_count_matches_items() {
        let site = test_site();
        add_to_cart(&site, "d4").unwrap();
        add_to_cart(&site, "d5").unwrap();

        let summary = get_cart_count(&site).unwrap();
        assert_eq!(summary.count, get_cart(&site).unwrap().items.len());
        assert!(!summary.is_empty);
    }
}
