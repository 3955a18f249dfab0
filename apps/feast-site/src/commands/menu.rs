//! # Menu Commands
//!
//! The menu grid with its category selector.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [ All ] [ Vegetarian ] [ Non-Vegetarian ] [ Sweets ]   ◄── filters     │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐      │
//! │  │ Chicken Biryani  │  │ Vegetable Biryani│  │ Sambar Sadam     │      │
//! │  │ Non-Vegetarian   │  │ Vegetarian       │  │ Vegetarian       │      │
//! │  │ [Added to Cart]  │  │ [ Add to Cart ]  │  │ [ Add to Cart ]  │      │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use feast_core::{Dish, DishCategory, MenuFilter};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::site::Site;
use crate::state::{CartState, CatalogState, LanguageState, Translator};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MenuArgs {
    /// `all` or a category wire name; absent means `all`
    pub category: Option<String>,
}

/// One button of the category selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOption {
    pub value: &'static str,
    pub label: String,
    pub selected: bool,
}

/// One dish card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCardView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: DishCategory,
    pub category_label: String,
    pub image: String,
    pub in_cart: bool,
    /// "Add to Cart" or "Added to Cart"
    pub action_label: String,
}

impl MenuCardView {
    fn new(dish: &Dish, in_cart: bool, t: &Translator) -> Self {
        MenuCardView {
            id: dish.id.clone(),
            name: t.text(&dish.name),
            description: t.text(&dish.description),
            category: dish.category,
            category_label: t.t(dish.category.label_key()),
            image: dish.image.clone(),
            in_cart,
            action_label: t.t(if in_cart { "addedToCart" } else { "addToCart" }),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub title: String,
    pub subtitle: String,
    pub filters: Vec<FilterOption>,
    pub dishes: Vec<MenuCardView>,
    pub cart_count: usize,
}

/// Lists menu cards, optionally narrowed to one category.
///
/// ## Errors
/// `VALIDATION_ERROR` if `category` is neither `all` nor a known category.
pub fn list_menu(site: &Site, category: Option<&str>) -> Result<MenuResponse, ApiError> {
    debug!(category = ?category, "list_menu command");

    let filter = category
        .map(MenuFilter::parse)
        .transpose()?
        .unwrap_or_default();

    let catalog = site.state::<CatalogState>()?.inner();
    let cart = site.state::<CartState>()?;
    let t = site.state::<LanguageState>()?.translator();

    let filters = MenuFilter::OPTIONS
        .into_iter()
        .map(|option| FilterOption {
            value: option.as_str(),
            label: t.t(option.label_key()),
            selected: option == filter,
        })
        .collect();

    let (dishes, cart_count) = cart.with_cart(|c| {
        let dishes = catalog
            .filter_dishes(filter)
            .map(|dish| MenuCardView::new(dish, c.contains(&dish.id), &t))
            .collect();
        (dishes, c.count())
    });

    Ok(MenuResponse {
        title: t.t("menu"),
        subtitle: t.t("menuSubtitle"),
        filters,
        dishes,
        cart_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{cart, test_site};
    use crate::error::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(None, 8)]
    #[case(Some("all"), 8)]
    #[case(Some("veg"), 3)]
    #[case(Some("non-veg"), 3)]
    #[case(Some("sweets"), 2)]
    fn test_filter_counts(#[case] category: Option<&str>, #[case] expected: usize) {
        let site = test_site();
        let menu = list_menu(&site, category).unwrap();

        assert_eq!(menu.dishes.len(), expected);
        if let Some(wire) = category {
            assert!(menu.filters.iter().any(|f| f.value == wire && f.selected));
        }
    }

    #[rstest]
    #[case("Sweets", "sweets", 2)]
    #[case(" VEG ", "veg", 3)]
    #[case("ALL", "all", 8)]
    fn test_category_ignores_case_and_padding(
        #[case] category: &str,
        #[case] selected: &str,
        #[case] expected: usize,
    ) {
        let site = test_site();
        let menu = list_menu(&site, Some(category)).unwrap();

        assert_eq!(menu.dishes.len(), expected);
        assert!(menu.filters.iter().any(|f| f.value == selected && f.selected));
    }

    #[test]
    fn test_unknown_category_is_validation_error() {
        let site = test_site();
        let err = list_menu(&site, Some("vegan")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_cards_reflect_cart() {
        let site = test_site();
        cart::add_to_cart(&site, "d1").unwrap();

        let menu = list_menu(&site, None).unwrap();
        let biryani = menu.dishes.iter().find(|d| d.id == "d1").unwrap();
        let sambar = menu.dishes.iter().find(|d| d.id == "d3").unwrap();

        assert!(biryani.in_cart);
        assert_eq!(biryani.action_label, "Added to Cart");
        assert!(!sambar.in_cart);
        assert_eq!(sambar.action_label, "Add to Cart");
        assert_eq!(menu.cart_count, 1);
    }

    #[test]
    fn test_menu_in_tamil() {
        let site = test_site();
        site.state::<LanguageState>().unwrap().toggle();

        let menu = list_menu(&site, Some("sweets")).unwrap();

        assert_eq!(menu.title, "உணவு பட்டியல்");
        assert_eq!(menu.filters[0].label, "அனைத்தும்");
        assert!(menu.dishes.iter().all(|d| d.category_label == "இனிப்புகள்"));
    }
}
