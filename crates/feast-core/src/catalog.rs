//! # Catalog
//!
//! The read-only content the site shows: dishes, gallery photos and
//! published reviews. The fixtures live under `data/` and are compiled into
//! the binary, so "loading" them is only a parse.
//!
//! ## Trust Boundary
//! Fixtures are authored alongside the code. Beyond what serde enforces
//! (category and event-type tags must belong to their closed sets), records
//! are trusted as-is: dish ids are assumed unique.

use serde::Deserialize;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Dish, DishCategory, GalleryEvent, Review};

const MENU_JSON: &str = include_str!("../data/menu.json");
const GALLERY_JSON: &str = include_str!("../data/gallery.json");
const REVIEWS_JSON: &str = include_str!("../data/reviews.json");

#[derive(Deserialize)]
struct MenuFixture {
    dishes: Vec<Dish>,
}

#[derive(Deserialize)]
struct GalleryFixture {
    events: Vec<GalleryEvent>,
}

#[derive(Deserialize)]
struct ReviewsFixture {
    reviews: Vec<Review>,
}

fn parse_fixture<T>(fixture: &'static str, json: &str) -> CoreResult<T>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str(json).map_err(|source| CoreError::InvalidFixture { fixture, source })
}

// =============================================================================
// Menu Filter
// =============================================================================

/// The category selector above the menu grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuFilter {
    #[default]
    All,
    Category(DishCategory),
}

impl MenuFilter {
    /// Selector buttons in display order.
    pub const OPTIONS: [MenuFilter; 4] = [
        MenuFilter::All,
        MenuFilter::Category(DishCategory::Vegetarian),
        MenuFilter::Category(DishCategory::NonVegetarian),
        MenuFilter::Category(DishCategory::Sweets),
    ];

    /// Parses `"all"` or a category wire name, ignoring surrounding
    /// whitespace and ASCII case.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(MenuFilter::All);
        }
        DishCategory::parse(value)
            .map(MenuFilter::Category)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Self::OPTIONS
                    .iter()
                    .map(|option| option.as_str().to_string())
                    .collect(),
            })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            MenuFilter::All => "all",
            MenuFilter::Category(category) => category.as_str(),
        }
    }

    pub const fn label_key(self) -> &'static str {
        match self {
            MenuFilter::All => "categoryAll",
            MenuFilter::Category(category) => category.label_key(),
        }
    }

    pub fn matches(self, dish: &Dish) -> bool {
        match self {
            MenuFilter::All => true,
            MenuFilter::Category(category) => dish.category == category,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Static site content, in fixture order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dishes: Vec<Dish>,
    gallery: Vec<GalleryEvent>,
    reviews: Vec<Review>,
}

impl Catalog {
    pub fn new(dishes: Vec<Dish>, gallery: Vec<GalleryEvent>, reviews: Vec<Review>) -> Self {
        Catalog {
            dishes,
            gallery,
            reviews,
        }
    }

    /// Parses the fixtures compiled into this crate.
    pub fn bundled() -> CoreResult<Self> {
        Self::from_json(MENU_JSON, GALLERY_JSON, REVIEWS_JSON)
    }

    /// Parses catalog fixtures in the `data/*.json` shape.
    pub fn from_json(menu: &str, gallery: &str, reviews: &str) -> CoreResult<Self> {
        let menu: MenuFixture = parse_fixture("menu.json", menu)?;
        let gallery: GalleryFixture = parse_fixture("gallery.json", gallery)?;
        let reviews: ReviewsFixture = parse_fixture("reviews.json", reviews)?;

        Ok(Catalog::new(menu.dishes, gallery.events, reviews.reviews))
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn dish(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|dish| dish.id == id)
    }

    /// Like [`Catalog::dish`], but a missing id is an error.
    pub fn require_dish(&self, id: &str) -> CoreResult<&Dish> {
        self.dish(id)
            .ok_or_else(|| CoreError::DishNotFound(id.to_string()))
    }

    /// Dishes matching `filter`, in catalog order.
    pub fn filter_dishes(&self, filter: MenuFilter) -> impl Iterator<Item = &Dish> {
        self.dishes.iter().filter(move |dish| filter.matches(dish))
    }

    pub fn gallery(&self) -> &[GalleryEvent] {
        &self.gallery
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.dishes().is_empty());
        assert!(!catalog.gallery().is_empty());
        assert!(!catalog.reviews().is_empty());
    }

    #[test]
    fn test_bundled_dish_ids_are_unique() {
        let catalog = Catalog::bundled().unwrap();
        let ids: HashSet<&str> = catalog.dishes().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.dishes().len());
    }

    #[test]
    fn test_bundled_reviews_have_valid_ratings() {
        let catalog = Catalog::bundled().unwrap();
        for review in catalog.reviews() {
            assert!((crate::MIN_RATING..=crate::MAX_RATING).contains(&review.rating));
        }
    }

    #[test]
    fn test_every_category_has_dishes() {
        let catalog = Catalog::bundled().unwrap();
        for category in DishCategory::ALL {
            assert!(catalog
                .filter_dishes(MenuFilter::Category(category))
                .all(|dish| dish.category == category));
            assert!(catalog
                .filter_dishes(MenuFilter::Category(category))
                .next()
                .is_some());
        }
    }

    #[test]
    fn test_filter_all_returns_everything_in_order() {
        let catalog = Catalog::bundled().unwrap();
        let all: Vec<&Dish> = catalog.filter_dishes(MenuFilter::All).collect();
        assert_eq!(all.len(), catalog.dishes().len());
        assert_eq!(all[0].id, catalog.dishes()[0].id);
    }

    #[test]
    fn test_require_dish_reports_missing_id() {
        let catalog = Catalog::bundled().unwrap();
        assert!(catalog.require_dish("d1").is_ok());
        let err = catalog.require_dish("nope").unwrap_err();
        assert!(matches!(err, CoreError::DishNotFound(id) if id == "nope"));
    }

    #[test]
    fn test_menu_filter_parse() {
        assert_eq!(MenuFilter::parse("all").unwrap(), MenuFilter::All);
        assert_eq!(
            MenuFilter::parse("non-veg").unwrap(),
            MenuFilter::Category(DishCategory::NonVegetarian)
        );
        let err = MenuFilter::parse("vegan").unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { .. }));
    }

    #[test]
    fn test_menu_filter_parse_ignores_case_and_padding() {
        assert_eq!(MenuFilter::parse(" All ").unwrap(), MenuFilter::All);
        assert_eq!(
            MenuFilter::parse("VEG").unwrap(),
            MenuFilter::Category(DishCategory::Vegetarian)
        );
        assert_eq!(
            MenuFilter::parse("Sweets\n").unwrap(),
            MenuFilter::Category(DishCategory::Sweets)
        );
    }

    #[test]
    fn test_invalid_fixture_names_the_file() {
        let err = Catalog::from_json(r#"{"dishes": []}"#, "not json", r#"{"reviews": []}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidFixture {
                fixture: "gallery.json",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_category_is_rejected_at_parse() {
        let menu = r#"{"dishes": [{
            "id": "x",
            "name": {"en": "X", "ta": "X"},
            "category": "vegan",
            "description": {"en": "", "ta": ""},
            "image": ""
        }]}"#;
        let result = Catalog::from_json(menu, r#"{"events": []}"#, r#"{"reviews": []}"#);
        assert!(result.is_err());
    }
}
