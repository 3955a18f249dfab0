//! # Domain Types
//!
//! Core domain types used throughout Festive Feast.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Dish       │   │  GalleryEvent   │   │     Review      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name (en/ta)   │   │  caption (en/ta)│   │  name, rating   │       │
//! │  │  category       │   │  event_type     │   │  feedback(en/ta)│       │
//! │  │  description    │   │  image          │   │  event_type     │       │
//! │  │  image          │   └─────────────────┘   │  date           │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  DishCategory   │   │   EventType     │   │  Notification   │       │
//! │  │  veg            │   │  wedding        │   │  title          │       │
//! │  │  non-veg        │   │  party          │   │  description    │       │
//! │  │  sweets         │   │  corporate      │   └─────────────────┘       │
//! │  └─────────────────┘   │  special        │                             │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog records arrive as static fixtures. Only `id` and the category /
//! event-type tags carry meaning; everything else is passed through.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::i18n::Language;

// =============================================================================
// Bilingual Text
// =============================================================================

/// A piece of catalog text in both site languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BilingualText {
    pub en: String,
    pub ta: String,
}

impl BilingualText {
    pub fn new(en: impl Into<String>, ta: impl Into<String>) -> Self {
        BilingualText {
            en: en.into(),
            ta: ta.into(),
        }
    }

    /// Returns the text for `language`.
    #[inline]
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ta => &self.ta,
        }
    }
}

// =============================================================================
// Dish Category
// =============================================================================

/// The closed set of menu categories.
///
/// Wire names match the catalog fixtures: `veg`, `non-veg`, `sweets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DishCategory {
    #[serde(rename = "veg")]
    Vegetarian,
    #[serde(rename = "non-veg")]
    NonVegetarian,
    #[serde(rename = "sweets")]
    Sweets,
}

impl DishCategory {
    pub const ALL: [DishCategory; 3] = [
        DishCategory::Vegetarian,
        DishCategory::NonVegetarian,
        DishCategory::Sweets,
    ];

    /// Returns the wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            DishCategory::Vegetarian => "veg",
            DishCategory::NonVegetarian => "non-veg",
            DishCategory::Sweets => "sweets",
        }
    }

    /// Translation key of the category label.
    pub const fn label_key(self) -> &'static str {
        match self {
            DishCategory::Vegetarian => "categoryVeg",
            DishCategory::NonVegetarian => "categoryNonVeg",
            DishCategory::Sweets => "categorySweets",
        }
    }

    /// Parses a wire name, ignoring surrounding whitespace and ASCII case.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
    }
}

impl fmt::Display for DishCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Event Type
// =============================================================================

/// The kinds of events the business caters.
///
/// Tags gallery photos and reviews, and is chosen on the review and booking
/// forms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Wedding,
    /// Default selection on the review form.
    #[default]
    Party,
    Corporate,
    Special,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Wedding,
        EventType::Party,
        EventType::Corporate,
        EventType::Special,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            EventType::Wedding => "wedding",
            EventType::Party => "party",
            EventType::Corporate => "corporate",
            EventType::Special => "special",
        }
    }

    /// Translation key of the badge label ("Wedding").
    pub const fn label_key(self) -> &'static str {
        match self {
            EventType::Wedding => "eventWedding",
            EventType::Party => "eventParty",
            EventType::Corporate => "eventCorporate",
            EventType::Special => "eventSpecial",
        }
    }

    /// Translation key of the home page service tile ("Weddings").
    pub const fn service_key(self) -> &'static str {
        match self {
            EventType::Wedding => "weddings",
            EventType::Party => "parties",
            EventType::Corporate => "corporate",
            EventType::Special => "special",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Dish
// =============================================================================

/// A menu item from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dish {
    /// Unique per dish.
    pub id: String,
    pub name: BilingualText,
    pub category: DishCategory,
    pub description: BilingualText,
    /// Image path or URL, passed through to the display layer.
    pub image: String,
}

// =============================================================================
// Gallery Event
// =============================================================================

/// A photo from a past event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GalleryEvent {
    pub id: String,
    pub image: String,
    pub caption: BilingualText,
    pub event_type: EventType,
}

// =============================================================================
// Review
// =============================================================================

/// A published customer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub name: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub feedback: BilingualText,
    pub event_type: EventType,
    #[ts(as = "String")]
    pub date: NaiveDate,
}

// =============================================================================
// Form Submissions
// =============================================================================

/// What a visitor fills in on the "Leave a Review" form.
///
/// Defaults mirror the empty form: five stars, party event.
///
/// `rating` is decoded as any integer and range-checked by
/// [`crate::validation::validate_review`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewSubmission {
    pub name: String,
    #[ts(type = "number")]
    pub rating: i64,
    pub feedback: String,
    pub event_type: EventType,
}

impl Default for ReviewSubmission {
    fn default() -> Self {
        ReviewSubmission {
            name: String::new(),
            rating: crate::MAX_RATING.into(),
            feedback: String::new(),
            event_type: EventType::default(),
        }
    }
}

/// A booking inquiry. The dishes come from the cart, not from the form.
///
/// `guest_count` is decoded as any integer and range-checked by
/// [`crate::validation::validate_booking`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingInquiry {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[ts(as = "String")]
    pub event_date: NaiveDate,
    pub event_type: EventType,
    #[ts(type = "number")]
    pub guest_count: i64,
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Notification
// =============================================================================

/// A confirmation toast, already resolved into the active language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            description: description.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
