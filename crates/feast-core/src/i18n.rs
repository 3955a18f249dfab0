//! # Internationalization
//!
//! The site speaks exactly two languages: English (the base) and Tamil.
//! Display text is resolved by a flat key lookup against a static table.
//!
//! ## Lookup Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  translate(lang, key)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  table[lang][key] present and non-empty? ──yes──► mapped string         │
//! │       │                                                                 │
//! │       no                                                                │
//! │       ▼                                                                 │
//! │  key itself (never panics, never returns "")                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no pluralization or locale-aware formatting. New text can be
//! rolled out key by key: a missing key shows up as its own name.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Language
// =============================================================================

/// The closed set of display languages.
///
/// ## State Machine
/// ```text
///        toggled()
///   ┌──────────────────┐
///   │                  ▼
/// ┌────┐            ┌────┐
/// │ En │            │ Ta │
/// └────┘            └────┘
///   ▲                  │
///   └──────────────────┘
///        toggled()
/// ```
/// `toggled()` is its own inverse.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English, the base language.
    #[default]
    En,
    /// Tamil, the alternate language.
    Ta,
}

impl Language {
    /// The language every session starts in.
    pub const BASE: Language = Language::En;

    /// Both languages, base first.
    pub const ALL: [Language; 2] = [Language::En, Language::Ta];

    /// Returns the wire code (`"en"` / `"ta"`).
    #[inline]
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ta => "ta",
        }
    }

    /// Returns the language's own name for itself, as shown on the toggle.
    pub const fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ta => "தமிழ்",
        }
    }

    /// Returns the other member of the set.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ta,
            Language::Ta => Language::En,
        }
    }

    /// Parses a language code, case-insensitive, ignoring region tags
    /// (`"ta-IN"` parses as Tamil).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let code = normalized.split(['-', '_']).next().unwrap_or("");
        match code {
            "en" => Some(Language::En),
            "ta" => Some(Language::Ta),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Translation Table
// =============================================================================

/// Two-level mapping: language → key → display string.
///
/// Keys are kept ordered so dumps of a language's table are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: BTreeMap<Language, BTreeMap<String, String>>,
}

impl TranslationTable {
    /// Creates an empty table. Every lookup against it falls back to the key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) one entry.
    pub fn insert(&mut self, language: Language, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(language)
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Builder-style bulk insert for one language.
    pub fn with_entries(mut self, language: Language, entries: &[(&str, &str)]) -> Self {
        for (key, value) in entries {
            self.insert(language, *key, *value);
        }
        self
    }

    /// Returns the mapped string, or `None` if the key is absent or mapped
    /// to an empty string.
    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.entries
            .get(&language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Resolves `key` under `language`, falling back to `key` itself.
    pub fn translate<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        self.get(language, key).unwrap_or(key)
    }

    /// Checks whether `key` resolves to real text under `language`.
    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.get(language, key).is_some()
    }

    /// Returns every entry for `language`, ordered by key.
    pub fn entries(&self, language: Language) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .get(&language)
            .into_iter()
            .flat_map(|table| table.iter())
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of keys defined for `language`.
    pub fn len(&self, language: Language) -> usize {
        self.entries.get(&language).map_or(0, BTreeMap::len)
    }

    /// Keys present in some language but missing from `language`.
    pub fn missing_keys(&self, language: Language) -> Vec<&str> {
        let mut missing: Vec<&str> = self
            .entries
            .iter()
            .filter(|(lang, _)| **lang != language)
            .flat_map(|(_, table)| table.keys())
            .map(String::as_str)
            .filter(|key| !self.contains(language, key))
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}

/// Returns the bundled site translations, built on first use.
pub fn translations() -> &'static TranslationTable {
    static TABLE: OnceLock<TranslationTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        TranslationTable::new()
            .with_entries(Language::En, EN)
            .with_entries(Language::Ta, TA)
    })
}

// =============================================================================
// Bundled Text
// =============================================================================

const EN: &[(&str, &str)] = &[
    // Navigation
    ("home", "Home"),
    ("menu", "Menu"),
    ("gallery", "Gallery"),
    ("reviews", "Reviews"),
    ("booking", "Booking"),
    ("contact", "Contact"),
    // Hero
    ("heroTitle", "Delicious Catering for Every Occasion"),
    (
        "heroSubtitle",
        "Creating memorable dining experiences with authentic flavors and exceptional service",
    ),
    ("bookNow", "Book Now"),
    // About
    ("aboutTitle", "Our Story"),
    (
        "aboutText",
        "With over 10 years of passion for authentic cuisine, we've been creating unforgettable dining experiences for families and businesses. From traditional Tamil recipes passed down through generations to modern fusion dishes, we cater to every taste and occasion.",
    ),
    ("yearsExperience", "10+ Years Experience"),
    ("eventsCompleted", "3000+ Events Completed"),
    // Event categories
    ("eventCategoriesTitle", "Our Catering Services"),
    ("weddings", "Weddings"),
    ("parties", "Parties"),
    ("corporate", "Corporate Events"),
    ("special", "Special Occasions"),
    // Event type badges
    ("eventWedding", "Wedding"),
    ("eventParty", "Party"),
    ("eventCorporate", "Corporate"),
    ("eventSpecial", "Special"),
    // Footer
    ("quickEnquiry", "Quick Enquiry"),
    ("followUs", "Follow Us"),
    ("callUs", "Call Us"),
    ("emailUs", "Email Us"),
    // Menu
    (
        "menuSubtitle",
        "Discover our exquisite collection of authentic dishes crafted with love and tradition",
    ),
    ("categoryAll", "All"),
    ("categoryVeg", "Vegetarian"),
    ("categoryNonVeg", "Non-Vegetarian"),
    ("categorySweets", "Sweets"),
    ("addToCart", "Add to Cart"),
    ("addedToCart", "Added to Cart"),
    // Cart
    ("yourCart", "Your Cart"),
    ("cartEmpty", "Your cart is empty"),
    ("clearCart", "Clear Cart"),
    ("proceedToContact", "Proceed to Contact"),
    // Gallery
    (
        "gallerySubtitle",
        "Explore our portfolio of successful events and memorable dining experiences",
    ),
    // Reviews
    (
        "reviewsSubtitle",
        "Read what our satisfied customers have to say about their dining experiences",
    ),
    ("leaveReview", "Leave a Review"),
    ("yourName", "Your Name"),
    ("rating", "Rating"),
    ("yourFeedback", "Your feedback..."),
    ("submitReview", "Submit Review"),
    ("reviewSubmittedTitle", "Review Submitted!"),
    (
        "reviewSubmittedText",
        "Thank you for your feedback. It will be reviewed before publishing.",
    ),
    // Booking
    (
        "bookingSubtitle",
        "Book your perfect catering experience with us for any occasion",
    ),
    ("yourPhone", "Phone Number"),
    ("yourEmail", "Email Address"),
    ("eventDate", "Event Date"),
    ("eventType", "Event Type"),
    ("guestCount", "Number of Guests"),
    ("additionalMessage", "Additional details..."),
    ("selectedDishes", "Selected Dishes"),
    ("noDishesSelected", "No dishes selected yet. Browse the menu to add some."),
    ("sendInquiry", "Send Inquiry"),
    ("bookingSubmittedTitle", "Inquiry Sent!"),
    (
        "bookingSubmittedText",
        "Thank you! We will contact you within 24 hours to confirm your event.",
    ),
    // Contact
    (
        "contactSubtitle",
        "Get in touch with us to discuss your catering needs and special requirements",
    ),
    ("contactComingSoon", "Contact Form Coming Soon"),
    (
        "contactComingSoonText",
        "We're creating a beautiful contact form with location maps and multiple ways to reach us.",
    ),
];

const TA: &[(&str, &str)] = &[
    // Navigation
    ("home", "முகப்பு"),
    ("menu", "உணவு பட்டியல்"),
    ("gallery", "படத்தொகுப்பு"),
    ("reviews", "விமர்சனங்கள்"),
    ("booking", "முன்பதிவு"),
    ("contact", "தொடர்பு"),
    // Hero
    ("heroTitle", "ஒவ்வொரு நிகழ்வுக்கும் சுவையான கேட்டரிங்"),
    (
        "heroSubtitle",
        "உண்மையான சுவைகள் மற்றும் சிறந்த சேவையுடன் மறக்கமுடியாத உணவு அனுபவங்களை உருவாக்குகிறோம்",
    ),
    ("bookNow", "இப்போது முன்பதிவு செய்க"),
    // About
    ("aboutTitle", "எங்கள் கதை"),
    (
        "aboutText",
        "10 ஆண்டுகளுக்கும் மேலாக உண்மையான உணவு வகைகளில் ஆர்வத்துடன், நாங்கள் குடும்பங்கள் மற்றும் வணிகங்களுக்கு மறக்கமுடியாத உணவு அனுபவங்களை உருவாக்கி வருகிறோம். தலைமுறைகளாக வழங்கப்பட்ட பாரம்பரிய தமிழ் சமையல் குறிப்புகள் முதல் நவீன கலவை உணவுகள் வரை, நாங்கள் ஒவ்வொரு சுவைக்கும் மற்றும் நிகழ்வுக்கும் கேட்டரிங் செய்கிறோம்.",
    ),
    ("yearsExperience", "10+ ஆண்டுகள் அனுபவம்"),
    ("eventsCompleted", "3000+ நிகழ்வுகள் நிறைவு"),
    // Event categories
    ("eventCategoriesTitle", "எங்கள் கேட்டரிங் சேவைகள்"),
    ("weddings", "திருமணங்கள்"),
    ("parties", "விழாக்கள்"),
    ("corporate", "நிறுவன நிகழ்வுகள்"),
    ("special", "சிறப்பு நிகழ்வுகள்"),
    // Event type badges
    ("eventWedding", "திருமணம்"),
    ("eventParty", "விழா"),
    ("eventCorporate", "நிறுவனம்"),
    ("eventSpecial", "சிறப்பு"),
    // Footer
    ("quickEnquiry", "விரைவு விசாரணை"),
    ("followUs", "எங்களை பின்தொடரவும்"),
    ("callUs", "அழைக்கவும்"),
    ("emailUs", "மின்னஞ்சல் அனுப்பவும்"),
    // Menu
    (
        "menuSubtitle",
        "அன்பு மற்றும் பாரம்பரியத்துடன் தயாரிக்கப்பட்ட எங்கள் உண்மையான உணவுகளின் அருமையான தொகுப்பைக் கண்டறியவும்",
    ),
    ("categoryAll", "அனைத்தும்"),
    ("categoryVeg", "சைவம்"),
    ("categoryNonVeg", "அசைவம்"),
    ("categorySweets", "இனிப்புகள்"),
    ("addToCart", "கார்ட்டில் சேர்க்கவும்"),
    ("addedToCart", "கார்ட்டில் சேர்க்கப்பட்டது"),
    // Cart
    ("yourCart", "உங்கள் கார்ட்"),
    ("cartEmpty", "உங்கள் கார்ட் காலியாக உள்ளது"),
    ("clearCart", "கார்ட்டை அழிக்கவும்"),
    ("proceedToContact", "தொடர்பு பக்கத்திற்கு செல்லவும்"),
    // Gallery
    (
        "gallerySubtitle",
        "எங்கள் வெற்றிகரமான நிகழ்வுகள் மற்றும் மறக்கமுடியாத உணவு அனுபவங்களின் போர்ட்ஃபோலியோவை ஆராயுங்கள்",
    ),
    // Reviews
    (
        "reviewsSubtitle",
        "எங்கள் திருப்தியான வாடிக்கையாளர்கள் தங்கள் உணவு அனுபவங்களைப் பற்றி என்ன சொல்கிறார்கள் என்பதைப் படியுங்கள்",
    ),
    ("leaveReview", "ஒரு மதிப்பாய்வை விடுங்கள்"),
    ("yourName", "உங்கள் பெயர்"),
    ("rating", "மதிப்பீடு"),
    ("yourFeedback", "உங்கள் கருத்து..."),
    ("submitReview", "மதிப்பாய்வு சமர்ப்பிக்கவும்"),
    ("reviewSubmittedTitle", "மதிப்பாய்வு சமர்ப்பிக்கப்பட்டது!"),
    (
        "reviewSubmittedText",
        "உங்கள் கருத்துக்கு நன்றி. வெளியிடும் முன் இது மதிப்பாய்வு செய்யப்படும்.",
    ),
    // Booking
    (
        "bookingSubtitle",
        "எந்த நிகழ்வுக்கும் எங்களுடன் உங்கள் சிறந்த கேட்டரிங் அனுபவத்தை முன்பதிவு செய்யுங்கள்",
    ),
    ("yourPhone", "தொலைபேசி எண்"),
    ("yourEmail", "மின்னஞ்சல் முகவரி"),
    ("eventDate", "நிகழ்வு தேதி"),
    ("eventType", "நிகழ்வு வகை"),
    ("guestCount", "விருந்தினர்களின் எண்ணிக்கை"),
    ("additionalMessage", "கூடுதல் விவரங்கள்..."),
    ("selectedDishes", "தேர்ந்தெடுத்த உணவுகள்"),
    ("noDishesSelected", "இன்னும் உணவுகள் தேர்ந்தெடுக்கப்படவில்லை. சேர்க்க உணவு பட்டியலைப் பாருங்கள்."),
    ("sendInquiry", "விசாரணை அனுப்பு"),
    ("bookingSubmittedTitle", "விசாரணை அனுப்பப்பட்டது!"),
    (
        "bookingSubmittedText",
        "நன்றி! உங்கள் நிகழ்வை உறுதிப்படுத்த 24 மணி நேரத்திற்குள் உங்களைத் தொடர்புகொள்வோம்.",
    ),
    // Contact
    (
        "contactSubtitle",
        "உங்கள் கேட்டரிங் தேவைகள் மற்றும் சிறப்புக் கோரிக்கைகளைப் பற்றி விவாதிக்க எங்களைத் தொடர்புகொள்ளுங்கள்",
    ),
    ("contactComingSoon", "தொடர்பு படிவம் விரைவில்"),
    (
        "contactComingSoonText",
        "இருப்பிட வரைபடங்கள் மற்றும் பல தொடர்பு வழிகளுடன் ஒரு அழகான தொடர்பு படிவத்தை உருவாக்குகிறோம்.",
    ),
];

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_base_language_is_default() {
        assert_eq!(Language::default(), Language::BASE);
        assert_eq!(Language::BASE, Language::En);
    }

    #[test]
    fn test_toggle_is_involution() {
        for lang in Language::ALL {
            assert_ne!(lang.toggled(), lang);
            assert_eq!(lang.toggled().toggled(), lang);
        }
    }

    #[rstest]
    #[case("en", Some(Language::En))]
    #[case("TA", Some(Language::Ta))]
    #[case(" ta-IN ", Some(Language::Ta))]
    #[case("en_GB", Some(Language::En))]
    #[case("fr", None)]
    #[case("", None)]
    fn test_parse_language(#[case] input: &str, #[case] expected: Option<Language>) {
        assert_eq!(Language::parse(input), expected);
    }

    #[test]
    fn test_language_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::Ta).unwrap(), "\"ta\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }

    #[rstest]
    #[case("menu", "Menu", "உணவு பட்டியல்")]
    #[case("home", "Home", "முகப்பு")]
    #[case("bookNow", "Book Now", "இப்போது முன்பதிவு செய்க")]
    #[case("yourCart", "Your Cart", "உங்கள் கார்ட்")]
    fn test_translate_known_key(#[case] key: &str, #[case] en: &str, #[case] ta: &str) {
        let table = translations();
        assert_eq!(table.translate(Language::En, key), en);
        assert_eq!(table.translate(Language::Ta, key), ta);
        assert_ne!(en, ta);
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let table = translations();
        for lang in Language::ALL {
            assert_eq!(table.translate(lang, "nonexistent_key"), "nonexistent_key");
        }
    }

    #[test]
    fn test_empty_value_falls_back_to_key() {
        let table = TranslationTable::new().with_entries(Language::Ta, &[("menu", "")]);
        assert_eq!(table.translate(Language::Ta, "menu"), "menu");
        assert!(!table.contains(Language::Ta, "menu"));
    }

    #[test]
    fn test_empty_table_falls_back_everywhere() {
        let table = TranslationTable::new();
        assert_eq!(table.translate(Language::En, "home"), "home");
        assert_eq!(table.len(Language::En), 0);
        assert_eq!(table.entries(Language::En).count(), 0);
    }

    #[test]
    fn test_bundled_languages_define_same_keys() {
        let table = translations();
        assert!(table.missing_keys(Language::En).is_empty());
        assert!(table.missing_keys(Language::Ta).is_empty());
        assert_eq!(table.len(Language::En), table.len(Language::Ta));
    }

    #[test]
    fn test_missing_keys_reports_gaps() {
        let table = TranslationTable::new()
            .with_entries(Language::En, &[("home", "Home"), ("menu", "Menu")])
            .with_entries(Language::Ta, &[("home", "முகப்பு")]);
        assert_eq!(table.missing_keys(Language::Ta), vec!["menu"]);
        assert!(table.missing_keys(Language::En).is_empty());
    }

    #[test]
    fn test_entries_are_ordered_by_key() {
        let table = TranslationTable::new()
            .with_entries(Language::En, &[("zeta", "Z"), ("alpha", "A")]);
        let keys: Vec<&str> = table.entries(Language::En).map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["alpha", "zeta"]);
    }
}
