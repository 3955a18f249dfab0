//! # Site Commands Module
//!
//! All commands exposed to display components.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (dispatcher + shared views)
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── language.rs  ◄─── Language toggle and translation lookups
//! ├── menu.rs      ◄─── Menu cards and category filter
//! ├── gallery.rs   ◄─── Past event photos
//! ├── reviews.rs   ◄─── Review list and review form
//! ├── booking.rs   ◄─── Booking inquiry form
//! ├── contact.rs   ◄─── Contact placeholder
//! ├── home.rs      ◄─── Landing page
//! ├── layout.rs    ◄─── Navbar and footer
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Display component                                                      │
//! │  ─────────────────                                                      │
//! │  {"id": 7, "command": "add_to_cart", "args": {"dishId": "d1"}}          │
//! │         │                                                               │
//! │         │ (one JSON line on stdin, see ipc.rs)                          │
//! │         ▼                                                               │
//! │  invoke(site, "add_to_cart", args)                                      │
//! │         │                                                               │
//! │         │ decode args ──► DishArgs { dish_id }                          │
//! │         ▼                                                               │
//! │  cart::add_to_cart(site, "d1")                                          │
//! │      site.state::<CatalogState>()?  ◄── Looked up by type               │
//! │      site.state::<CartState>()?                                         │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  {"id": 7, "ok": true, "data": { "items": [...], "count": 1, ... }}     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command asks the site only for the stores it needs:
//! ```rust,ignore
//! // Only needs language
//! pub fn translate(site: &Site, key: &str) -> Result<String, ApiError>
//!
//! // Needs catalog, cart and language
//! pub fn add_to_cart(site: &Site, dish_id: &str) -> Result<CartResponse, ApiError>
//! ```

pub mod booking;
pub mod cart;
pub mod config;
pub mod contact;
pub mod gallery;
pub mod home;
pub mod language;
pub mod layout;
pub mod menu;
pub mod reviews;

use feast_core::EventType;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;
use crate::site::Site;
use crate::state::Translator;

/// Every command name `invoke` accepts.
pub const COMMANDS: &[&str] = &[
    "get_cart",
    "get_cart_count",
    "add_to_cart",
    "remove_from_cart",
    "clear_cart",
    "get_language",
    "toggle_language",
    "set_language",
    "translate",
    "get_translations",
    "list_menu",
    "list_gallery",
    "list_reviews",
    "submit_review",
    "get_booking",
    "submit_booking",
    "get_contact",
    "proceed_to_contact",
    "get_home",
    "get_layout",
    "get_config",
];

/// Runs a command by name.
///
/// `args` is the JSON object of named arguments; `null` means no arguments.
///
/// ## Errors
/// - `UNKNOWN_COMMAND` if `command` is not in [`COMMANDS`]
/// - `INVALID_ARGUMENTS` if `args` does not decode
/// - whatever the command itself returns
pub fn invoke(site: &Site, command: &str, args: Value) -> Result<Value, ApiError> {
    debug!(command, "invoke");

    match command {
        // Cart
        "get_cart" => respond(cart::get_cart(site)?),
        "get_cart_count" => respond(cart::get_cart_count(site)?),
        "add_to_cart" => {
            let args: cart::DishArgs = parse_args(args)?;
            respond(cart::add_to_cart(site, &args.dish_id)?)
        }
        "remove_from_cart" => {
            let args: cart::DishArgs = parse_args(args)?;
            respond(cart::remove_from_cart(site, &args.dish_id)?)
        }
        "clear_cart" => respond(cart::clear_cart(site)?),

        // Language
        "get_language" => respond(language::get_language(site)?),
        "toggle_language" => respond(language::toggle_language(site)?),
        "set_language" => {
            let args: language::SetLanguageArgs = parse_args(args)?;
            respond(language::set_language(site, &args.language)?)
        }
        "translate" => {
            let args: language::TranslateArgs = parse_args(args)?;
            respond(language::translate(site, &args.key)?)
        }
        "get_translations" => respond(language::get_translations(site)?),

        // Pages
        "list_menu" => {
            let args: menu::MenuArgs = parse_args(args)?;
            respond(menu::list_menu(site, args.category.as_deref())?)
        }
        "list_gallery" => respond(gallery::list_gallery(site)?),
        "list_reviews" => respond(reviews::list_reviews(site)?),
        "submit_review" => respond(reviews::submit_review(site, parse_args(args)?)?),
        "get_booking" => respond(booking::get_booking(site)?),
        "submit_booking" => respond(booking::submit_booking(site, parse_args(args)?)?),
        "get_contact" => respond(contact::get_contact(site)?),
        "proceed_to_contact" => respond(contact::proceed_to_contact(site)?),
        "get_home" => respond(home::get_home(site)?),
        "get_layout" => respond(layout::get_layout(site)?),
        "get_config" => respond(config::get_config(site)?),

        _ => Err(ApiError::unknown_command(command)),
    }
}

/// Decodes named arguments. `null` is treated as `{}`.
fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ApiError> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    Ok(serde_json::from_value(args)?)
}

fn respond<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::internal(e.to_string()))
}

// =============================================================================
// Shared Views
// =============================================================================

/// One choice of an event type selector or badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeOption {
    pub value: EventType,
    pub label: String,
}

impl EventTypeOption {
    pub fn new(value: EventType, t: &Translator) -> Self {
        EventTypeOption {
            value,
            label: t.t(value.label_key()),
        }
    }

    /// All event types in form order.
    pub fn all(t: &Translator) -> Vec<Self> {
        EventType::ALL
            .into_iter()
            .map(|value| EventTypeOption::new(value, t))
            .collect()
    }
}

/// Builds a site with every store managed, for command tests.
#[cfg(test)]
pub(crate) fn test_site() -> Site {
    crate::build_site(crate::state::ConfigState::default()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::{CartState, LanguageState};
    use serde_json::json;

    #[test]
    fn test_unknown_command() {
        let site = test_site();
        let err = invoke(&site, "launch_rocket", Value::Null).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownCommand);
    }

    #[test]
    fn test_every_listed_command_is_dispatched() {
        let site = test_site();
        for command in COMMANDS {
            let result = invoke(&site, command, Value::Null);
            if let Err(err) = result {
                assert_ne!(err.code, ErrorCode::UnknownCommand, "{}", command);
            }
        }
    }

    #[test]
    fn test_missing_argument_is_invalid_arguments() {
        let site = test_site();
        let err = invoke(&site, "add_to_cart", json!({})).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArguments);

        let err = invoke(&site, "translate", json!({ "key": 5 })).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArguments);
    }

    #[test]
    fn test_cart_scenario_through_dispatcher() {
        let site = test_site();

        invoke(&site, "add_to_cart", json!({ "dishId": "d1" })).unwrap();
        invoke(&site, "add_to_cart", json!({ "dishId": "d1" })).unwrap();
        let cart = invoke(&site, "add_to_cart", json!({ "dishId": "d2" })).unwrap();
        assert_eq!(cart["count"], 2);
        assert_eq!(cart["items"][0]["id"], "d1");
        assert_eq!(cart["items"][1]["id"], "d2");

        let cart = invoke(&site, "remove_from_cart", json!({ "dishId": "d1" })).unwrap();
        assert_eq!(cart["count"], 1);
        assert_eq!(cart["items"][0]["id"], "d2");

        let cart = invoke(&site, "clear_cart", Value::Null).unwrap();
        assert_eq!(cart["count"], 0);
    }

    #[test]
    fn test_language_scenario_through_dispatcher() {
        let site = test_site();

        assert_eq!(invoke(&site, "get_language", Value::Null).unwrap()["language"], "en");
        assert_eq!(invoke(&site, "toggle_language", Value::Null).unwrap()["language"], "ta");
        assert_eq!(
            invoke(&site, "translate", json!({ "key": "menu" })).unwrap(),
            "உணவு பட்டியல்"
        );
        assert_eq!(
            invoke(&site, "translate", json!({ "key": "nonexistent_key" })).unwrap(),
            "nonexistent_key"
        );
    }

    #[test]
    fn test_set_language_through_dispatcher() {
        let site = test_site();

        let response = invoke(&site, "set_language", json!({ "language": "ta-IN" })).unwrap();
        assert_eq!(response["language"], "ta");
        assert_eq!(response["toggleLabel"], "English");

        let err = invoke(&site, "set_language", json!({ "language": "de" })).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = invoke(&site, "set_language", Value::Null).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArguments);
    }

    #[test]
    fn test_booking_email_needs_only_text_around_at() {
        let site = test_site();
        let inquiry = |email: &str| {
            json!({
                "name": "Meena",
                "email": email,
                "eventDate": "2099-06-01",
                "eventType": "wedding",
                "guestCount": 40
            })
        };

        assert!(invoke(&site, "submit_booking", inquiry("chef@localhost")).is_ok());

        let err = invoke(&site, "submit_booking", inquiry("chef@")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("email"), "{}", err.message);
    }

    #[test]
    fn test_out_of_range_numbers_are_validation_errors() {
        let site = test_site();
        let review = |rating: Value| {
            json!({ "name": "Priya", "rating": rating, "feedback": "Lovely" })
        };

        for rating in [json!(0), json!(6), json!(-3), json!(300)] {
            let err = invoke(&site, "submit_review", review(rating.clone())).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError, "rating {}", rating);
        }
        assert!(invoke(&site, "submit_review", review(json!(4))).is_ok());

        let booking = |guests: Value| {
            json!({
                "name": "Meena",
                "phone": "+91 98765 43210",
                "eventDate": "2099-06-01",
                "eventType": "party",
                "guestCount": guests
            })
        };
        for guests in [json!(-1), json!(0), json!(5001)] {
            let err = invoke(&site, "submit_booking", booking(guests.clone())).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError, "guests {}", guests);
        }
    }

    #[test]
    fn test_non_integer_numbers_are_invalid_arguments() {
        let site = test_site();

        let err = invoke(
            &site,
            "submit_review",
            json!({ "name": "Priya", "rating": "five", "feedback": "Lovely" }),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArguments);

        let err = invoke(
            &site,
            "submit_review",
            json!({ "name": "Priya", "rating": 4.5, "feedback": "Lovely" }),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArguments);
    }

    #[test]
    fn test_store_outside_site_is_state_not_managed() {
        let site = Site::builder().manage(LanguageState::new()).build();

        let err = invoke(&site, "get_cart", Value::Null).unwrap_err();
        assert_eq!(err.code, ErrorCode::StateNotManaged);
        assert_eq!(err.message, "CartState is not managed by this site");

        let site = Site::builder().manage(CartState::new()).build();
        let err = invoke(&site, "toggle_language", Value::Null).unwrap_err();
        assert_eq!(err.message, "LanguageState is not managed by this site");
    }

    #[test]
    fn test_event_type_options_follow_language() {
        let site = test_site();
        let language = site.state::<LanguageState>().unwrap();

        let options = EventTypeOption::all(&language.translator());
        assert_eq!(options.len(), 4);
        assert_eq!(options[0].label, "Wedding");

        language.toggle();
        let options = EventTypeOption::all(&language.translator());
        assert_eq!(options[0].label, "திருமணம்");
    }
}
