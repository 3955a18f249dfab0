//! # Booking Commands
//!
//! The booking inquiry form. The dishes of an inquiry are whatever is in the
//! cart when it is sent.
//!
//! ## Inquiry Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Inquiry                                      │
//! │                                                                         │
//! │  Menu page ──► add_to_cart ──► Booking page ──► submit_booking          │
//! │                                    │                  │                 │
//! │                              get_booking()            ▼                 │
//! │                          (labels + selected   ┌─────────────────────┐  │
//! │                              dishes)          │ 1. Validate form    │  │
//! │                                               │ 2. Attach cart ids  │  │
//! │                                               │ 3. Assign UUID v4   │  │
//! │                                               │ 4. Log the inquiry  │  │
//! │                                               └─────────────────────┘  │
//! │                                                       │                 │
//! │                                                       ▼                 │
//! │                                               BookingReceipt           │
//! │                                                                         │
//! │  NOTE: the cart is not cleared; the visitor may still want to call.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Local, NaiveDate};
use feast_core::validation::validate_booking;
use feast_core::{BookingInquiry, Notification, MAX_GUEST_COUNT};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use super::EventTypeOption;
use crate::error::ApiError;
use crate::site::Site;
use crate::state::{CartState, LanguageState};

/// Form field labels.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingLabels {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub event_date: String,
    pub event_type: String,
    pub guest_count: String,
    pub message: String,
    pub selected_dishes: String,
    pub no_dishes: String,
    pub submit: String,
}

/// A cart dish listed on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedDish {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPage {
    pub title: String,
    pub subtitle: String,
    pub labels: BookingLabels,
    pub event_types: Vec<EventTypeOption>,
    pub selected_dishes: Vec<SelectedDish>,
    /// Earliest date the picker allows
    pub min_date: NaiveDate,
    pub max_guests: u32,
}

/// What the site returns for an accepted inquiry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingReceipt {
    pub inquiry_id: Uuid,
    pub dish_ids: Vec<String>,
    pub notification: Notification,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Gets the booking form with the dishes currently in the cart.
pub fn get_booking(site: &Site) -> Result<BookingPage, ApiError> {
    debug!("get_booking command");

    let cart = site.state::<CartState>()?;
    let t = site.state::<LanguageState>()?.translator();

    let selected_dishes = cart.with_cart(|c| {
        c.items()
            .iter()
            .map(|item| SelectedDish {
                id: item.id.clone(),
                name: t.text(&item.name),
            })
            .collect()
    });

    Ok(BookingPage {
        title: t.t("booking"),
        subtitle: t.t("bookingSubtitle"),
        labels: BookingLabels {
            name: t.t("yourName"),
            phone: t.t("yourPhone"),
            email: t.t("yourEmail"),
            event_date: t.t("eventDate"),
            event_type: t.t("eventType"),
            guest_count: t.t("guestCount"),
            message: t.t("additionalMessage"),
            selected_dishes: t.t("selectedDishes"),
            no_dishes: t.t("noDishesSelected"),
            submit: t.t("sendInquiry"),
        },
        event_types: EventTypeOption::all(&t),
        selected_dishes,
        min_date: today(),
        max_guests: MAX_GUEST_COUNT,
    })
}

/// Sends a booking inquiry.
///
/// ## Errors
/// `VALIDATION_ERROR` naming the first bad field.
pub fn submit_booking(site: &Site, inquiry: BookingInquiry) -> Result<BookingReceipt, ApiError> {
    submit_booking_on(site, inquiry, today())
}

/// [`submit_booking`] with an explicit "today".
pub fn submit_booking_on(
    site: &Site,
    inquiry: BookingInquiry,
    today: NaiveDate,
) -> Result<BookingReceipt, ApiError> {
    debug!(event_date = %inquiry.event_date, "submit_booking command");

    let cart = site.state::<CartState>()?;
    let t = site.state::<LanguageState>()?.translator();
    validate_booking(&inquiry, today)?;

    let inquiry_id = Uuid::new_v4();
    let dish_ids = cart.with_cart(|c| c.ids());

    info!(
        inquiry_id = %inquiry_id,
        name = %inquiry.name.trim(),
        event_type = %inquiry.event_type,
        event_date = %inquiry.event_date,
        guests = inquiry.guest_count,
        dishes = ?dish_ids,
        "booking inquiry received"
    );

    Ok(BookingReceipt {
        inquiry_id,
        dish_ids,
        notification: Notification::new(
            t.t("bookingSubmittedTitle"),
            t.t("bookingSubmittedText"),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{cart, test_site};
    use crate::error::ErrorCode;
    use feast_core::EventType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_inquiry() -> BookingInquiry {
        BookingInquiry {
            name: "Meena".to_string(),
            phone: None,
            email: Some("meena@example.com".to_string()),
            event_date: date(2099, 6, 1),
            event_type: EventType::Wedding,
            guest_count: 300,
            message: Some("Banana leaf service please".to_string()),
        }
    }

    #[test]
    fn test_inquiry_carries_cart_dishes() {
        let site = test_site();
        cart::add_to_cart(&site, "d1").unwrap();
        cart::add_to_cart(&site, "d7").unwrap();

        let receipt = submit_booking(&site, test_inquiry()).unwrap();

        assert_eq!(receipt.dish_ids, ["d1", "d7"]);
        assert_eq!(receipt.inquiry_id.get_version_num(), 4);
        assert_eq!(receipt.notification.title, "Inquiry Sent!");
        // cart is left as is
        assert_eq!(cart::get_cart_count(&site).unwrap().count, 2);
    }

    #[test]
    fn test_inquiry_ids_are_unique() {
        let site = test_site();
        let a = submit_booking(&site, test_inquiry()).unwrap();
        let b = submit_booking(&site, test_inquiry()).unwrap();
        assert_ne!(a.inquiry_id, b.inquiry_id);
    }

    #[test]
    fn test_event_today_is_accepted_yesterday_is_not() {
        let site = test_site();
        let today = date(2025, 3, 10);

        let on_day = BookingInquiry {
            event_date: today,
            ..test_inquiry()
        };
        assert!(submit_booking_on(&site, on_day, today).is_ok());

        let past = BookingInquiry {
            event_date: date(2025, 3, 9),
            ..test_inquiry()
        };
        let err = submit_booking_on(&site, past, today).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_contact_required() {
        let site = test_site();
        let inquiry = BookingInquiry {
            phone: None,
            email: None,
            ..test_inquiry()
        };

        let err = submit_booking(&site, inquiry).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("phone or email"));
    }

    #[test]
    fn test_dotless_email_domain_is_accepted() {
        let site = test_site();
        let inquiry = BookingInquiry {
            email: Some("chef@localhost".to_string()),
            ..test_inquiry()
        };

        assert!(submit_booking(&site, inquiry).is_ok());
    }

    #[test]
    fn test_negative_guest_count_is_validation_error() {
        let site = test_site();
        let inquiry = BookingInquiry {
            guest_count: -1,
            ..test_inquiry()
        };

        let err = submit_booking(&site, inquiry).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("guest count"), "{}", err.message);
    }

    #[test]
    fn test_booking_page_lists_cart_in_tamil() {
        let site = test_site();
        cart::add_to_cart(&site, "d8").unwrap();
        site.state::<LanguageState>().unwrap().toggle();

        let page = get_booking(&site).unwrap();

        assert_eq!(page.title, "முன்பதிவு");
        assert_eq!(page.selected_dishes.len(), 1);
        assert_eq!(page.selected_dishes[0].id, "d8");
        assert_eq!(page.max_guests, MAX_GUEST_COUNT);
    }
}
