//! # Validation Module
//!
//! Rules for the two forms on the site: "Leave a Review" and the booking
//! inquiry.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Display component                                            │
//! │  ├── `required` attributes, star picker limited to 1-5                 │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command argument decoding (serde)                            │
//! │  ├── Types, closed event-type set, date format                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  ├── Trimmed emptiness, lengths, ranges                                │
//! │  └── Contact details, event date not in the past                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lengths are counted in characters, not bytes: Tamil text is several
//! bytes per character.
//!
//! ## Usage
//! ```rust
//! use feast_core::validation::{validate_rating, validate_email};
//!
//! assert!(validate_rating(5).is_ok());
//! assert!(validate_rating(0).is_err());
//! assert!(validate_email("guest@example.com").is_ok());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::types::{BookingInquiry, ReviewSubmission};
use crate::{MAX_GUEST_COUNT, MAX_RATING, MIN_RATING};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted person name.
pub const MAX_NAME_LEN: usize = 100;

/// Longest accepted free-text field (review feedback, booking message).
pub const MAX_TEXT_LEN: usize = 2000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required free-text field.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most `max` characters
///
/// ## Returns
/// The trimmed value.
pub fn validate_required_text(field: &str, value: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value.to_string())
}

/// Validates a person's name.
pub fn validate_name(name: &str) -> ValidationResult<String> {
    validate_required_text("name", name, MAX_NAME_LEN)
}

/// Validates an email address.
///
/// ## Rules
/// - Exactly one `@` with text on both sides
/// - No whitespace
///
/// A dotless domain such as `chef@localhost` is accepted.
///
/// Deliberately loose: the business replies by hand.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();
    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain spaces"));
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("must contain '@'"))?;

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid("must look like name@example.com"));
    }

    Ok(())
}

/// Validates a phone number.
///
/// ## Rules
/// - Digits plus `+`, `-`, spaces and parentheses
/// - Between 7 and 15 digits
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
    {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits, spaces, '+', '-' and parentheses".to_string(),
        });
    }

    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !(7..=15).contains(&digits) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain between 7 and 15 digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a star rating (1 to 5).
///
/// Takes any integer so that every out-of-range rating, negative or huge,
/// reports the same error.
pub fn validate_rating(rating: i64) -> ValidationResult<()> {
    if !(i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: MIN_RATING.into(),
            max: MAX_RATING.into(),
        });
    }

    Ok(())
}

/// Validates the expected number of guests.
pub fn validate_guest_count(guests: i64) -> ValidationResult<()> {
    if !(1..=i64::from(MAX_GUEST_COUNT)).contains(&guests) {
        return Err(ValidationError::OutOfRange {
            field: "guest count".to_string(),
            min: 1,
            max: MAX_GUEST_COUNT.into(),
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates that an event date is today or later.
///
/// `today` is passed in so this stays a pure function.
pub fn validate_event_date(date: NaiveDate, today: NaiveDate) -> ValidationResult<()> {
    if date < today {
        return Err(ValidationError::InvalidFormat {
            field: "event date".to_string(),
            reason: format!("must not be before {}", today),
        });
    }

    Ok(())
}

// =============================================================================
// Form Validators
// =============================================================================

/// Validates a review submission. Stops at the first failing field.
pub fn validate_review(review: &ReviewSubmission) -> ValidationResult<()> {
    validate_name(&review.name)?;
    validate_rating(review.rating)?;
    validate_required_text("feedback", &review.feedback, MAX_TEXT_LEN)?;
    Ok(())
}

/// Validates a booking inquiry. Stops at the first failing field.
///
/// ## Rules
/// - Name required
/// - At least one of phone / email; each one given must be well-formed
/// - Event date today or later
/// - 1 to 5000 guests
/// - Optional message at most 2000 characters
pub fn validate_booking(inquiry: &BookingInquiry, today: NaiveDate) -> ValidationResult<()> {
    validate_name(&inquiry.name)?;

    let phone = non_blank(inquiry.phone.as_deref());
    let email = non_blank(inquiry.email.as_deref());
    if phone.is_none() && email.is_none() {
        return Err(ValidationError::Required {
            field: "phone or email".to_string(),
        });
    }
    if let Some(phone) = phone {
        validate_phone(phone)?;
    }
    if let Some(email) = email {
        validate_email(email)?;
    }

    validate_event_date(inquiry.event_date, today)?;
    validate_guest_count(inquiry.guest_count)?;

    if let Some(message) = non_blank(inquiry.message.as_deref()) {
        validate_required_text("message", message, MAX_TEXT_LEN)?;
    }

    Ok(())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// =============================================================================
// Unit Tests
// =============================================================================
