//! # Review Commands
//!
//! Published reviews and the "Leave a Review" form.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  invoke('submit_review', { name, rating, feedback, eventType })        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  validate_review ──fail──► VALIDATION_ERROR (form keeps its input)     │
//! │         │                                                               │
//! │         ok                                                              │
//! │         ▼                                                               │
//! │  log submission ──► Notification { "Review Submitted!", ... }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Submitted reviews are not stored and never appear in the list.

use chrono::NaiveDate;
use feast_core::validation::validate_review;
use feast_core::{Notification, Review, ReviewSubmission, MAX_RATING, MIN_RATING};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use super::EventTypeOption;
use crate::error::ApiError;
use crate::site::Site;
use crate::state::{CatalogState, LanguageState, Translator};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewView {
    pub id: String,
    pub name: String,
    pub rating: u8,
    pub feedback: String,
    pub event: EventTypeOption,
    pub date: NaiveDate,
}

impl ReviewView {
    fn new(review: &Review, t: &Translator) -> Self {
        ReviewView {
            id: review.id.clone(),
            name: review.name.clone(),
            rating: review.rating,
            feedback: t.text(&review.feedback),
            event: EventTypeOption::new(review.event_type, t),
            date: review.date,
        }
    }
}

/// Labels and choices for the review form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewForm {
    pub heading: String,
    pub name_label: String,
    pub rating_label: String,
    pub feedback_placeholder: String,
    pub submit_label: String,
    pub min_rating: u8,
    pub max_rating: u8,
    pub event_types: Vec<EventTypeOption>,
    /// Values the empty form starts with
    pub initial: ReviewSubmission,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsResponse {
    pub title: String,
    pub subtitle: String,
    pub reviews: Vec<ReviewView>,
    pub form: ReviewForm,
}

/// Lists published reviews in catalog order, with the review form.
pub fn list_reviews(site: &Site) -> Result<ReviewsResponse, ApiError> {
    debug!("list_reviews command");

    let catalog = site.state::<CatalogState>()?.inner();
    let t = site.state::<LanguageState>()?.translator();

    Ok(ReviewsResponse {
        title: t.t("reviews"),
        subtitle: t.t("reviewsSubtitle"),
        reviews: catalog
            .reviews()
            .iter()
            .map(|review| ReviewView::new(review, &t))
            .collect(),
        form: ReviewForm {
            heading: t.t("leaveReview"),
            name_label: t.t("yourName"),
            rating_label: t.t("rating"),
            feedback_placeholder: t.t("yourFeedback"),
            submit_label: t.t("submitReview"),
            min_rating: MIN_RATING,
            max_rating: MAX_RATING,
            event_types: EventTypeOption::all(&t),
            initial: ReviewSubmission::default(),
        },
    })
}

/// Accepts a review from the form.
///
/// ## Errors
/// `VALIDATION_ERROR` naming the first bad field.
pub fn submit_review(site: &Site, review: ReviewSubmission) -> Result<Notification, ApiError> {
    debug!("submit_review command");

    let t = site.state::<LanguageState>()?.translator();
    validate_review(&review)?;

    info!(
        submission_id = %Uuid::new_v4(),
        name = %review.name.trim(),
        rating = review.rating,
        event_type = %review.event_type,
        "review submitted"
    );

    Ok(Notification::new(
        t.t("reviewSubmittedTitle"),
        t.t("reviewSubmittedText"),
    ))
}
