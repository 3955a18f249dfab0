//! # Error Types
//!
//! Domain-specific error types for feast-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  feast-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Form input failures                            │
//! │                                                                         │
//! │  feast-site errors (app)                                               │
//! │  └── ApiError         - What display components see (serialized)       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Display component      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown translation keys, duplicate cart adds and removing an absent id
//! are deliberately NOT errors and have no variant here.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No dish with this id exists in the catalog.
    #[error("Dish not found: {0}")]
    DishNotFound(String),

    /// A bundled catalog fixture could not be parsed.
    ///
    /// ## When This Occurs
    /// Only when a fixture file under `data/` is edited into an invalid
    /// shape. The bundled fixtures are covered by tests.
    #[error("Catalog fixture '{fixture}' is invalid: {source}")]
    InvalidFixture {
        fixture: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the review and booking form rules before anything is logged
/// as submitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed email, date in the past).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
