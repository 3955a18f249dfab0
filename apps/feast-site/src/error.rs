//! # API Error Type
//!
//! Unified error type for site commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Festive Feast                          │
//! │                                                                         │
//! │  Display component           Rust                                       │
//! │  ─────────────────           ────                                       │
//! │                                                                         │
//! │  {"command": "add_to_cart", "args": {"dishId": "d1"}}                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  commands::invoke                                                │  │
//! │  │  Result<Value, ApiError>                                         │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store not managed? ── STATE_NOT_MANAGED ───────┐                │  │
//! │  │         │                                       │                │  │
//! │  │         ▼                                       ▼                │  │
//! │  │  Bad arguments? ────── INVALID_ARGUMENTS ──── ApiError ─────────►│  │
//! │  │         │                                       ▲                │  │
//! │  │         ▼                                       │                │  │
//! │  │  CoreError? ────────── NOT_FOUND / VALIDATION ──┘                │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Duplicate cart adds, removing an absent dish and unknown translation
//! keys are not errors and never reach this type.

use feast_core::{CoreError, ValidationError};
use serde::Serialize;

/// API error returned from site commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "STATE_NOT_MANAGED",
///   "message": "CartState is not managed by this site"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced dish does not exist
    NotFound,

    /// Form input failed validation
    ValidationError,

    /// A store was used before it was registered with the site.
    /// Always a programming error, never a user error.
    StateNotManaged,

    /// No command with this name
    UnknownCommand,

    /// Command arguments could not be decoded
    InvalidArguments,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates the error for reading a store that was never managed.
    pub fn state_not_managed(type_name: &str) -> Self {
        ApiError::new(
            ErrorCode::StateNotManaged,
            format!("{} is not managed by this site", short_type_name(type_name)),
        )
    }

    /// Creates an unknown command error.
    pub fn unknown_command(command: &str) -> Self {
        ApiError::new(
            ErrorCode::UnknownCommand,
            format!("Unknown command: {}", command),
        )
    }

    /// Creates an invalid arguments error.
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidArguments, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// `feast_site::state::CartState` → `CartState`.
fn short_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DishNotFound(id) => ApiError::not_found("Dish", &id),
            CoreError::Validation(e) => ApiError::from(e),
            e @ CoreError::InvalidFixture { .. } => {
                // Log the parse detail but return a generic message
                tracing::error!("Catalog fixture failed to load: {}", e);
                ApiError::internal("Site content is unavailable")
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Argument decoding failures.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::invalid_arguments(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
