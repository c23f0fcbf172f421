//! # API Error Type
//!
//! Unified error type for register commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Register                           │
//! │                                                                         │
//! │  Cashier presses "Add"                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  commands::bill::add_item                                        │  │
//! │  │  Result<BillResponse, ApiError>                                  │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ─── BillError::UnknownProduct ──► ApiError ──►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Register turns ApiError into a warning Notice:                        │
//! │    [Product Not Found] Kiwi is not in our product database.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ApiError` serializes with a machine-readable `code`, so the `json`
//! shell command and any future IPC surface can report failures the same way.

use serde::Serialize;
use supermart_core::{BillError, CatalogError, CoreError};
use thiserror::Error;

/// API error returned from register commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "UNKNOWN_PRODUCT",
///   "title": "Product Not Found",
///   "message": "Kiwi is not in our product database."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Heading of the notice shown to the cashier
    pub title: String,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Name or quantity field left empty
    MissingInput,

    /// Name not in the catalog
    UnknownProduct,

    /// Quantity is not a whole number
    InvalidQuantityFormat,

    /// Quantity is zero or negative
    NonPositiveQuantity,

    /// Quantity or resulting amount out of range
    QuantityTooLarge,

    /// The product table failed to load
    InvalidCatalog,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, title: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError {
            code,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, "Error", message)
    }
}

/// Converts bill validation errors to API errors.
impl From<BillError> for ApiError {
    fn from(err: BillError) -> Self {
        let code = match &err {
            BillError::MissingInput => ErrorCode::MissingInput,
            BillError::UnknownProduct { .. } => ErrorCode::UnknownProduct,
            BillError::InvalidQuantityFormat { .. } => ErrorCode::InvalidQuantityFormat,
            BillError::NonPositiveQuantity { .. } => ErrorCode::NonPositiveQuantity,
            BillError::QuantityTooLarge { .. } => ErrorCode::QuantityTooLarge,
        };
        ApiError::new(code, err.title(), err.to_string())
    }
}

/// Converts catalog errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        tracing::error!("Catalog rejected: {}", err);
        ApiError::new(ErrorCode::InvalidCatalog, "Catalog Error", err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Bill(e) => e.into(),
            CoreError::Catalog(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bill_error_conversion() {
        let err: ApiError = BillError::UnknownProduct {
            name: "Kiwi".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::UnknownProduct);
        assert_eq!(err.title, "Product Not Found");
        assert_eq!(err.message, "Kiwi is not in our product database.");
    }

    #[test]
    fn test_core_error_conversion() {
        let err: ApiError = CoreError::from(BillError::MissingInput).into();
        assert_eq!(err.code, ErrorCode::MissingInput);
        assert_eq!(err.title, "Input Error");

        let err: ApiError = CoreError::from(CatalogError::EmptyName).into();
        assert_eq!(err.code, ErrorCode::InvalidCatalog);
    }

    #[test]
    fn test_serialization() {
        let err: ApiError = BillError::NonPositiveQuantity { quantity: 0 }.into();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NON_POSITIVE_QUANTITY");
        assert_eq!(json["title"], "Input Error");
        assert_eq!(json["message"], "Quantity must be a positive integer.");
    }

    #[test]
    fn test_display() {
        let err = ApiError::internal("boom");
        assert_eq!(err.to_string(), "[Internal] boom");
    }
}
