//! Request validation errors for the HTTP adapter.
//!
//! Every 400 response carries `details` of the form
//! `{"field": ..., "code": ...}` so clients can point at the offending input.

use serde_json::json;

use crate::domain::{Error, ProductValidationError};

/// Machine-readable validation codes placed in error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    EmptyName,
    NameTooLong,
    InvalidNameCharacter,
    NegativePrice,
    PriceTooLarge,
    MalformedBody,
    InvalidId,
}

impl ValidationCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::NameTooLong => "name_too_long",
            Self::InvalidNameCharacter => "invalid_name_character",
            Self::NegativePrice => "negative_price",
            Self::PriceTooLarge => "price_too_large",
            Self::MalformedBody => "malformed_body",
            Self::InvalidId => "invalid_id",
        }
    }
}

/// Request field named in error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    const fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ValidationCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

/// Map a domain validation failure to a 400 payload.
pub(crate) fn product_validation_error(err: &ProductValidationError) -> Error {
    let (field, code) = match err {
        ProductValidationError::EmptyName => (FieldName::new("name"), ValidationCode::EmptyName),
        ProductValidationError::NameTooLong { .. } => {
            (FieldName::new("name"), ValidationCode::NameTooLong)
        }
        ProductValidationError::NameContainsNul => {
            (FieldName::new("name"), ValidationCode::InvalidNameCharacter)
        }
        ProductValidationError::NegativePrice => {
            (FieldName::new("price"), ValidationCode::NegativePrice)
        }
        ProductValidationError::PriceTooLarge { .. } => {
            (FieldName::new("price"), ValidationCode::PriceTooLarge)
        }
    };
    field_error(field, code, err.to_string())
}

/// A body that is not valid JSON or does not match the request shape.
pub(crate) fn malformed_body_error(cause: impl std::fmt::Display) -> Error {
    field_error(
        FieldName::new("body"),
        ValidationCode::MalformedBody,
        format!("request body is invalid: {cause}"),
    )
}

/// A path segment that is not an integer product id.
pub(crate) fn invalid_id_error() -> Error {
    field_error(
        FieldName::new("id"),
        ValidationCode::InvalidId,
        "product id must be an integer",
    )
}
