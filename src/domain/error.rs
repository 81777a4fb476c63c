//! Validation errors for inbound customer payloads.
//!
//! Validation is structural only: every field is checked for presence and
//! type, and every failure is collected so the caller sees all problems at
//! once rather than the first one.
//!
//! # Examples
//!
//! ```
//! use churnguard::domain::customer::CustomerInput;
//! use churnguard::domain::error::FieldErrorKind;
//! use serde_json::json;
//!
//! let result = CustomerInput::from_json(&json!({ "gender": 1 }));
//! let errors = result.unwrap_err();
//!
//! assert!(errors.iter().any(|e| e.field() == Some("gender")
//!     && e.kind() == FieldErrorKind::StringType));
//! assert!(errors.iter().any(|e| e.field() == Some("tenure")
//!     && e.kind() == FieldErrorKind::Missing));
//! ```

use std::fmt;

use thiserror::Error;

/// Category of a single field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// A required field is absent.
    Missing,
    /// The field is present but is not a string.
    StringType,
    /// The field is present but is not an integer.
    IntType,
    /// The field is present but is not a number.
    FloatType,
    /// The payload is valid JSON but not an object.
    ObjectType,
    /// The payload is not valid JSON.
    JsonInvalid,
}

impl FieldErrorKind {
    /// Machine-readable error code reported to clients.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::StringType => "string_type",
            Self::IntType => "int_type",
            Self::FloatType => "float_type",
            Self::ObjectType => "model_attributes_type",
            Self::JsonInvalid => "json_invalid",
        }
    }

    /// Human-readable message reported to clients.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Missing => "Field required",
            Self::StringType => "Input should be a valid string",
            Self::IntType => "Input should be a valid integer",
            Self::FloatType => "Input should be a valid number",
            Self::ObjectType => "Input should be a valid dictionary or object",
            Self::JsonInvalid => "JSON decode error",
        }
    }
}

/// A single validation failure.
///
/// `field` is `None` when the failure concerns the payload as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    field: Option<&'static str>,
    kind: FieldErrorKind,
}

impl FieldError {
    /// Failure attached to a named field.
    #[must_use]
    pub const fn new(field: &'static str, kind: FieldErrorKind) -> Self {
        Self {
            field: Some(field),
            kind,
        }
    }

    /// Failure attached to the whole payload.
    #[must_use]
    pub const fn body(kind: FieldErrorKind) -> Self {
        Self { field: None, kind }
    }

    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        self.field
    }

    #[must_use]
    pub const fn kind(&self) -> FieldErrorKind {
        self.kind
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(f, "{field}: {}", self.kind.message()),
            None => write!(f, "body: {}", self.kind.message()),
        }
    }
}

/// Every validation failure found in one payload. Never empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid customer payload ({} error(s)): {}", .errors.len(), render(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Wrap collected failures. Returns `None` if there are none.
    #[must_use]
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// A single payload-level failure.
    #[must_use]
    pub fn body(kind: FieldErrorKind) -> Self {
        Self {
            errors: vec![FieldError::body(kind)],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

fn render(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
