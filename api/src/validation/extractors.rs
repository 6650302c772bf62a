//! Custom Axum extractors for validated input
//!
//! This module provides `ValidatedJson<T>` - a replacement for `Json<T>` that
//! parses the raw wire payload, sanitizes it, and runs schema validation,
//! handing the handler the typed domain value that validation produced.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// A field-level validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation error response body
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub message: String,
    pub errors: Vec<FieldError>,
    pub code: u16,
    pub timestamp: String,
    pub correlation_id: String,
}

impl ValidationErrorResponse {
    pub fn new(errors: Vec<FieldError>) -> Self {
        let error_summary = if errors.len() == 1 {
            format!("Validation failed for field '{}'", errors[0].field)
        } else {
            format!("Validation failed for {} fields", errors.len())
        };

        Self {
            error: "ValidationError".to_string(),
            message: error_summary,
            errors,
            code: 400,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            correlation_id: Uuid::new_v4().to_string(),
        }
    }
}

/// Validation error that converts to an HTTP response
#[derive(Debug)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(field, message)],
        }
    }
}

impl axum::response::IntoResponse for ValidationError {
    fn into_response(self) -> axum::response::Response {
        let response = ValidationErrorResponse::new(self.errors);
        (StatusCode::BAD_REQUEST, Json(response)).into_response()
    }
}

/// Trait for wire types whose validation produces a typed domain value
///
/// Implement this trait for your payload types to enable automatic
/// validation when using `ValidatedJson<T>`. A `Self::Valid` exists only if
/// every constraint held; there is no partially-validated state.
pub trait Validatable: Sized {
    /// The domain value produced by successful validation
    type Valid;

    /// Sanitize the data in-place (trim whitespace) before validation
    fn sanitize(&mut self);

    /// Validate every field, reporting all violations together
    fn validate(self) -> Result<Self::Valid, Vec<FieldError>>;
}

/// Custom JSON extractor that sanitizes and validates input
///
/// Use this instead of `Json<T>` to automatically:
/// 1. Parse JSON from the request body (a malformed body is a single
///    `body` error, distinct from field-level errors)
/// 2. Sanitize the raw fields (trim whitespace)
/// 3. Validate all fields and collect every violation
/// 4. Hand the handler the validated domain value
///
/// # Example
///
/// ```ignore
/// use crate::validation::ValidatedJson;
///
/// pub async fn create_booking(
///     ValidatedJson(booking): ValidatedJson<BookingPayload>,
/// ) -> impl IntoResponse {
///     // booking is the validated `Booking` domain value
///     // ...
/// }
/// ```
pub struct ValidatedJson<T: Validatable>(pub T::Valid);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validatable + Send,
    T::Valid: Send,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Step 1: Parse JSON
        let Json(mut data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| {
                // Convert JSON parsing errors to validation errors
                let message = match err {
                    axum::extract::rejection::JsonRejection::JsonDataError(e) => {
                        format!("Invalid JSON data: {}", e.body_text())
                    }
                    axum::extract::rejection::JsonRejection::JsonSyntaxError(e) => {
                        format!("JSON syntax error: {}", e.body_text())
                    }
                    axum::extract::rejection::JsonRejection::MissingJsonContentType(_) => {
                        "Content-Type must be application/json".to_string()
                    }
                    axum::extract::rejection::JsonRejection::BytesRejection(_) => {
                        "Failed to read request body".to_string()
                    }
                    _ => "Invalid JSON payload".to_string(),
                };
                ValidationError::single("body", message)
            })?;

        // Step 2: Sanitize the data
        data.sanitize();

        // Step 3: Validate and build the domain value
        let valid = data.validate().map_err(ValidationError::new)?;

        Ok(ValidatedJson(valid))
    }
}

/// Builder for accumulating validation errors while extracting fields
#[derive(Debug, Default)]
pub struct ValidationBuilder {
    errors: Vec<FieldError>,
}

impl ValidationBuilder {
    pub fn new() -> Self {
        Self { errors: vec![] }
    }

    /// Extract a required field, recording an error when it is missing or
    /// its validator rejects it. Returns the validated value on success.
    pub fn require<T, U, F>(&mut self, field: &str, value: Option<T>, validate: F) -> Option<U>
    where
        F: FnOnce(T) -> Result<U, String>,
    {
        match value {
            None => {
                self.errors.push(FieldError::new(field, "is required"));
                None
            }
            Some(value) => match validate(value) {
                Ok(valid) => Some(valid),
                Err(message) => {
                    self.errors.push(FieldError::new(field, message));
                    None
                }
            },
        }
    }

    /// Add an error directly
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.errors.push(FieldError::new(field, message));
        self
    }

    /// Finish building: the assembled value if no field failed, otherwise
    /// every recorded error.
    pub fn finish<T>(self, value: Option<T>) -> Result<T, Vec<FieldError>> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(self.errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error() {
        let error = FieldError::new("name", "is required");
        assert_eq!(error.field, "name");
        assert_eq!(error.message, "is required");
    }

    #[test]
    fn test_require_collects_all_failures() {
        let mut builder = ValidationBuilder::new();

        let name: Option<String> = builder.require("name", None::<String>, Ok);
        let age: Option<i64> = builder.require("age", Some(150_i64), |_| {
            Err("must be less than 120".to_string())
        });
        let email = builder.require("email", Some("user@example.com".to_string()), Ok);

        assert!(name.is_none());
        assert!(age.is_none());
        assert_eq!(email.as_deref(), Some("user@example.com"));

        let result: Result<(), _> = builder.finish(None);
        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].message, "is required");
        assert_eq!(errors[1].field, "age");
    }

    #[test]
    fn test_finish_returns_value_when_clean() {
        let mut builder = ValidationBuilder::new();
        let seat = builder.require("seat_pref", Some("A1".to_string()), Ok);

        let result = builder.finish(seat);
        assert_eq!(result.unwrap(), "A1");
    }

    #[test]
    fn test_validation_error_response() {
        let errors = vec![
            FieldError::new("contact_details.name", "is required"),
            FieldError::new("seat_pref", "must match the seat pattern"),
        ];

        let response = ValidationErrorResponse::new(errors);

        assert_eq!(response.error, "ValidationError");
        assert_eq!(response.code, 400);
        assert_eq!(response.errors.len(), 2);
        assert!(response.message.contains("2 fields"));
    }

    #[test]
    fn test_single_error_response() {
        let errors = vec![FieldError::new("seat_pref", "is required")];
        let response = ValidationErrorResponse::new(errors);

        assert!(response.message.contains("field 'seat_pref'"));
    }
}
