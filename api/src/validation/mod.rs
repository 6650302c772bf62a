//! Input Validation Module
//!
//! This module provides input validation and sanitization for the Flight
//! Booking API.
//!
//! # Overview
//!
//! The validation system consists of three main components:
//!
//! 1. **Extractors** - The custom Axum extractor `ValidatedJson<T>`
//! 2. **Validators** - Reusable validation functions for booking fields
//! 3. **Sanitizers** - Functions to clean incoming data before validation
//!
//! # Usage
//!
//! ## Using ValidatedJson in Handlers
//!
//! ```ignore
//! use crate::validation::{ValidatedJson, Validatable, FieldError, ValidationBuilder};
//!
//! // Implement Validatable for your wire type; validation produces the
//! // typed domain value.
//! impl Validatable for MyPayload {
//!     type Valid = MyRequest;
//!
//!     fn sanitize(&mut self) {
//!         sanitizers::trim_optional(&mut self.name);
//!     }
//!
//!     fn validate(self) -> Result<MyRequest, Vec<FieldError>> {
//!         let mut builder = ValidationBuilder::new();
//!         let name = builder.require("name", self.name, |name| {
//!             validators::validate_name(&name, 1, 255)?;
//!             Ok(name)
//!         });
//!         builder.finish(name.map(|name| MyRequest { name }))
//!     }
//! }
//!
//! // Use in a handler - validation happens before the handler runs
//! pub async fn create_item(
//!     ValidatedJson(req): ValidatedJson<MyPayload>,
//! ) -> impl IntoResponse {
//!     // req is the sanitized, validated domain value
//! }
//! ```
//!
//! ## Validation Error Response
//!
//! When validation fails, a 400 Bad Request is returned:
//!
//! ```json
//! {
//!   "error": "ValidationError",
//!   "message": "Validation failed for 2 fields",
//!   "errors": [
//!     {"field": "contact_details.name", "message": "must be at least 3 characters"},
//!     {"field": "seat_pref", "message": "is required"}
//!   ],
//!   "code": 400,
//!   "timestamp": "2026-02-20T10:30:00Z",
//!   "correlation_id": "uuid-here"
//! }
//! ```

pub mod extractors;
pub mod requests;
pub mod sanitizers;
pub mod validators;

// Re-export commonly used items
pub use extractors::{FieldError, Validatable, ValidatedJson, ValidationBuilder, ValidationError};
pub use sanitizers::trim_optional;
pub use validators::{
    validate_age, validate_email, validate_flight_date, validate_name, validate_phone,
    validate_seat_preference,
};
