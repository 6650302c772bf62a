//! Validation implementation for the booking request
//!
//! This module implements the `Validatable` trait for the wire-level
//! `BookingPayload`, producing the validated `Booking` domain value.
//! Every violated field is reported, with dotted paths for nested fields.

use shared::models::{
    Booking, BookingPayload, ContactDetails, ContactDetailsPayload, FlightDetails,
    FlightDetailsPayload,
};

use super::extractors::{FieldError, Validatable, ValidationBuilder};
use super::sanitizers::trim_optional;
use super::validators::{
    validate_age, validate_email, validate_flight_date, validate_name, validate_phone,
    validate_seat_preference,
};

// ─────────────────────────────────────────────────────────────────────────────
// Constants for validation rules
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum length for passenger and place names
const MIN_NAME_LENGTH: usize = 3;
/// Maximum length for passenger and place names
const MAX_NAME_LENGTH: usize = 50;

// ─────────────────────────────────────────────────────────────────────────────
// BookingPayload validation
// ─────────────────────────────────────────────────────────────────────────────

impl Validatable for BookingPayload {
    type Valid = Booking;

    fn sanitize(&mut self) {
        if let Some(ref mut contact) = self.contact_details {
            trim_optional(&mut contact.name);
            trim_optional(&mut contact.email);
            trim_optional(&mut contact.phone);
            trim_optional(&mut contact.next_of_kin);
        }

        if let Some(ref mut flight) = self.flight_details {
            trim_optional(&mut flight.origin);
            trim_optional(&mut flight.destination);
            trim_optional(&mut flight.flight_date);
        }

        trim_optional(&mut self.seat_pref);
    }

    fn validate(self) -> Result<Booking, Vec<FieldError>> {
        let mut builder = ValidationBuilder::new();

        let contact_details = match self.contact_details {
            Some(contact) => validate_contact_details(contact, &mut builder),
            None => {
                builder.add_error("contact_details", "is required");
                None
            }
        };

        let flight_details = match self.flight_details {
            Some(flight) => validate_flight_details(flight, &mut builder),
            None => {
                builder.add_error("flight_details", "is required");
                None
            }
        };

        let seat_pref = builder.require("seat_pref", self.seat_pref, |seat| {
            validate_seat_preference(&seat)?;
            Ok(seat)
        });

        let booking = match (contact_details, flight_details, seat_pref) {
            (Some(contact_details), Some(flight_details), Some(seat_pref)) => Some(Booking {
                contact_details,
                flight_details,
                seat_pref,
            }),
            _ => None,
        };

        builder.finish(booking)
    }
}

/// Check every contact field, recording errors under `contact_details.*`
fn validate_contact_details(
    payload: ContactDetailsPayload,
    builder: &mut ValidationBuilder,
) -> Option<ContactDetails> {
    let name = builder.require("contact_details.name", payload.name, |name| {
        validate_name(&name, MIN_NAME_LENGTH, MAX_NAME_LENGTH)?;
        Ok(name)
    });

    let age = builder.require("contact_details.age", payload.age, |age| {
        validate_age(age)?;
        Ok(age)
    });

    let email = builder.require("contact_details.email", payload.email, |email| {
        validate_email(&email)?;
        Ok(email)
    });

    // Parses and re-renders: the canonical form lands in the domain value.
    let phone = builder.require("contact_details.phone", payload.phone, |phone| {
        validate_phone(&phone)
    });

    let next_of_kin = builder.require("contact_details.next_of_kin", payload.next_of_kin, |kin| {
        validate_name(&kin, MIN_NAME_LENGTH, MAX_NAME_LENGTH)?;
        Ok(kin)
    });

    Some(ContactDetails {
        name: name?,
        age: age?,
        email: email?,
        phone: phone?,
        next_of_kin: next_of_kin?,
    })
}

/// Check every flight field, recording errors under `flight_details.*`
fn validate_flight_details(
    payload: FlightDetailsPayload,
    builder: &mut ValidationBuilder,
) -> Option<FlightDetails> {
    let origin = builder.require("flight_details.origin", payload.origin, |origin| {
        validate_name(&origin, MIN_NAME_LENGTH, MAX_NAME_LENGTH)?;
        Ok(origin)
    });

    let destination = builder.require(
        "flight_details.destination",
        payload.destination,
        |destination| {
            validate_name(&destination, MIN_NAME_LENGTH, MAX_NAME_LENGTH)?;
            Ok(destination)
        },
    );

    let flight_date = builder.require("flight_details.flight_date", payload.flight_date, |raw| {
        validate_flight_date(&raw)
    });

    Some(FlightDetails {
        origin: origin?,
        destination: destination?,
        flight_date: flight_date?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_payload() -> BookingPayload {
        BookingPayload {
            contact_details: Some(ContactDetailsPayload {
                name: Some("John Doe".to_string()),
                age: Some(25),
                email: Some("user@example.com".to_string()),
                phone: Some("+2348123456789".to_string()),
                next_of_kin: Some("Jane Doe".to_string()),
            }),
            flight_details: Some(FlightDetailsPayload {
                origin: Some("Lagos".to_string()),
                destination: Some("Abuja".to_string()),
                flight_date: Some("2021-12-25".to_string()),
            }),
            seat_pref: Some("A1".to_string()),
        }
    }

    fn field_names(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_booking_builds_domain_value() {
        let booking = valid_payload().validate().unwrap();

        assert_eq!(booking.contact_details.name, "John Doe");
        assert_eq!(booking.contact_details.age, 25);
        // Phone is normalized to its canonical rendering
        assert_eq!(booking.contact_details.phone, "tel:+234-812-345-6789");
        assert_eq!(
            booking.flight_details.flight_date,
            NaiveDate::from_ymd_opt(2021, 12, 25).unwrap()
        );
        assert_eq!(booking.seat_pref, "A1");
    }

    #[test]
    fn test_single_bad_field_is_named() {
        let mut payload = valid_payload();
        payload.seat_pref = Some("A5".to_string());

        let errors = payload.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "seat_pref");
    }

    #[test]
    fn test_all_violations_reported_together() {
        let payload = BookingPayload {
            contact_details: Some(ContactDetailsPayload {
                name: Some("J5".to_string()),
                age: Some(150),
                email: Some("not-an-email".to_string()),
                phone: Some("12345".to_string()),
                next_of_kin: Some("Jane Doe".to_string()),
            }),
            flight_details: Some(FlightDetailsPayload {
                origin: Some("Lagos".to_string()),
                destination: Some("Abuja".to_string()),
                flight_date: Some("2021-13-01".to_string()),
            }),
            seat_pref: Some("11".to_string()),
        };

        let errors = payload.validate().unwrap_err();
        let fields = field_names(&errors);

        assert_eq!(errors.len(), 6);
        assert!(fields.contains(&"contact_details.name"));
        assert!(fields.contains(&"contact_details.age"));
        assert!(fields.contains(&"contact_details.email"));
        assert!(fields.contains(&"contact_details.phone"));
        assert!(fields.contains(&"flight_details.flight_date"));
        assert!(fields.contains(&"seat_pref"));
    }

    #[test]
    fn test_missing_sections_and_fields_are_required() {
        let payload = BookingPayload {
            contact_details: None,
            flight_details: Some(FlightDetailsPayload {
                origin: Some("Lagos".to_string()),
                destination: None,
                flight_date: Some("2021-12-25".to_string()),
            }),
            seat_pref: None,
        };

        let errors = payload.validate().unwrap_err();
        let fields = field_names(&errors);

        assert!(fields.contains(&"contact_details"));
        assert!(fields.contains(&"flight_details.destination"));
        assert!(fields.contains(&"seat_pref"));
        assert!(errors.iter().all(|e| e.message == "is required"));
    }

    #[test]
    fn test_age_boundaries() {
        for age in [1, 119] {
            let mut payload = valid_payload();
            if let Some(ref mut contact) = payload.contact_details {
                contact.age = Some(age);
            }
            assert!(payload.validate().is_ok(), "age {} should pass", age);
        }

        for age in [0, 120] {
            let mut payload = valid_payload();
            if let Some(ref mut contact) = payload.contact_details {
                contact.age = Some(age);
            }
            let errors = payload.validate().unwrap_err();
            assert_eq!(errors[0].field, "contact_details.age");
        }
    }

    #[test]
    fn test_name_boundaries() {
        for name in ["Ada", "a".repeat(50).as_str()] {
            let mut payload = valid_payload();
            if let Some(ref mut contact) = payload.contact_details {
                contact.name = Some(name.to_string());
            }
            assert!(payload.validate().is_ok());
        }

        for name in ["Al", "a".repeat(51).as_str(), "John Doe 3rd"] {
            let mut payload = valid_payload();
            if let Some(ref mut contact) = payload.contact_details {
                contact.name = Some(name.to_string());
            }
            let errors = payload.validate().unwrap_err();
            assert_eq!(errors[0].field, "contact_details.name");
        }
    }

    #[test]
    fn test_sanitize_trims_whitespace() {
        let mut payload = valid_payload();
        if let Some(ref mut contact) = payload.contact_details {
            contact.name = Some("  John Doe  ".to_string());
        }
        payload.sanitize();

        let booking = payload.validate().unwrap();
        assert_eq!(booking.contact_details.name, "John Doe");
    }

    #[test]
    fn test_whitespace_only_field_is_missing() {
        let mut payload = valid_payload();
        payload.seat_pref = Some("   ".to_string());
        payload.sanitize();

        let errors = payload.validate().unwrap_err();
        assert_eq!(errors[0].field, "seat_pref");
        assert_eq!(errors[0].message, "is required");
    }
}
