use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// WIRE TYPES
// ═══════════════════════════════════════════════════════════════════════════
//
// Every leaf is optional so that a missing or null field is reported as a
// field-level validation error alongside all the others, instead of aborting
// deserialization on the first absent key.

/// Raw booking submission as received on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct BookingPayload {
    pub contact_details: Option<ContactDetailsPayload>,
    pub flight_details: Option<FlightDetailsPayload>,
    pub seat_pref: Option<String>,
}

/// Passenger contact section of a raw submission
#[derive(Debug, Clone, Deserialize)]
pub struct ContactDetailsPayload {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub next_of_kin: Option<String>,
}

/// Flight section of a raw submission
#[derive(Debug, Clone, Deserialize)]
pub struct FlightDetailsPayload {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub flight_date: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════
// DOMAIN TYPES
// ═══════════════════════════════════════════════════════════════════════════
//
// Constructed only by the schema validator. A `Booking` either satisfies
// every field constraint or it is never built.

/// Validated passenger contact details
///
/// `phone` holds the canonical RFC3966 rendering (e.g.
/// `tel:+234-812-345-6789`), not the raw input string.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactDetails {
    pub name: String,
    pub age: i64,
    pub email: String,
    pub phone: String,
    pub next_of_kin: String,
}

/// Validated flight details
#[derive(Debug, Clone, PartialEq)]
pub struct FlightDetails {
    pub origin: String,
    pub destination: String,
    pub flight_date: NaiveDate,
}

/// A fully validated booking
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub contact_details: ContactDetails,
    pub flight_details: FlightDetails,
    pub seat_pref: String,
}

// ═══════════════════════════════════════════════════════════════════════════
// RESPONSE TYPES
// ═══════════════════════════════════════════════════════════════════════════

/// Flat record echoed back to the caller after a successful booking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRecord {
    pub customer_name: String,
    pub customer_age: i64,
    pub customer_email: String,
    pub customer_phone: String,
    pub flight_origin: String,
    pub flight_destination: String,
    pub flight_date: NaiveDate,
    pub seat_preference: String,
}

/// Success envelope for `POST /booking/`
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub data: BookingRecord,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_record_serializes_flat_with_iso_date() {
        let record = BookingRecord {
            customer_name: "John Doe".to_string(),
            customer_age: 25,
            customer_email: "user@example.com".to_string(),
            customer_phone: "tel:+234-812-345-6789".to_string(),
            flight_origin: "Lagos".to_string(),
            flight_destination: "Abuja".to_string(),
            flight_date: NaiveDate::from_ymd_opt(2021, 12, 25).unwrap(),
            seat_preference: "A1".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["customer_name"], "John Doe");
        assert_eq!(value["customer_age"], 25);
        assert_eq!(value["flight_date"], "2021-12-25");
        assert_eq!(value["seat_preference"], "A1");
    }

    #[test]
    fn payload_accepts_missing_fields() {
        let payload: BookingPayload = serde_json::from_value(serde_json::json!({
            "contact_details": { "name": "John Doe" }
        }))
        .unwrap();

        let contact = payload.contact_details.unwrap();
        assert_eq!(contact.name.as_deref(), Some("John Doe"));
        assert!(contact.age.is_none());
        assert!(payload.flight_details.is_none());
        assert!(payload.seat_pref.is_none());
    }
}
