//! Field validators for input validation
//!
//! This module provides the validation functions for the booking fields of
//! the Flight Booking API. Validators either check a constraint or, for the
//! semi-structured fields (phone, date), parse the raw input into its
//! normalized representation.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use phonenumber::Mode;
use regex::Regex;

lazy_static! {
    /// Passenger and place names: letters and spaces only
    static ref NAME_REGEX: Regex = Regex::new(r"^[a-zA-Z ]+$").unwrap();

    /// Email: local part, then a domain containing at least one dot, no whitespace
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    /// Seat preference: row letter A-Z followed by a column digit 1-4
    static ref SEAT_REGEX: Regex = Regex::new(r"^[A-Z][1-4]$").unwrap();

    /// Calendar date shape: YYYY-MM-DD with zero padding
    static ref FLIGHT_DATE_REGEX: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
}

/// Age bounds, both exclusive
const MIN_AGE: i64 = 0;
const MAX_AGE: i64 = 120;

/// Validate a name-like field (passenger names and place names): bounded
/// length, letters and spaces only
pub fn validate_name(value: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len < min {
        return Err(format!("must be at least {} characters", min));
    }
    if len > max {
        return Err(format!("must be at most {} characters", max));
    }
    if !NAME_REGEX.is_match(value) {
        return Err("must contain only letters and spaces".to_string());
    }
    Ok(())
}

/// Validate a passenger age, strictly between 0 and 120
pub fn validate_age(age: i64) -> Result<(), String> {
    if age <= MIN_AGE {
        return Err(format!("must be greater than {}", MIN_AGE));
    }
    if age >= MAX_AGE {
        return Err(format!("must be less than {}", MAX_AGE));
    }
    Ok(())
}

/// Validate an email address: `local@domain`, dot in the domain, no whitespace
pub fn validate_email(value: &str) -> Result<(), String> {
    if !EMAIL_REGEX.is_match(value) {
        return Err("must be a valid email address".to_string());
    }
    Ok(())
}

/// Validate an international phone number and render its canonical form
///
/// The input must carry a country code (E.164 style, e.g. `+2348123456789`).
/// On success the RFC3966 rendering is returned (`tel:+234-812-345-6789`),
/// which itself parses back as a valid input.
pub fn validate_phone(value: &str) -> Result<String, String> {
    let parsed = phonenumber::parse(None, value).map_err(|_| {
        "must be a valid international phone number (e.g. +2348123456789)".to_string()
    })?;

    if !phonenumber::is_valid(&parsed) {
        return Err("must be a valid international phone number (e.g. +2348123456789)".to_string());
    }

    Ok(parsed.format().mode(Mode::Rfc3966).to_string())
}

/// Validate a flight date and parse it
///
/// Accepts `YYYY-MM-DD` only; the value must also be a real calendar date.
/// No bound is placed on how far in the past or future the date lies.
pub fn validate_flight_date(value: &str) -> Result<NaiveDate, String> {
    if !FLIGHT_DATE_REGEX.is_match(value) {
        return Err("must be a date in YYYY-MM-DD format".to_string());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| "must be a valid calendar date".to_string())
}

/// Validate a seat preference: one row letter `A`-`Z` and a column `1`-`4`
pub fn validate_seat_preference(value: &str) -> Result<(), String> {
    if !SEAT_REGEX.is_match(value) {
        return Err("must be a seat in the form letter A-Z plus column 1-4 (e.g. A1)".to_string());
    }
    Ok(())
}
