//! Booking business logic
//!
//! The only processing step behind `POST /booking/`: flatten a validated
//! booking into the record echoed back to the caller.

use shared::models::{Booking, BookingRecord};

/// Flatten a validated booking into the response record.
///
/// Infallible by construction: a `Booking` only exists once every field
/// constraint has been checked, so this is a pure rename/copy of fields.
/// The phone number already carries its canonical rendering.
pub fn process_booking(booking: Booking) -> BookingRecord {
    BookingRecord {
        customer_name: booking.contact_details.name,
        customer_age: booking.contact_details.age,
        customer_email: booking.contact_details.email,
        customer_phone: booking.contact_details.phone,
        flight_origin: booking.flight_details.origin,
        flight_destination: booking.flight_details.destination,
        flight_date: booking.flight_details.flight_date,
        seat_preference: booking.seat_pref,
    }
}
