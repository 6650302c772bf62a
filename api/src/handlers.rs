use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use shared::models::{BookingPayload, BookingResponse};

use crate::{services, validation::ValidatedJson};

/// Create a booking
///
/// The extractor has already parsed, sanitized, and validated the payload;
/// the handler only flattens the booking and wraps it in the success
/// envelope. Nothing here can fail.
pub async fn create_booking(
    ValidatedJson(booking): ValidatedJson<BookingPayload>,
) -> impl IntoResponse {
    let record = services::process_booking(booking);

    tracing::info!(
        origin = %record.flight_origin,
        destination = %record.flight_destination,
        flight_date = %record.flight_date,
        seat = %record.seat_preference,
        "booking processed"
    );

    (
        StatusCode::CREATED,
        Json(BookingResponse {
            data: record,
            message: "Booking successful".to_string(),
        }),
    )
}

pub async fn route_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Route not found"})))
}
