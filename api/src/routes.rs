use axum::{routing::post, Router};

use crate::handlers;

/// Assemble the application router: the booking endpoint plus a JSON 404
/// fallback. Registration is explicit; middleware layers are applied by the
/// binary on top of this.
pub fn app() -> Router {
    Router::new()
        .merge(booking_routes())
        .fallback(handlers::route_not_found)
}

pub fn booking_routes() -> Router {
    Router::new().route("/booking/", post(handlers::create_booking))
}
