//! Reservation callback routes.
//!
//! The booking subsystem calls these after placing or confirming a
//! service reservation, so the event's budget ledger stays in sync.
//! Callers are the booking service itself (provider role) or an
//! administrator, never the organizer.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::{AppState, middleware::AuthUser};
use planora_shared::types::ReservationId;

use super::budgets::{budget_service, map_budget_error, validate_amount};

/// Creates the reservation callback routes (requires auth middleware to be
/// applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reservations/budget-item", post(add_reservation_item))
        .route("/reservations/{id}/reserved", post(mark_reserved))
}

/// Request body for mirroring a reservation into an event budget.
#[derive(Debug, Deserialize)]
pub struct ReservationItemRequest {
    /// Reservation placed by the booking flow.
    pub reservation_id: Uuid,
    /// Money set aside for the reserved service.
    pub planned_amount: Decimal,
}

/// Checks that the caller may report reservation outcomes.
fn require_booking_caller(auth: &AuthUser) -> Result<(), axum::response::Response> {
    if auth.claims().is_provider() || auth.claims().is_admin() {
        return Ok(());
    }
    Err((
        StatusCode::FORBIDDEN,
        Json(json!({
            "error": "forbidden",
            "message": "Provider or admin role required"
        })),
    )
        .into_response())
}

/// POST `/reservations/budget-item` - Mirror a placed reservation into the
/// event's budget.
async fn add_reservation_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<ReservationItemRequest>,
) -> impl IntoResponse {
    if let Err(response) = require_booking_caller(&auth) {
        return response;
    }
    if let Err(response) = validate_amount(payload.planned_amount) {
        return response;
    }

    let service = budget_service(&state);

    match service
        .add_reservation_as_budget_item(
            ReservationId::from_uuid(payload.reservation_id),
            payload.planned_amount,
        )
        .await
    {
        Ok(()) => {
            info!(
                reservation_id = %payload.reservation_id,
                planned_amount = %payload.planned_amount,
                "Reservation mirrored into budget"
            );
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to mirror reservation into budget");
            map_budget_error(&e)
        }
    }
}

/// POST `/reservations/{id}/reserved` - Confirm a manual reservation.
async fn mark_reserved(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    if let Err(response) = require_booking_caller(&auth) {
        return response;
    }

    let service = budget_service(&state);

    match service.mark_as_reserved(ReservationId::from_uuid(id)).await {
        Ok(()) => {
            info!(reservation_id = %id, "Reservation confirmed");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to confirm reservation");
            map_budget_error(&e)
        }
    }
}
