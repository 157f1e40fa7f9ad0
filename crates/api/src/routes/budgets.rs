//! Budget routes for organizers.
//!
//! Every endpoint here operates on one event's budget ledger and
//! requires the organizer role. The reservation callbacks that the
//! booking flow uses live in the `reservations` module.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::{AppState, middleware::AuthUser};
use planora_core::budget::{
    BudgetError, BudgetItemRequest, BudgetService, UpdateBudgetItemRequest,
};
use planora_db::{CategoryRepository, EventRepository, SolutionRepository};
use planora_shared::types::money::is_valid_amount;
use planora_shared::types::{BudgetItemId, CategoryId, EventId, UserId};

/// Creates the budget routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events/{event_id}/budget", get(get_budget))
        .route(
            "/events/{event_id}/budget/categories",
            put(update_budget_categories),
        )
        .route("/events/{event_id}/budget/items", get(list_budget_items))
        .route("/events/{event_id}/budget/items", post(create_budget_item))
        .route(
            "/events/{event_id}/budget/items/{item_id}",
            put(update_budget_item),
        )
        .route(
            "/events/{event_id}/budget/items/{item_id}",
            delete(delete_budget_item),
        )
        .route("/events/{event_id}/budget/purchase", post(purchase_product))
        .route(
            "/events/{event_id}/budget/suggestions",
            get(get_budget_suggestions),
        )
        .route("/budget-items", get(list_organizer_items))
}

// ============================================================================
// Request Types
// ============================================================================

/// Query parameters for budget suggestions.
#[derive(Debug, Deserialize)]
pub struct SuggestionsQuery {
    /// Category to search in.
    pub category_id: Uuid,
    /// Highest acceptable net price.
    pub price: Decimal,
}

/// Request body for replacing the budget's active categories.
#[derive(Debug, Deserialize)]
pub struct UpdateCategoriesRequest {
    /// Categories the organizer is planning in.
    pub category_ids: Vec<Uuid>,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Builds the budget service over the request's database handle.
pub(crate) fn budget_service(
    state: &AppState,
) -> BudgetService<EventRepository, SolutionRepository, CategoryRepository, SolutionRepository> {
    let db = (*state.db).clone();
    let solutions = Arc::new(SolutionRepository::new(db.clone()));
    BudgetService::new(
        Arc::new(EventRepository::new(db.clone())),
        Arc::clone(&solutions),
        Arc::new(CategoryRepository::new(db)),
        solutions,
    )
}

/// Checks that the caller holds the organizer role.
fn require_organizer(auth: &AuthUser) -> Result<(), axum::response::Response> {
    if auth.claims().is_organizer() {
        return Ok(());
    }
    Err((
        StatusCode::FORBIDDEN,
        Json(json!({
            "error": "forbidden",
            "message": "Organizer role required"
        })),
    )
        .into_response())
}

/// Rejects negative amounts before they reach the ledger.
pub(crate) fn validate_amount(amount: Decimal) -> Result<(), axum::response::Response> {
    if is_valid_amount(amount) {
        return Ok(());
    }
    Err((
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "invalid_amount",
            "message": "Amount cannot be negative"
        })),
    )
        .into_response())
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/events/{event_id}/budget` - The event's budget with all lines.
async fn get_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<Uuid>,
) -> impl IntoResponse {
    if let Err(response) = require_organizer(&auth) {
        return response;
    }

    let service = budget_service(&state);

    match service.get_budget(EventId::from_uuid(event_id)).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to get budget");
            map_budget_error(&e)
        }
    }
}

/// GET `/events/{event_id}/budget/items` - All lines of the event's budget.
///
/// Processed lines render the solution as it looked when the money was
/// committed.
async fn list_budget_items(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<Uuid>,
) -> impl IntoResponse {
    if let Err(response) = require_organizer(&auth) {
        return response;
    }

    let service = budget_service(&state);

    match service.get_budget_items(EventId::from_uuid(event_id)).await {
        Ok(views) => (StatusCode::OK, Json(json!({ "items": views }))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list budget items");
            map_budget_error(&e)
        }
    }
}

/// POST `/events/{event_id}/budget/items` - Plan money for a solution.
async fn create_budget_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<BudgetItemRequest>,
) -> impl IntoResponse {
    if let Err(response) = require_organizer(&auth) {
        return response;
    }
    if let Err(response) = validate_amount(payload.planned_amount) {
        return response;
    }

    let service = budget_service(&state);

    match service
        .create_budget_item(EventId::from_uuid(event_id), payload)
        .await
    {
        Ok(view) => {
            info!(
                event_id = %event_id,
                solution_id = %view.solution_id,
                planned_amount = %view.planned_amount,
                "Budget item created"
            );
            (StatusCode::CREATED, Json(view)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create budget item");
            map_budget_error(&e)
        }
    }
}

/// PUT `/events/{event_id}/budget/items/{item_id}` - Replace a line's planned amount.
async fn update_budget_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((event_id, item_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateBudgetItemRequest>,
) -> impl IntoResponse {
    if let Err(response) = require_organizer(&auth) {
        return response;
    }
    if let Err(response) = validate_amount(payload.planned_amount) {
        return response;
    }

    let service = budget_service(&state);

    match service
        .update_budget_item(
            EventId::from_uuid(event_id),
            BudgetItemId::from_uuid(item_id),
            payload,
        )
        .await
    {
        Ok(view) => {
            info!(
                event_id = %event_id,
                item_id = %item_id,
                planned_amount = %view.planned_amount,
                "Budget item updated"
            );
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to update budget item");
            map_budget_error(&e)
        }
    }
}

/// DELETE `/events/{event_id}/budget/items/{item_id}` - Remove a planned line.
async fn delete_budget_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((event_id, item_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    if let Err(response) = require_organizer(&auth) {
        return response;
    }

    let service = budget_service(&state);

    match service
        .delete_budget_item(
            EventId::from_uuid(event_id),
            BudgetItemId::from_uuid(item_id),
        )
        .await
    {
        Ok(()) => {
            info!(event_id = %event_id, item_id = %item_id, "Budget item deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to delete budget item");
            map_budget_error(&e)
        }
    }
}

/// POST `/events/{event_id}/budget/purchase` - Buy a product for the event.
async fn purchase_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<BudgetItemRequest>,
) -> impl IntoResponse {
    if let Err(response) = require_organizer(&auth) {
        return response;
    }
    if let Err(response) = validate_amount(payload.planned_amount) {
        return response;
    }

    let service = budget_service(&state);

    match service
        .purchase_product(EventId::from_uuid(event_id), payload)
        .await
    {
        Ok(product) => {
            info!(
                event_id = %event_id,
                solution_id = %product.id,
                net_price = %product.net_price,
                "Product purchased"
            );
            (StatusCode::OK, Json(product)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to purchase product");
            map_budget_error(&e)
        }
    }
}

/// GET `/events/{event_id}/budget/suggestions` - Catalog entries worth suggesting.
///
/// Filters by category and a net price ceiling, scoped to the event's date.
async fn get_budget_suggestions(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<Uuid>,
    Query(query): Query<SuggestionsQuery>,
) -> impl IntoResponse {
    if let Err(response) = require_organizer(&auth) {
        return response;
    }
    if let Err(response) = validate_amount(query.price) {
        return response;
    }

    let service = budget_service(&state);

    match service
        .get_budget_suggestions(
            EventId::from_uuid(event_id),
            CategoryId::from_uuid(query.category_id),
            query.price,
        )
        .await
    {
        Ok(views) => (StatusCode::OK, Json(json!({ "suggestions": views }))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to get budget suggestions");
            map_budget_error(&e)
        }
    }
}

/// PUT `/events/{event_id}/budget/categories` - Replace the active-category set.
async fn update_budget_categories(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<Uuid>,
    Json(payload): Json<UpdateCategoriesRequest>,
) -> impl IntoResponse {
    if let Err(response) = require_organizer(&auth) {
        return response;
    }

    let category_ids: Vec<CategoryId> = payload
        .category_ids
        .into_iter()
        .map(CategoryId::from_uuid)
        .collect();

    let service = budget_service(&state);

    match service
        .update_budget_active_categories(EventId::from_uuid(event_id), category_ids)
        .await
    {
        Ok(view) => {
            info!(
                event_id = %event_id,
                categories = view.active_categories.len(),
                "Active categories replaced"
            );
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to update active categories");
            map_budget_error(&e)
        }
    }
}

/// GET `/budget-items` - Processed lines across all of the caller's events.
///
/// One entry per solution, newest processing first. This feeds the
/// review eligibility list.
async fn list_organizer_items(
    State(state): State<AppState>,
    auth: AuthUser,
) -> impl IntoResponse {
    if let Err(response) = require_organizer(&auth) {
        return response;
    }

    let service = budget_service(&state);

    match service
        .get_all_budget_items(UserId::from_uuid(auth.user_id()))
        .await
    {
        Ok(views) => (StatusCode::OK, Json(json!({ "items": views }))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list organizer budget items");
            map_budget_error(&e)
        }
    }
}

/// Maps budget errors to HTTP responses.
pub(crate) fn map_budget_error(e: &BudgetError) -> axum::response::Response {
    match e {
        BudgetError::EventNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "event_not_found",
                "message": format!("Event not found: {}", id)
            })),
        )
            .into_response(),
        BudgetError::SolutionNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "solution_not_found",
                "message": format!("Solution not found: {}", id)
            })),
        )
            .into_response(),
        BudgetError::ItemNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "budget_item_not_found",
                "message": format!("Budget item not found: {}", id)
            })),
        )
            .into_response(),
        BudgetError::CategoryNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "category_not_found",
                "message": format!("Category not found: {}", id)
            })),
        )
            .into_response(),
        BudgetError::ReservationNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "reservation_not_found",
                "message": format!("Reservation not found: {}", id)
            })),
        )
            .into_response(),
        BudgetError::ReservationLineMissing(id) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "reservation_line_missing",
                "message": format!("No budget line found for reserved service: {}", id)
            })),
        )
            .into_response(),
        BudgetError::InsufficientFunds { required, planned } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": "insufficient_funds",
                "message": format!(
                    "Net price {} exceeds planned amount {}",
                    required, planned
                )
            })),
        )
            .into_response(),
        BudgetError::AlreadyProcessed(id) => (
            StatusCode::CONFLICT,
            Json(json!({
                "error": "already_processed",
                "message": format!("Budget item for solution {} is already processed", id)
            })),
        )
            .into_response(),
        BudgetError::Conflict => (
            StatusCode::CONFLICT,
            Json(json!({
                "error": "conflict",
                "message": "Budget was modified concurrently, retry the request"
            })),
        )
            .into_response(),
        BudgetError::Store(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "internal_error",
                "message": "An error occurred"
            })),
        )
            .into_response(),
    }
}
