use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::info;

use aero_domain::booking::{BookingDetail, CreateBookingRequest, UpdateBookingRequest};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct CreateBookingResponse {
    message: String,
    booking_id: i64,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/bookings", post(create_booking))
        .route(
            "/api/bookings/{id}",
            get(get_booking).put(update_booking).delete(delete_booking),
        )
}

/// POST /api/bookings
/// Create a booking together with its passengers in one unit of work
async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<CreateBookingResponse>), AppError> {
    let booking_id = state
        .booking_repo
        .create(req.flight_id, &req.passenger_data)
        .await
        .map_err(|e| AppError::from_store("Failed to create booking", e))?;

    info!("Booking created: {booking_id}");

    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            message: "Booking created successfully".to_string(),
            booking_id,
        }),
    ))
}

/// GET /api/bookings/{id}
/// Retrieve a booking and its passengers
async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BookingDetail>, AppError> {
    let detail = state
        .booking_repo
        .get(id)
        .await
        .map_err(|e| AppError::from_store("Failed to fetch booking", e))?;

    Ok(Json(detail))
}

/// PUT /api/bookings/{id}
/// Update the booking status and the listed passenger rows
async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateBookingRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .booking_repo
        .update(id, &req.status, &req.passenger_data)
        .await
        .map_err(|e| AppError::from_store("Failed to update booking", e))?;

    info!("Booking updated: {id}");

    Ok(Json(MessageResponse {
        message: "Booking updated successfully".to_string(),
    }))
}

/// DELETE /api/bookings/{id}
/// Cancel a booking; deleting a nonexistent id still reports success
async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .booking_repo
        .delete(id)
        .await
        .map_err(|e| AppError::from_store("Failed to cancel booking", e))?;

    info!("Booking cancelled: {id}");

    Ok(Json(MessageResponse {
        message: "Booking cancelled successfully".to_string(),
    }))
}
