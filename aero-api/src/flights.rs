use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use aero_domain::flight::{Flight, FlightSearchQuery};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/flights", get(search_flights))
}

/// GET /api/flights?origin=..&destination=..&date=..
/// Equality search; no matches is an empty array, not an error
async fn search_flights(
    State(state): State<AppState>,
    Query(params): Query<FlightSearchQuery>,
) -> Result<Json<Vec<Flight>>, AppError> {
    let flights = state
        .flight_repo
        .search(&params.origin, &params.destination, &params.date)
        .await
        .map_err(|e| AppError::from_store("Failed to search flights", e))?;

    Ok(Json(flights))
}
