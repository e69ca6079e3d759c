use aero_domain::repository::{BookingRepository, FlightRepository};
use std::sync::Arc;

/// Repositories are injected as capabilities so tests can swap in
/// in-memory doubles; nothing here is process-global.
#[derive(Clone)]
pub struct AppState {
    pub flight_repo: Arc<dyn FlightRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
}
