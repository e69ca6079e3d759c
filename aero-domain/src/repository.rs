use async_trait::async_trait;

use crate::booking::{BookingDetail, PassengerInput, PassengerUpdate};
use crate::flight::Flight;
use crate::StoreResult;

/// Repository trait for flight data access
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Equality match on origin, destination and departure date. An empty
    /// result set is `Ok(vec![])`, never an error.
    async fn search(
        &self,
        origin: &str,
        destination: &str,
        date: &str,
    ) -> StoreResult<Vec<Flight>>;
}

/// Repository trait for booking data access. Each write operation is one
/// atomic unit of work: the booking row and its passenger rows commit or
/// roll back together.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Creates a booking with status `confirmed` and inserts each
    /// passenger in input order. Returns the store-generated booking id.
    async fn create(&self, flight_id: i64, passengers: &[PassengerInput]) -> StoreResult<i64>;

    /// Fetches a booking and its passengers. Fails with
    /// [`StoreError::NotFound`](crate::StoreError::NotFound) before any
    /// passenger query when the booking is absent.
    async fn get(&self, booking_id: i64) -> StoreResult<BookingDetail>;

    /// Updates the booking status and the listed passenger rows. A
    /// passenger entry not owned by `booking_id` aborts the whole unit
    /// with [`StoreError::PassengerMismatch`](crate::StoreError::PassengerMismatch).
    async fn update(
        &self,
        booking_id: i64,
        status: &str,
        passengers: &[PassengerUpdate],
    ) -> StoreResult<()>;

    /// Deletes the booking and its passengers. A nonexistent id is a
    /// successful no-op.
    async fn delete(&self, booking_id: i64) -> StoreResult<()>;
}
