pub mod booking;
pub mod flight;
pub mod repository;

/// Store-level failure taxonomy. Every repository operation resolves to
/// one of these; the HTTP layer decides what the caller gets to see.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),
    #[error("write transaction failed: {0}")]
    Write(#[source] sqlx::Error),
    #[error("booking not found")]
    NotFound,
    #[error("passenger {passenger_id} does not belong to booking {booking_id}")]
    PassengerMismatch { passenger_id: i64, booking_id: i64 },
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passenger_mismatch_names_both_ids() {
        let err = StoreError::PassengerMismatch {
            passenger_id: 7,
            booking_id: 3,
        };
        assert_eq!(
            err.to_string(),
            "passenger 7 does not belong to booking 3"
        );
    }
}
