use aero_domain::booking::{
    Booking, BookingDetail, BookingStatus, Passenger, PassengerInput, PassengerUpdate,
};
use aero_domain::repository::BookingRepository;
use aero_domain::{StoreError, StoreResult};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

/// Transactional booking writes and the two-step booking read. Every
/// write owns its transaction boundary internally: an uncommitted
/// `sqlx::Transaction` rolls back when dropped, so each `?` below leaves
/// no partial booking or passenger state behind.
pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn create(&self, flight_id: i64, passengers: &[PassengerInput]) -> StoreResult<i64> {
        let mut tx = self.pool.begin().await.map_err(StoreError::Connection)?;

        let booking_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO booking (flight_id, booking_date, status)
            VALUES ($1, NOW(), $2)
            RETURNING booking_id
            "#,
        )
        .bind(flight_id)
        .bind(BookingStatus::Confirmed.to_string())
        .fetch_one(&mut *tx)
        .await
        .map_err(StoreError::Write)?;

        for passenger in passengers {
            sqlx::query(
                r#"
                INSERT INTO passenger (booking_id, first_name, last_name, email, phone_number)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(booking_id)
            .bind(&passenger.first_name)
            .bind(&passenger.last_name)
            .bind(&passenger.email)
            .bind(&passenger.phone_number)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::Write)?;
        }

        tx.commit().await.map_err(StoreError::Write)?;
        debug!("Created booking {booking_id} with {} passengers", passengers.len());
        Ok(booking_id)
    }

    async fn get(&self, booking_id: i64) -> StoreResult<BookingDetail> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            SELECT booking_id, flight_id, booking_date, status
            FROM booking
            WHERE booking_id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::Query)?
        .ok_or(StoreError::NotFound)?;

        // Two sequential reads, no transaction; read skew between them is
        // accepted. Serial ids preserve insertion order.
        let passengers = sqlx::query_as::<_, Passenger>(
            r#"
            SELECT passenger_id, booking_id, first_name, last_name, email, phone_number
            FROM passenger
            WHERE booking_id = $1
            ORDER BY passenger_id
            "#,
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::Query)?;

        Ok(BookingDetail {
            booking,
            passengers,
        })
    }

    async fn update(
        &self,
        booking_id: i64,
        status: &str,
        passengers: &[PassengerUpdate],
    ) -> StoreResult<()> {
        let mut tx = self.pool.begin().await.map_err(StoreError::Connection)?;

        // Unconditional status update; zero rows affected is not
        // distinguished from a match.
        sqlx::query("UPDATE booking SET status = $1 WHERE booking_id = $2")
            .bind(status)
            .bind(booking_id)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::Write)?;

        for passenger in passengers {
            // The booking_id constraint is the ownership check: a
            // passenger row belonging to another booking matches zero
            // rows and aborts the whole unit.
            let result = sqlx::query(
                r#"
                UPDATE passenger
                SET first_name = $1, last_name = $2, email = $3, phone_number = $4
                WHERE passenger_id = $5 AND booking_id = $6
                "#,
            )
            .bind(&passenger.first_name)
            .bind(&passenger.last_name)
            .bind(&passenger.email)
            .bind(&passenger.phone_number)
            .bind(passenger.passenger_id)
            .bind(booking_id)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::Write)?;

            if result.rows_affected() == 0 {
                return Err(StoreError::PassengerMismatch {
                    passenger_id: passenger.passenger_id,
                    booking_id,
                });
            }
        }

        tx.commit().await.map_err(StoreError::Write)?;
        debug!("Updated booking {booking_id}");
        Ok(())
    }

    async fn delete(&self, booking_id: i64) -> StoreResult<()> {
        let mut tx = self.pool.begin().await.map_err(StoreError::Connection)?;

        // Passengers first, then the booking. A nonexistent id affects
        // zero rows and still commits.
        sqlx::query("DELETE FROM passenger WHERE booking_id = $1")
            .bind(booking_id)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::Write)?;

        sqlx::query("DELETE FROM booking WHERE booking_id = $1")
            .bind(booking_id)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::Write)?;

        tx.commit().await.map_err(StoreError::Write)?;
        debug!("Deleted booking {booking_id}");
        Ok(())
    }
}
