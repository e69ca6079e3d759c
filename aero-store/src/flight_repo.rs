use aero_domain::flight::Flight;
use aero_domain::repository::FlightRepository;
use aero_domain::{StoreError, StoreResult};
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresFlightRepository {
    pool: PgPool,
}

impl PostgresFlightRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FlightRepository for PostgresFlightRepository {
    async fn search(
        &self,
        origin: &str,
        destination: &str,
        date: &str,
    ) -> StoreResult<Vec<Flight>> {
        // The date arrives as a raw string; the `::date` cast is the only
        // validation it gets. A malformed date fails as a query error.
        let flights = sqlx::query_as::<_, Flight>(
            r#"
            SELECT flight_id, flight_number, origin, destination, departure_time, arrival_time
            FROM flight
            WHERE origin = $1
              AND destination = $2
              AND departure_time::date = $3::date
            "#,
        )
        .bind(origin)
        .bind(destination)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::Query)?;

        Ok(flights)
    }
}
