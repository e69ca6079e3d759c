use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Flight {
    pub flight_id: i64,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct FlightSearchQuery {
    pub origin: String,
    pub destination: String,
    /// Kept as a raw string; the store's date cast is the only validation.
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_deserialization() {
        let json = r#"
            {
                "origin": "CGK",
                "destination": "DPS",
                "date": "2024-12-25"
            }
        "#;
        let query: FlightSearchQuery = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(query.origin, "CGK");
        assert_eq!(query.date, "2024-12-25");
    }
}
