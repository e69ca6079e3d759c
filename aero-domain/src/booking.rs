use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub booking_id: i64,
    pub flight_id: i64,
    /// Assigned by the store (`NOW()`) at insert time.
    pub booking_date: DateTime<Utc>,
    /// Free-form by contract: `confirmed` on creation, any caller-supplied
    /// value after an update.
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Passenger {
    pub passenger_id: i64,
    pub booking_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

/// A booking with its dependent passenger rows, in insertion order.
#[derive(Debug, Serialize)]
pub struct BookingDetail {
    pub booking: Booking,
    pub passengers: Vec<Passenger>,
}

/// Initial status assigned at creation. Updates accept any caller
/// string, so nothing past this point is enumerated.
#[derive(Debug, PartialEq)]
pub enum BookingStatus {
    Confirmed,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Confirmed => write!(f, "confirmed"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub flight_id: i64,
    pub passenger_data: Vec<PassengerInput>,
}

#[derive(Debug, Deserialize)]
pub struct PassengerInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookingRequest {
    pub status: String,
    pub passenger_data: Vec<PassengerUpdate>,
}

#[derive(Debug, Deserialize)]
pub struct PassengerUpdate {
    pub passenger_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_booking_request_deserialization() {
        let json = r#"
            {
                "flight_id": 5,
                "passenger_data": [
                    {
                        "first_name": "A",
                        "last_name": "B",
                        "email": "a@b.com",
                        "phone_number": "123"
                    }
                ]
            }
        "#;
        let req: CreateBookingRequest = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(req.flight_id, 5);
        assert_eq!(req.passenger_data.len(), 1);
        assert_eq!(req.passenger_data[0].email, "a@b.com");
    }

    #[test]
    fn test_update_booking_request_deserialization() {
        let json = r#"
            {
                "status": "cancelled",
                "passenger_data": [
                    {
                        "passenger_id": 9,
                        "first_name": "A",
                        "last_name": "B",
                        "email": "a@b.com",
                        "phone_number": "123"
                    }
                ]
            }
        "#;
        let req: UpdateBookingRequest = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(req.status, "cancelled");
        assert_eq!(req.passenger_data[0].passenger_id, 9);
    }

    #[test]
    fn test_empty_passenger_data_is_legal() {
        let json = r#"{ "flight_id": 1, "passenger_data": [] }"#;
        let req: CreateBookingRequest = serde_json::from_str(json).expect("Failed to deserialize");
        assert!(req.passenger_data.is_empty());
    }

    #[test]
    fn test_initial_status_renders_lowercase() {
        assert_eq!(BookingStatus::Confirmed.to_string(), "confirmed");
    }
}
