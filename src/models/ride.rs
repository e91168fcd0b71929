//! Modelo de Ride
//! 
//! Una carrera solicitada por un cliente. El OTP se fija al crearla y no
//! cambia; el estado sólo avanza AVAILABLE -> ACCEPTED -> IN_PROGRESS ->
//! COMPLETED, o pasa a CANCELLED desde cualquier estado no terminal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::driver::Location;

/// Estado de la carrera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RideStatus {
    Available,
    Accepted,
    InProgress,
    Completed,
    Cancelled,
}

impl RideStatus {
    fn rank(&self) -> u8 {
        match self {
            RideStatus::Available => 0,
            RideStatus::Accepted => 1,
            RideStatus::InProgress => 2,
            RideStatus::Completed => 3,
            RideStatus::Cancelled => 3,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RideStatus::Completed | RideStatus::Cancelled)
    }

    /// Indica si pasar de `self` a `next` respeta el orden del ciclo de vida
    pub fn is_forward_transition(&self, next: RideStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        match next {
            RideStatus::Cancelled => true,
            _ => next.rank() > self.rank(),
        }
    }
}

/// Carrera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    pub id: String,
    pub client_id: String,
    pub origin_address: String,
    pub destination_address: String,
    pub origin_location: Location,
    pub destination_location: Location,
    /// Tarifa estimada en unidades enteras de moneda
    pub estimated_amount: i64,
    /// Kilómetros
    pub distance_from_driver: f64,
    /// Kilómetros
    pub trip_distance: f64,
    pub status: RideStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

impl Ride {
    /// Copia completa de la carrera con otro estado
    pub fn with_status(&self, status: RideStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == RideStatus::Available
    }

    pub fn otp_matches(&self, otp: &str) -> bool {
        self.otp.as_deref() == Some(otp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ride() -> Ride {
        Ride {
            id: "ride-x".to_string(),
            client_id: "client-x".to_string(),
            origin_address: "A".to_string(),
            destination_address: "B".to_string(),
            origin_location: Location::new(4.7, -74.0),
            destination_location: Location::new(4.6, -74.1),
            estimated_amount: 9000,
            distance_from_driver: 0.8,
            trip_distance: 4.0,
            status: RideStatus::Available,
            created_at: Utc::now(),
            otp: Some("4321".to_string()),
        }
    }

    #[test]
    fn test_forward_transitions() {
        assert!(RideStatus::Available.is_forward_transition(RideStatus::Accepted));
        assert!(RideStatus::Accepted.is_forward_transition(RideStatus::InProgress));
        assert!(RideStatus::InProgress.is_forward_transition(RideStatus::Completed));
        assert!(RideStatus::Accepted.is_forward_transition(RideStatus::Cancelled));

        assert!(!RideStatus::Accepted.is_forward_transition(RideStatus::Accepted));
        assert!(!RideStatus::InProgress.is_forward_transition(RideStatus::Accepted));
        assert!(!RideStatus::Completed.is_forward_transition(RideStatus::Cancelled));
        assert!(!RideStatus::Cancelled.is_forward_transition(RideStatus::InProgress));
    }

    #[test]
    fn test_with_status_keeps_every_other_field() {
        let ride = sample_ride();
        let accepted = ride.with_status(RideStatus::Accepted);

        assert_eq!(accepted.status, RideStatus::Accepted);
        assert_eq!(accepted.otp, ride.otp);
        assert_eq!(accepted.created_at, ride.created_at);
        assert_eq!(accepted.estimated_amount, ride.estimated_amount);
    }

    #[test]
    fn test_otp_matches_exactly() {
        let mut ride = sample_ride();
        assert!(ride.otp_matches("4321"));
        assert!(!ride.otp_matches("4321 "));
        assert!(!ride.otp_matches(""));

        ride.otp = None;
        assert!(!ride.otp_matches("4321"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(sample_ride()).unwrap();
        assert_eq!(value["clientId"], "client-x");
        assert_eq!(value["distanceFromDriver"], 0.8);
        assert_eq!(value["status"], "AVAILABLE");
    }
}
