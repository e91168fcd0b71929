//! Modelo de Driver
//! 
//! Este módulo contiene el struct Driver (el moto-taxista), su estado
//! operativo y las coordenadas GPS compartidas con las carreras.

use serde::{Deserialize, Serialize};

/// Coordenadas GPS
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Estado del conductor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriverStatus {
    Active,
    Inactive,
    EnRoute,
    InRide,
}

impl DriverStatus {
    /// Nombre que muestra la app al conductor
    pub fn display_name(&self) -> &'static str {
        match self {
            DriverStatus::Active => "Activo",
            DriverStatus::Inactive => "Inactivo",
            DriverStatus::EnRoute => "En ruta",
            DriverStatus::InRide => "En carrera",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, DriverStatus::Active)
    }
}

/// Conductor (moto-taxista). Existe una sola instancia por ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub vehicle_plate: String,
    pub status: DriverStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Driver {
    /// Copia del conductor con otro estado
    pub fn with_status(&self, status: DriverStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_serializes_in_screaming_snake_case() {
        assert_eq!(serde_json::to_value(DriverStatus::EnRoute).unwrap(), json!("EN_ROUTE"));
        let parsed: DriverStatus = serde_json::from_value(json!("IN_RIDE")).unwrap();
        assert_eq!(parsed, DriverStatus::InRide);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(DriverStatus::Active.display_name(), "Activo");
        assert_eq!(DriverStatus::InRide.display_name(), "En carrera");
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let driver = Driver {
            id: "7".to_string(),
            name: "Test".to_string(),
            phone: "+57 000".to_string(),
            vehicle_plate: "XYZ-999".to_string(),
            status: DriverStatus::Inactive,
            current_location: None,
            rating: None,
        };

        let value = serde_json::to_value(&driver).unwrap();
        assert_eq!(value["vehiclePlate"], "XYZ-999");
        assert!(value.get("currentLocation").is_none());
        assert!(value.get("rating").is_none());
    }
}
