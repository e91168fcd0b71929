//! Datos de ejemplo
//! 
//! El ledger arranca con un conductor, tres carreras y tres clientes en
//! Bogotá. Los datos se inyectan en el constructor del ledger.

use chrono::{DateTime, Utc};

use crate::models::{Client, Driver, DriverStatus, Location, Ride, RideStatus};

/// Estado inicial del ledger
#[derive(Debug, Clone)]
pub struct SeedData {
    pub driver: Driver,
    pub rides: Vec<Ride>,
    pub clients: Vec<Client>,
}

impl SeedData {
    /// Muestra fija con la que arranca el servidor
    pub fn bogota_sample() -> Self {
        Self::bogota_sample_at(Utc::now())
    }

    pub fn bogota_sample_at(created_at: DateTime<Utc>) -> Self {
        let driver = Driver {
            id: "1".to_string(),
            name: "Juan Pérez".to_string(),
            phone: "+57 300 123 4567".to_string(),
            vehicle_plate: "ABC-123".to_string(),
            status: DriverStatus::Active,
            current_location: Some(Location::new(4.7110, -74.0721)),
            rating: Some(4.8),
        };

        let rides = vec![
            available_ride(
                "ride-1",
                "client-1",
                ("Calle 72 #10-34, Bogotá", Location::new(4.7130, -74.0650)),
                ("Carrera 7 #32-16, Bogotá", Location::new(4.6097, -74.0817)),
                8500,
                0.5,
                5.2,
                "1234",
                created_at,
            ),
            available_ride(
                "ride-2",
                "client-2",
                ("Carrera 15 #93-40, Bogotá", Location::new(4.6800, -74.0500)),
                ("Avenida 68 #75-00, Bogotá", Location::new(4.7000, -74.1100)),
                12000,
                1.2,
                8.5,
                "5678",
                created_at,
            ),
            available_ride(
                "ride-3",
                "client-3",
                ("Calle 100 #19-61, Bogotá", Location::new(4.6900, -74.0400)),
                ("Calle 26 #92-32, Bogotá", Location::new(4.6500, -74.1000)),
                15000,
                2.5,
                12.0,
                "9012",
                created_at,
            ),
        ];

        let clients = vec![
            Client::new("client-1", "María García", "+57 301 234 5678"),
            Client::new("client-2", "Carlos Rodríguez", "+57 302 345 6789"),
            Client::new("client-3", "Ana López", "+57 303 456 7890"),
        ];

        Self {
            driver,
            rides,
            clients,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn available_ride(
    id: &str,
    client_id: &str,
    origin: (&str, Location),
    destination: (&str, Location),
    estimated_amount: i64,
    distance_from_driver: f64,
    trip_distance: f64,
    otp: &str,
    created_at: DateTime<Utc>,
) -> Ride {
    Ride {
        id: id.to_string(),
        client_id: client_id.to_string(),
        origin_address: origin.0.to_string(),
        destination_address: destination.0.to_string(),
        origin_location: origin.1,
        destination_location: destination.1,
        estimated_amount,
        distance_from_driver,
        trip_distance,
        status: RideStatus::Available,
        created_at,
        otp: Some(otp.to_string()),
    }
}
