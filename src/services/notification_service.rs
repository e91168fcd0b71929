//! Aviso de carreras cercanas
//! 
//! Cuando el conductor está activo, la app le muestra una notificación con
//! la primera carrera disponible dentro de un radio dado.

use tracing::debug;

use crate::models::{Driver, Ride};

/// Radio por defecto, en kilómetros
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct NotificationService {
    radius_km: f64,
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new(DEFAULT_NEARBY_RADIUS_KM)
    }
}

impl NotificationService {
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    /// Primera carrera de `rides` dentro del radio, o `None` si el conductor
    /// no está activo. Respeta el orden recibido.
    pub fn nearby_ride(&self, driver: &Driver, rides: &[Ride]) -> Option<Ride> {
        if !driver.status.is_active() {
            debug!("🔕 Conductor {} no activo, sin notificación", driver.id);
            return None;
        }

        rides
            .iter()
            .find(|r| r.is_available() && r.distance_from_driver <= self.radius_km)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DriverStatus, RideStatus};
    use crate::repositories::SeedData;

    #[test]
    fn test_active_driver_gets_closest_ride_within_radius() {
        let seed = SeedData::bogota_sample();
        let service = NotificationService::default();

        let ride = service.nearby_ride(&seed.driver, &seed.rides).unwrap();
        assert_eq!(ride.id, "ride-1");
    }

    #[test]
    fn test_inactive_driver_gets_nothing() {
        let seed = SeedData::bogota_sample();
        let driver = seed.driver.with_status(DriverStatus::Inactive);

        assert!(NotificationService::default().nearby_ride(&driver, &seed.rides).is_none());
    }

    #[test]
    fn test_nothing_within_radius() {
        let seed = SeedData::bogota_sample();
        let service = NotificationService::new(0.3);

        assert!(service.nearby_ride(&seed.driver, &seed.rides).is_none());
    }

    #[test]
    fn test_accepted_rides_are_skipped() {
        let seed = SeedData::bogota_sample();
        let mut rides = seed.rides.clone();
        rides[0] = rides[0].with_status(RideStatus::Accepted);

        let service = NotificationService::new(1.5);
        let ride = service.nearby_ride(&seed.driver, &rides).unwrap();
        assert_eq!(ride.id, "ride-2");
    }
}
