//! Perfil de latencia simulada
//! 
//! Cada operación del ledger espera un tiempo fijo antes de producir su
//! resultado, imitando la latencia de red de un backend real.

use std::time::Duration;

/// Latencia por operación del ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyProfile {
    pub authenticate: Duration,
    pub list_available_rides: Duration,
    pub accept_ride: Duration,
    pub validate_otp: Duration,
    pub start_ride: Duration,
    pub get_client: Duration,
    pub update_driver_status: Duration,
    pub get_ride: Duration,
    pub get_current_driver: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            authenticate: Duration::from_millis(1000),
            list_available_rides: Duration::from_millis(500),
            accept_ride: Duration::from_millis(800),
            validate_otp: Duration::from_millis(500),
            start_ride: Duration::from_millis(500),
            get_client: Duration::from_millis(300),
            update_driver_status: Duration::from_millis(500),
            get_ride: Duration::from_millis(300),
            get_current_driver: Duration::ZERO,
        }
    }
}

impl LatencyProfile {
    /// Sin latencia: tests y herramientas locales
    pub fn none() -> Self {
        Self {
            authenticate: Duration::ZERO,
            list_available_rides: Duration::ZERO,
            accept_ride: Duration::ZERO,
            validate_otp: Duration::ZERO,
            start_ride: Duration::ZERO,
            get_client: Duration::ZERO,
            update_driver_status: Duration::ZERO,
            get_ride: Duration::ZERO,
            get_current_driver: Duration::ZERO,
        }
    }

    pub fn from_flag(simulate: bool) -> Self {
        if simulate {
            Self::default()
        } else {
            Self::none()
        }
    }

    pub fn is_disabled(&self) -> bool {
        *self == Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_matches_mobile_backend_delays() {
        let profile = LatencyProfile::default();
        assert_eq!(profile.authenticate, Duration::from_millis(1000));
        assert_eq!(profile.accept_ride, Duration::from_millis(800));
        assert_eq!(profile.get_client, Duration::from_millis(300));
        assert_eq!(profile.get_current_driver, Duration::ZERO);
        assert!(!profile.is_disabled());
    }

    #[test]
    fn test_from_flag() {
        assert!(LatencyProfile::from_flag(false).is_disabled());
        assert_eq!(LatencyProfile::from_flag(true), LatencyProfile::default());
    }
}
