//! Shared application state
//! 
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::{DriverBackend, RideLedger};
use crate::services::NotificationService;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub backend: Arc<dyn DriverBackend>,
    pub notifications: NotificationService,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, backend: Arc<dyn DriverBackend>) -> Self {
        let notifications = NotificationService::new(config.nearby_radius_km);
        Self {
            config,
            backend,
            notifications,
        }
    }

    /// Estado con el ledger simulado y los datos de ejemplo
    pub fn with_mock_ledger(config: EnvironmentConfig) -> Self {
        let ledger = RideLedger::with_sample_data(config.latency_profile());
        Self::new(config, Arc::new(ledger))
    }
}
