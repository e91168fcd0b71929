//! Ledger de carreras en memoria
//!
//! Sistema de registro simulado para el conductor, las carreras y los
//! clientes. Cada operación espera su latencia configurada antes de tocar el
//! estado; las lecturas y mutaciones del conductor y de las carreras pasan
//! por un único `Mutex` que nunca se mantiene durante esa espera.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::{DriverBackend, SeedData};
use crate::config::latency::LatencyProfile;
use crate::models::{Client, Driver, DriverStatus, Ride, RideStatus};
use crate::utils::errors::{LedgerError, LedgerResult};

/// Estado mutable protegido por el lock
struct LedgerState {
    driver: Driver,
    rides: Vec<Ride>,
}

impl LedgerState {
    fn ride_index(&self, ride_id: &str) -> LedgerResult<usize> {
        self.rides
            .iter()
            .position(|r| r.id == ride_id)
            .ok_or_else(|| LedgerError::RideNotFound(ride_id.to_string()))
    }
}

pub struct RideLedger {
    state: Mutex<LedgerState>,
    // Datos de referencia inmutables, fuera del lock
    clients: Vec<Client>,
    latency: LatencyProfile,
}

impl RideLedger {
    pub fn new(seed: SeedData, latency: LatencyProfile) -> Self {
        info!(
            "📒 Ledger inicializado: {} carreras, {} clientes, conductor {}",
            seed.rides.len(),
            seed.clients.len(),
            seed.driver.id
        );

        Self {
            state: Mutex::new(LedgerState {
                driver: seed.driver,
                rides: seed.rides,
            }),
            clients: seed.clients,
            latency,
        }
    }

    /// Ledger con los datos de ejemplo de Bogotá
    pub fn with_sample_data(latency: LatencyProfile) -> Self {
        Self::new(SeedData::bogota_sample(), latency)
    }

    async fn simulate_latency(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    /// Reemplaza la carrera completa por una copia con el nuevo estado.
    /// No rechaza transiciones hacia atrás; sólo las registra.
    async fn transition_ride(&self, ride_id: &str, next: RideStatus) -> LedgerResult<Ride> {
        let mut state = self.state.lock().await;
        let index = state.ride_index(ride_id)?;

        let current = &state.rides[index];
        if !current.status.is_forward_transition(next) {
            warn!(
                "⚠️ Transición no secuencial en {}: {:?} -> {:?}",
                ride_id, current.status, next
            );
        }

        let updated = current.with_status(next);
        state.rides[index] = updated.clone();
        Ok(updated)
    }
}

#[async_trait]
impl DriverBackend for RideLedger {
    async fn authenticate(&self, email: &str, password: &str) -> LedgerResult<Driver> {
        self.simulate_latency(self.latency.authenticate).await;

        if email.trim().is_empty() || password.trim().is_empty() {
            warn!("🔐 Login rechazado: credenciales vacías");
            return Err(LedgerError::InvalidCredentials);
        }

        let driver = self.state.lock().await.driver.clone();
        info!("✅ Login exitoso para {} (conductor {})", email, driver.id);
        Ok(driver)
    }

    async fn list_available_rides(&self) -> LedgerResult<Vec<Ride>> {
        self.simulate_latency(self.latency.list_available_rides).await;

        let mut rides: Vec<Ride> = {
            let state = self.state.lock().await;
            state.rides.iter().filter(|r| r.is_available()).cloned().collect()
        };
        // sort_by es estable: los empates conservan el orden de inserción
        rides.sort_by(|a, b| a.distance_from_driver.total_cmp(&b.distance_from_driver));

        debug!("📋 {} carreras disponibles", rides.len());
        Ok(rides)
    }

    async fn accept_ride(&self, ride_id: &str) -> LedgerResult<Ride> {
        self.simulate_latency(self.latency.accept_ride).await;

        let ride = self.transition_ride(ride_id, RideStatus::Accepted).await?;
        info!("🏍️ Carrera {} aceptada", ride.id);
        Ok(ride)
    }

    async fn validate_otp(&self, ride_id: &str, otp: &str) -> LedgerResult<bool> {
        self.simulate_latency(self.latency.validate_otp).await;

        let state = self.state.lock().await;
        let index = state.ride_index(ride_id)?;
        if !state.rides[index].otp_matches(otp) {
            warn!("🔢 OTP inválido para la carrera {}", ride_id);
            return Err(LedgerError::InvalidOtp(ride_id.to_string()));
        }

        info!("✅ OTP validado para la carrera {}", ride_id);
        Ok(true)
    }

    async fn start_ride(&self, ride_id: &str) -> LedgerResult<Ride> {
        self.simulate_latency(self.latency.start_ride).await;

        let ride = self.transition_ride(ride_id, RideStatus::InProgress).await?;
        info!("🚀 Carrera {} iniciada", ride.id);
        Ok(ride)
    }

    async fn get_client(&self, client_id: &str) -> LedgerResult<Client> {
        self.simulate_latency(self.latency.get_client).await;

        self.clients
            .iter()
            .find(|c| c.id == client_id)
            .cloned()
            .ok_or_else(|| LedgerError::ClientNotFound(client_id.to_string()))
    }

    async fn update_driver_status(&self, status: DriverStatus) -> LedgerResult<Driver> {
        self.simulate_latency(self.latency.update_driver_status).await;

        let mut state = self.state.lock().await;
        state.driver = state.driver.with_status(status);
        info!("🔄 Estado del conductor: {}", status.display_name());
        Ok(state.driver.clone())
    }

    async fn get_ride(&self, ride_id: &str) -> LedgerResult<Ride> {
        self.simulate_latency(self.latency.get_ride).await;

        let state = self.state.lock().await;
        let index = state.ride_index(ride_id)?;
        Ok(state.rides[index].clone())
    }

    async fn get_current_driver(&self) -> LedgerResult<Driver> {
        self.simulate_latency(self.latency.get_current_driver).await;

        Ok(self.state.lock().await.driver.clone())
    }
}
