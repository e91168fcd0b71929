//! Repositorios
//! 
//! El ledger en memoria que actúa como sistema de registro de conductor,
//! carreras y clientes, y el trait que lo expone al resto de la aplicación.

pub mod ride_ledger;
pub mod seed;

use async_trait::async_trait;

use crate::models::{Client, Driver, DriverStatus, Ride};
use crate::utils::errors::LedgerResult;

pub use ride_ledger::RideLedger;
pub use seed::SeedData;

/// Operaciones del backend del conductor.
///
/// `RideLedger` es la implementación simulada; los handlers HTTP sólo
/// conocen este trait.
#[async_trait]
pub trait DriverBackend: Send + Sync {
    /// Falla con `InvalidCredentials` si el correo o la contraseña están vacíos
    async fn authenticate(&self, email: &str, password: &str) -> LedgerResult<Driver>;

    /// Carreras disponibles, de la más cercana a la más lejana
    async fn list_available_rides(&self) -> LedgerResult<Vec<Ride>>;

    async fn accept_ride(&self, ride_id: &str) -> LedgerResult<Ride>;

    /// Devuelve `true` sólo si el OTP coincide; una discrepancia es siempre un error
    async fn validate_otp(&self, ride_id: &str, otp: &str) -> LedgerResult<bool>;

    async fn start_ride(&self, ride_id: &str) -> LedgerResult<Ride>;

    async fn get_client(&self, client_id: &str) -> LedgerResult<Client>;

    async fn update_driver_status(&self, status: DriverStatus) -> LedgerResult<Driver>;

    async fn get_ride(&self, ride_id: &str) -> LedgerResult<Ride>;

    async fn get_current_driver(&self) -> LedgerResult<Driver>;
}
