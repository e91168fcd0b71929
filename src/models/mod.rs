//! Modelos del sistema
//! 
//! Este módulo contiene los modelos de datos del conductor, las carreras
//! y los clientes que maneja el ledger en memoria.

pub mod client;
pub mod driver;
pub mod ride;

pub use client::Client;
pub use driver::{Driver, DriverStatus, Location};
pub use ride::{Ride, RideStatus};
