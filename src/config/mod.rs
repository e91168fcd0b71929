//! Configuración del proyecto
//! 
//! Este módulo contiene las variables de entorno y el perfil de latencia
//! simulada del ledger.

pub mod environment;
pub mod latency;

pub use environment::*;
pub use latency::LatencyProfile;
