//! Modelo de Client
//! 
//! Pasajero que solicita una carrera. Datos de referencia de solo lectura.

use serde::{Deserialize, Serialize};

/// Pasajero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub phone: String,
}

impl Client {
    pub fn new(id: &str, name: &str, phone: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }
}
