use serde::{Deserialize, Serialize};

use crate::models::{Driver, DriverStatus};

// Request para cambiar el estado del conductor
#[derive(Debug, Deserialize)]
pub struct UpdateDriverStatusRequest {
    pub status: DriverStatus,
}

// Response de conductor con el nombre visible de su estado
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponse {
    #[serde(flatten)]
    pub driver: Driver,
    pub status_label: &'static str,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        let status_label = driver.status.display_name();
        Self {
            driver,
            status_label,
        }
    }
}
