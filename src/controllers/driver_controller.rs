use std::sync::Arc;

use crate::dto::driver_dto::{DriverResponse, UpdateDriverStatusRequest};
use crate::dto::ApiResponse;
use crate::repositories::DriverBackend;
use crate::utils::errors::AppError;

pub struct DriverController {
    backend: Arc<dyn DriverBackend>,
}

impl DriverController {
    pub fn new(backend: Arc<dyn DriverBackend>) -> Self {
        Self { backend }
    }

    pub async fn current(&self) -> Result<ApiResponse<DriverResponse>, AppError> {
        let driver = self.backend.get_current_driver().await?;
        Ok(ApiResponse::success(DriverResponse::from(driver)))
    }

    pub async fn update_status(
        &self,
        request: UpdateDriverStatusRequest,
    ) -> Result<ApiResponse<DriverResponse>, AppError> {
        let driver = self.backend.update_driver_status(request.status).await?;
        Ok(ApiResponse::success_with_message(
            DriverResponse::from(driver),
            "Estado actualizado",
        ))
    }
}
