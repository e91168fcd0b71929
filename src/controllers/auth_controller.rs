use std::sync::Arc;

use validator::Validate;

use crate::dto::auth_dto::LoginRequest;
use crate::dto::driver_dto::DriverResponse;
use crate::dto::ApiResponse;
use crate::repositories::DriverBackend;
use crate::utils::errors::AppError;

pub struct AuthController {
    backend: Arc<dyn DriverBackend>,
}

impl AuthController {
    pub fn new(backend: Arc<dyn DriverBackend>) -> Self {
        Self { backend }
    }

    pub async fn login(
        &self,
        request: LoginRequest,
    ) -> Result<ApiResponse<DriverResponse>, AppError> {
        // Validar formato antes de llamar al backend
        request.validate()?;

        let driver = self
            .backend
            .authenticate(&request.email, &request.password)
            .await?;

        Ok(ApiResponse::success_with_message(
            DriverResponse::from(driver),
            "Login exitoso",
        ))
    }
}
