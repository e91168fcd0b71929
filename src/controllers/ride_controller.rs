use std::sync::Arc;

use validator::Validate;

use crate::dto::ride_dto::{OtpValidationResponse, ValidateOtpRequest};
use crate::dto::ApiResponse;
use crate::models::{Client, Ride};
use crate::repositories::DriverBackend;
use crate::services::NotificationService;
use crate::utils::errors::AppError;

pub struct RideController {
    backend: Arc<dyn DriverBackend>,
    notifications: NotificationService,
}

impl RideController {
    pub fn new(backend: Arc<dyn DriverBackend>, notifications: NotificationService) -> Self {
        Self {
            backend,
            notifications,
        }
    }

    pub async fn list_available(&self) -> Result<ApiResponse<Vec<Ride>>, AppError> {
        let rides = self.backend.list_available_rides().await?;
        Ok(ApiResponse::success(rides))
    }

    /// Carrera cercana para notificar al conductor; `data` es `null` si no hay
    pub async fn nearby(&self) -> Result<ApiResponse<Option<Ride>>, AppError> {
        let driver = self.backend.get_current_driver().await?;
        let rides = self.backend.list_available_rides().await?;
        Ok(ApiResponse::success(self.notifications.nearby_ride(&driver, &rides)))
    }

    pub async fn get_by_id(&self, ride_id: &str) -> Result<ApiResponse<Ride>, AppError> {
        let ride = self.backend.get_ride(ride_id).await?;
        Ok(ApiResponse::success(ride))
    }

    pub async fn accept(&self, ride_id: &str) -> Result<ApiResponse<Ride>, AppError> {
        let ride = self.backend.accept_ride(ride_id).await?;
        Ok(ApiResponse::success_with_message(ride, "Carrera aceptada"))
    }

    pub async fn validate_otp(
        &self,
        ride_id: &str,
        request: ValidateOtpRequest,
    ) -> Result<ApiResponse<OtpValidationResponse>, AppError> {
        request.validate()?;

        let valid = self.backend.validate_otp(ride_id, &request.otp).await?;
        Ok(ApiResponse::success_with_message(
            OtpValidationResponse {
                ride_id: ride_id.to_string(),
                valid,
            },
            "OTP validado correctamente",
        ))
    }

    pub async fn start(&self, ride_id: &str) -> Result<ApiResponse<Ride>, AppError> {
        let ride = self.backend.start_ride(ride_id).await?;
        Ok(ApiResponse::success_with_message(ride, "Carrera iniciada exitosamente"))
    }

    pub async fn get_client(&self, client_id: &str) -> Result<ApiResponse<Client>, AppError> {
        let client = self.backend.get_client(client_id).await?;
        Ok(ApiResponse::success(client))
    }
}
