use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, put},
    Json, Router,
};

use crate::controllers::driver_controller::DriverController;
use crate::dto::driver_dto::{DriverResponse, UpdateDriverStatusRequest};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_current_driver))
        .route("/status", put(update_driver_status))
}

async fn get_current_driver(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DriverResponse>>, AppError> {
    let controller = DriverController::new(state.backend.clone());
    let response = controller.current().await?;
    Ok(Json(response))
}

async fn update_driver_status(
    State(state): State<AppState>,
    payload: Result<Json<UpdateDriverStatusRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<DriverResponse>>, AppError> {
    let Json(request) = payload?;
    let controller = DriverController::new(state.backend.clone());
    let response = controller.update_status(request).await?;
    Ok(Json(response))
}
