use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::ride_controller::RideController;
use crate::dto::ride_dto::{OtpValidationResponse, ValidateOtpRequest};
use crate::dto::ApiResponse;
use crate::models::Ride;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_ride_router() -> Router<AppState> {
    Router::new()
        .route("/available", get(list_available_rides))
        .route("/nearby", get(nearby_ride))
        .route("/:id", get(get_ride))
        .route("/:id/accept", post(accept_ride))
        .route("/:id/validate-otp", post(validate_otp))
        .route("/:id/start", post(start_ride))
}

fn controller(state: &AppState) -> RideController {
    RideController::new(state.backend.clone(), state.notifications.clone())
}

async fn list_available_rides(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Ride>>>> {
    Ok(Json(controller(&state).list_available().await?))
}

async fn nearby_ride(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Option<Ride>>>> {
    Ok(Json(controller(&state).nearby().await?))
}

async fn get_ride(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Ride>>> {
    Ok(Json(controller(&state).get_by_id(&id).await?))
}

async fn accept_ride(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Ride>>> {
    Ok(Json(controller(&state).accept(&id).await?))
}

async fn validate_otp(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ValidateOtpRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<OtpValidationResponse>>> {
    let Json(request) = payload?;
    Ok(Json(controller(&state).validate_otp(&id, request).await?))
}

async fn start_ride(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Ride>>> {
    Ok(Json(controller(&state).start(&id).await?))
}
