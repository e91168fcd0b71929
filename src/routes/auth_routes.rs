use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::LoginRequest;
use crate::dto::driver_dto::DriverResponse;
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<DriverResponse>>, AppError> {
    let Json(request) = payload?;
    let controller = AuthController::new(state.backend.clone());
    let response = controller.login(request).await?;
    Ok(Json(response))
}
