use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::ride_controller::RideController;
use crate::dto::ApiResponse;
use crate::models::Client;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_client_router() -> Router<AppState> {
    Router::new().route("/:id", get(get_client))
}

async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Client>>, AppError> {
    let controller = RideController::new(state.backend.clone(), state.notifications.clone());
    let response = controller.get_client(&id).await?;
    Ok(Json(response))
}
