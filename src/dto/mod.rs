//! DTOs de la API
//! 
//! Cuerpos de request y response de los endpoints HTTP.

pub mod api_response;
pub mod auth_dto;
pub mod driver_dto;
pub mod ride_dto;

pub use api_response::ApiResponse;
