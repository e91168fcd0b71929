//! Sistema de manejo de errores
//! 
//! Este módulo define los errores del ledger, los errores de configuración
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// Errores de las operaciones del ledger
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Credenciales inválidas")]
    InvalidCredentials,

    #[error("Carrera no encontrada: {0}")]
    RideNotFound(String),

    #[error("Cliente no encontrado: {0}")]
    ClientNotFound(String),

    #[error("OTP inválido para la carrera {0}")]
    InvalidOtp(String),
}

impl LedgerError {
    /// Código estable para los clientes de la API
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::InvalidCredentials => "INVALID_CREDENTIALS",
            LedgerError::RideNotFound(_) => "RIDE_NOT_FOUND",
            LedgerError::ClientNotFound(_) => "CLIENT_NOT_FOUND",
            LedgerError::InvalidOtp(_) => "INVALID_OTP",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            LedgerError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            LedgerError::RideNotFound(_) | LedgerError::ClientNotFound(_) => StatusCode::NOT_FOUND,
            LedgerError::InvalidOtp(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Errores al leer la configuración del entorno
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must be true or false, got '{value}'")]
    InvalidBool { name: &'static str, value: String },

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Cuerpos JSON que el extractor de axum no pudo leer
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Ledger(e) => {
                warn!("⚠️ Operación rechazada por el ledger: {}", e);
                let status = e.status_code();
                (
                    status,
                    ErrorResponse {
                        error: status
                            .canonical_reason()
                            .unwrap_or("Error")
                            .to_string(),
                        message: e.to_string(),
                        details: None,
                        code: Some(e.code().to_string()),
                    },
                )
            }

            AppError::Validation(e) => {
                warn!("⚠️ Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                warn!("⚠️ Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones del ledger
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Resultado tipado para los handlers HTTP
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_error_codes_and_status() {
        assert_eq!(LedgerError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(LedgerError::RideNotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(LedgerError::ClientNotFound("x".into()).code(), "CLIENT_NOT_FOUND");
        assert_eq!(LedgerError::InvalidOtp("ride-1".into()).status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_ledger_error_into_response_status() {
        let response = AppError::from(LedgerError::RideNotFound("ride-9".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::from(LedgerError::InvalidCredentials).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = AppError::BadRequest("missing field `otp`".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
