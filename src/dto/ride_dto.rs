use serde::{Deserialize, Serialize};
use validator::Validate;

// Request para validar el OTP del pasajero
#[derive(Debug, Deserialize, Validate)]
pub struct ValidateOtpRequest {
    #[validate(custom(
        function = "crate::utils::validation::validate_otp_format",
        message = "El código debe tener 4 dígitos"
    ))]
    pub otp: String,
}

// Resultado de la validación del OTP
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpValidationResponse {
    pub ride_id: String,
    pub valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_request_validation() {
        let ok = ValidateOtpRequest { otp: "1234".to_string() };
        assert!(ok.validate().is_ok());

        let short = ValidateOtpRequest { otp: "12".to_string() };
        assert!(short.validate().is_err());

        let letters = ValidateOtpRequest { otp: "abcd".to_string() };
        assert!(letters.validate().is_err());
    }
}
