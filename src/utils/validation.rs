//! Utilidades de validación
//! 
//! Validadores de campos usados por los DTOs de la API con `validator`.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref OTP_PATTERN: Regex = Regex::new(r"^[0-9]{4}$").expect("OTP pattern is valid");
}

/// Longitud del código OTP que entrega el pasajero
pub const OTP_LENGTH: usize = 4;

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que el OTP tenga exactamente cuatro dígitos
pub fn validate_otp_format(value: &str) -> Result<(), ValidationError> {
    if !OTP_PATTERN.is_match(value) {
        let mut error = ValidationError::new("otp_format");
        error.add_param("expected_length".into(), &OTP_LENGTH);
        error.add_param("actual_length".into(), &value.chars().count());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("driver@moto.co").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
    }

    #[test]
    fn test_validate_otp_format() {
        assert!(validate_otp_format("1234").is_ok());
        assert!(validate_otp_format("0000").is_ok());
        assert!(validate_otp_format("123").is_err());
        assert!(validate_otp_format("12345").is_err());
        assert!(validate_otp_format("12a4").is_err());
        assert!(validate_otp_format("").is_err());
    }
}
