use serde::Deserialize;
use validator::Validate;

// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Correo inválido"))]
    pub email: String,

    #[validate(
        length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"),
        custom = "crate::utils::validation::validate_not_blank"
    )]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_login_request() {
        assert!(request("juan@moto.co", "secret").validate().is_ok());
    }

    #[test]
    fn test_invalid_login_requests() {
        assert!(request("", "secret").validate().is_err());
        assert!(request("no-es-correo", "secret").validate().is_err());
        assert!(request("juan@moto.co", "123").validate().is_err());
        assert!(request("juan@moto.co", "       ").validate().is_err());
    }
}
