//! Configuración de variables de entorno
//! 
//! Este módulo maneja la configuración del entorno. Todas las variables son
//! opcionales; un valor mal formado es un error, nunca un pánico.

use std::env;
use std::net::SocketAddr;

use crate::config::latency::LatencyProfile;
use crate::utils::errors::ConfigError;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
    pub simulate_latency: bool,
    pub nearby_radius_km: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origins: Vec::new(),
            log_level: tracing::Level::DEBUG,
            simulate_latency: true,
            nearby_radius_km: 1.0,
        }
    }
}

impl EnvironmentConfig {
    /// Cargar desde las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|name| env::var(name).ok())
    }

    /// Cargar desde cualquier fuente clave/valor
    pub fn from_source<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber { name: "PORT", value })?,
            None => defaults.port,
        };

        let log_level = match get("LOG_LEVEL") {
            Some(value) => value.trim().parse::<tracing::Level>().map_err(|_| ConfigError::Invalid {
                name: "LOG_LEVEL",
                reason: format!("unknown level '{}'", value),
            })?,
            None => defaults.log_level,
        };

        let simulate_latency = match get("SIMULATE_LATENCY") {
            Some(value) => parse_bool("SIMULATE_LATENCY", value)?,
            None => defaults.simulate_latency,
        };

        let nearby_radius_km = match get("NEARBY_RADIUS_KM") {
            Some(value) => {
                let radius: f64 = value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                    name: "NEARBY_RADIUS_KM",
                    value: value.clone(),
                })?;
                if !radius.is_finite() || radius < 0.0 {
                    return Err(ConfigError::Invalid {
                        name: "NEARBY_RADIUS_KM",
                        reason: format!("must be a non-negative distance, got {}", radius),
                    });
                }
                radius
            }
            None => defaults.nearby_radius_km,
        };

        let cors_origins = get("CORS_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.cors_origins);

        Ok(Self {
            environment: get("ENVIRONMENT").unwrap_or(defaults.environment),
            host: get("HOST").unwrap_or(defaults.host),
            port,
            cors_origins,
            log_level,
            simulate_latency,
            nearby_radius_km,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Dirección en la que escucha el servidor
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::Invalid {
                name: "HOST",
                reason: format!("{}", e),
            })
    }

    pub fn latency_profile(&self) -> LatencyProfile {
        LatencyProfile::from_flag(self.simulate_latency)
    }
}

fn parse_bool(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = EnvironmentConfig::from_source(source(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.is_development());
        assert!(config.simulate_latency);
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.nearby_radius_km, 1.0);
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_values_are_read_from_source() {
        let config = EnvironmentConfig::from_source(source(&[
            ("ENVIRONMENT", "production"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "http://localhost:8081, https://moto.app ,"),
            ("LOG_LEVEL", "warn"),
            ("SIMULATE_LATENCY", "false"),
            ("NEARBY_RADIUS_KM", "2.5"),
        ]))
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.cors_origins, vec!["http://localhost:8081", "https://moto.app"]);
        assert_eq!(config.log_level, tracing::Level::WARN);
        assert!(config.latency_profile().is_disabled());
        assert_eq!(config.nearby_radius_km, 2.5);
    }

    #[test]
    fn test_malformed_values_are_errors() {
        assert!(matches!(
            EnvironmentConfig::from_source(source(&[("PORT", "tres mil")])),
            Err(ConfigError::InvalidNumber { name: "PORT", .. })
        ));
        assert!(matches!(
            EnvironmentConfig::from_source(source(&[("SIMULATE_LATENCY", "maybe")])),
            Err(ConfigError::InvalidBool { .. })
        ));
        assert!(EnvironmentConfig::from_source(source(&[("NEARBY_RADIUS_KM", "-1")])).is_err());
        assert!(EnvironmentConfig::from_source(source(&[("LOG_LEVEL", "loud")])).is_err());
    }
}
