//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// URL base por defecto para la consulta multi-tracking externa.
/// Los números seleccionados se concatenan separados por coma.
const DEFAULT_MULTI_LOOKUP_URL: &str = "https://t.17track.net/en#nums=";

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    /// Cota superior del listado de archivados (filas más recientes)
    pub archived_page_size: i64,
    /// Base de la URL de consulta multi-tracking externa
    pub multi_lookup_url: String,
}

impl EnvironmentConfig {
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|value| {
                    value
                        .split(',')
                        .map(|origin| origin.trim().to_string())
                        .filter(|origin| !origin.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            archived_page_size: env::var("ARCHIVED_PAGE_SIZE")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .expect("ARCHIVED_PAGE_SIZE must be a valid number"),
            multi_lookup_url: env::var("MULTI_LOOKUP_URL")
                .unwrap_or_else(|_| DEFAULT_MULTI_LOOKUP_URL.to_string()),
        }
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
