//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Color de display en formato hex largo, p. ej. "#1a2b3c"
    pub static ref HEX_COLOR_RE: Regex = Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap();
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de color hex
pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    if !HEX_COLOR_RE.is_match(value) {
        let mut error = ValidationError::new("hex_color");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("SF001").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_hex_color() {
        assert!(validate_hex_color("#000000").is_ok());
        assert!(validate_hex_color("#FF8800").is_ok());
        assert!(validate_hex_color("#fff").is_err());
        assert!(validate_hex_color("000000").is_err());
        assert!(validate_hex_color("#GG0000").is_err());
    }
}
