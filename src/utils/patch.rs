//! Helper de deserialización para PATCH parciales
//!
//! Los updates distinguen tres casos por campo: ausente (no tocar),
//! `null` explícito (limpiar) y valor (asignar). Serde colapsa `null`
//! y ausente en un solo `Option`, así que los campos anulables usan
//! `Option<Option<T>>` con este deserializador.

use serde::{Deserialize, Deserializer};

/// Deserializa un campo presente (valor o `null`) como `Some(...)`.
///
/// Combinado con `#[serde(default)]`: ausente => `None`,
/// `null` => `Some(None)`, valor => `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        note: Option<Option<String>>,
    }

    #[test]
    fn test_absent_field() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.note, None);
    }

    #[test]
    fn test_explicit_null() {
        let patch: Patch = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(patch.note, Some(None));
    }

    #[test]
    fn test_value() {
        let patch: Patch = serde_json::from_str(r#"{"note": "fragile"}"#).unwrap();
        assert_eq!(patch.note, Some(Some("fragile".to_string())));
    }

    #[test]
    fn test_empty_string_is_a_value() {
        let patch: Patch = serde_json::from_str(r#"{"note": ""}"#).unwrap();
        assert_eq!(patch.note, Some(Some(String::new())));
    }
}
