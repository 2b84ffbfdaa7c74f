//! Estado de los filtros de la vista de lista
//!
//! Las selecciones de filtro se serializan al query string de la página
//! para que una vista filtrada sea compartible y sobreviva una recarga.
//! El mismo query string es el que acepta `GET /trackings`.

use uuid::Uuid;

use crate::models::TrackingStatus;

/// Filtros activos: estado, empresa logística y forwarder
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FilterState {
    pub status: Option<TrackingStatus>,
    pub logistics_company_id: Option<Uuid>,
    pub forwarder_id: Option<Uuid>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.logistics_company_id.is_none() && self.forwarder_id.is_none()
    }

    /// Limpiar todos los filtros
    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    /// Serializa los filtros activos como query string, sin el '?'
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(status) = self.status {
            params.push(format!("status={}", status));
        }
        if let Some(company) = self.logistics_company_id {
            params.push(format!("logisticsCompanyId={}", company));
        }
        if let Some(forwarder) = self.forwarder_id {
            params.push(format!("forwarderId={}", forwarder));
        }
        params.join("&")
    }

    /// Reconstruye los filtros desde un query string ("?a=b" o "a=b").
    /// Claves desconocidas y valores inválidos se ignoran.
    pub fn from_query_string(query: &str) -> Self {
        let mut filters = FilterState::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "status" => filters.status = value.parse().ok(),
                "logisticsCompanyId" => filters.logistics_company_id = value.parse().ok(),
                "forwarderId" => filters.forwarder_id = value.parse().ok(),
                _ => {}
            }
        }

        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_serialize_to_empty_string() {
        let filters = FilterState::default();
        assert!(filters.is_empty());
        assert_eq!(filters.to_query_string(), "");
    }

    #[test]
    fn test_query_string_round_trip() {
        let filters = FilterState {
            status: Some(TrackingStatus::Transit),
            logistics_company_id: Some(Uuid::new_v4()),
            forwarder_id: None,
        };

        let query = filters.to_query_string();
        assert!(query.starts_with("status=TRANSIT&logisticsCompanyId="));
        assert_eq!(FilterState::from_query_string(&query), filters);
    }

    #[test]
    fn test_parse_with_question_mark_prefix() {
        let filters = FilterState::from_query_string("?status=DELIVERED");
        assert_eq!(filters.status, Some(TrackingStatus::Delivered));
    }

    #[test]
    fn test_parse_ignores_unknown_keys_and_bad_values() {
        let filters =
            FilterState::from_query_string("status=NOPE&page=3&forwarderId=not-a-uuid");
        assert!(filters.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut filters = FilterState {
            status: Some(TrackingStatus::Exception),
            logistics_company_id: None,
            forwarder_id: Some(Uuid::new_v4()),
        };
        filters.clear();
        assert!(filters.is_empty());
    }
}
