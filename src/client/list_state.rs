//! Estado local de la vista de lista de trackings
//!
//! Máquina de estado pura: filas con patches optimistas tras cada edición
//! inline confirmada, conjunto de selección para acciones masivas y orden
//! de display por columna. No conoce HTTP; la orquestación vive en `view`.

use std::collections::HashSet;
use uuid::Uuid;

use crate::dto::tracking_dto::{ForwarderSummary, LogisticsCompanySummary, TrackingResponse};
use crate::models::TrackingStatus;

/// Columna de orden de la tabla
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Status,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn flipped(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Estado de la lista: filas, selección y orden
#[derive(Debug)]
pub struct TrackingListState {
    rows: Vec<TrackingResponse>,
    selection: HashSet<Uuid>,
    sort_field: SortField,
    sort_order: SortOrder,
}

impl Default for TrackingListState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            selection: HashSet::new(),
            // El servidor entrega más reciente primero; la vista arranca igual
            sort_field: SortField::CreatedAt,
            sort_order: SortOrder::Descending,
        }
    }
}

impl TrackingListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reemplaza las filas tras un fetch. La selección se poda a los ids
    /// que siguen presentes.
    pub fn set_rows(&mut self, rows: Vec<TrackingResponse>) {
        let ids: HashSet<Uuid> = rows.iter().map(|row| row.id).collect();
        self.selection.retain(|id| ids.contains(id));
        self.rows = rows;
    }

    pub fn rows(&self) -> &[TrackingResponse] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Click en el header de una columna: la columna activa invierte el
    /// orden; una columna nueva pasa a ser la activa y resetea a descendente.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Descending;
        }
    }

    /// Filas en el orden de display actual
    pub fn display_rows(&self) -> Vec<&TrackingResponse> {
        let mut rows: Vec<&TrackingResponse> = self.rows.iter().collect();
        match self.sort_field {
            SortField::Status => rows.sort_by_key(|row| row.status.rank()),
            SortField::CreatedAt => rows.sort_by_key(|row| row.created_at),
        }
        if self.sort_order == SortOrder::Descending {
            rows.reverse();
        }
        rows
    }

    // --- Selección ---

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selection.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn is_all_selected(&self) -> bool {
        !self.rows.is_empty() && self.selection.len() == self.rows.len()
    }

    pub fn toggle_selection(&mut self, id: Uuid) {
        if !self.rows.iter().any(|row| row.id == id) {
            return;
        }
        if !self.selection.remove(&id) {
            self.selection.insert(id);
        }
    }

    pub fn select_all(&mut self) {
        self.selection = self.rows.iter().map(|row| row.id).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Ids seleccionados en el orden de display actual, no en el orden
    /// en que fueron marcados
    pub fn selected_ids_in_display_order(&self) -> Vec<Uuid> {
        self.display_rows()
            .into_iter()
            .filter(|row| self.selection.contains(&row.id))
            .map(|row| row.id)
            .collect()
    }

    // --- Patches optimistas tras ediciones inline confirmadas ---

    pub fn update_status(&mut self, id: Uuid, status: TrackingStatus) -> bool {
        self.patch(id, |row| row.status = status)
    }

    pub fn update_note(&mut self, id: Uuid, note: Option<String>) -> bool {
        self.patch(id, |row| row.note = note)
    }

    pub fn update_logistics_company(
        &mut self,
        id: Uuid,
        company: Option<LogisticsCompanySummary>,
    ) -> bool {
        self.patch(id, |row| {
            row.logistics_company_id = company.as_ref().map(|summary| summary.id);
            row.logistics_company = company;
        })
    }

    pub fn update_forwarder(&mut self, id: Uuid, forwarder: Option<ForwarderSummary>) -> bool {
        self.patch(id, |row| {
            row.forwarder_id = forwarder.as_ref().map(|summary| summary.id);
            row.forwarder = forwarder;
        })
    }

    fn patch(&mut self, id: Uuid, apply: impl FnOnce(&mut TrackingResponse)) -> bool {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                apply(row);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: Uuid) {
        self.rows.retain(|row| row.id != id);
        self.selection.remove(&id);
    }

    pub fn remove_many(&mut self, ids: &[Uuid]) {
        let removed: HashSet<Uuid> = ids.iter().copied().collect();
        self.rows.retain(|row| !removed.contains(&row.id));
        self.selection.retain(|id| !removed.contains(id));
    }

    // --- Payloads derivados de la selección ---

    /// Números seleccionados, uno por línea, en orden de display
    pub fn clipboard_payload(&self) -> String {
        self.selected_numbers().join("\n")
    }

    /// URL de consulta multi-tracking externa: base + números separados
    /// por coma, en orden de display. `None` sin selección.
    pub fn multi_lookup_url(&self, base_url: &str) -> Option<String> {
        let numbers = self.selected_numbers();
        if numbers.is_empty() {
            return None;
        }
        Some(format!("{}{}", base_url, numbers.join(",")))
    }

    fn selected_numbers(&self) -> Vec<String> {
        self.display_rows()
            .into_iter()
            .filter(|row| self.selection.contains(&row.id))
            .map(|row| row.tracking_number.clone())
            .collect()
    }
}

/// URL de consulta en el sitio oficial del transportista: la plantilla de
/// la empresa con el número como sufijo. No disponible sin empresa o con
/// plantilla vacía.
pub fn official_lookup_url(tracking: &TrackingResponse) -> Option<String> {
    let company = tracking.logistics_company.as_ref()?;
    if company.tracking_url.is_empty() {
        return None;
    }
    Some(format!("{}{}", company.tracking_url, tracking.tracking_number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn sample_row(number: &str, status: TrackingStatus, minutes: i64) -> TrackingResponse {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes);
        TrackingResponse {
            id: Uuid::new_v4(),
            tracking_number: number.to_string(),
            status,
            note: None,
            is_archived: false,
            logistics_company_id: None,
            forwarder_id: None,
            logistics_company: None,
            forwarder: None,
            created_at: created,
            updated_at: created,
        }
    }

    fn sample_state() -> TrackingListState {
        let mut state = TrackingListState::new();
        state.set_rows(vec![
            sample_row("A-DELIVERED", TrackingStatus::Delivered, 0),
            sample_row("B-PENDING", TrackingStatus::Pending, 1),
            sample_row("C-EXCEPTION", TrackingStatus::Exception, 2),
            sample_row("D-TRANSIT", TrackingStatus::Transit, 3),
        ]);
        state
    }

    fn display_numbers(state: &TrackingListState) -> Vec<String> {
        state
            .display_rows()
            .into_iter()
            .map(|row| row.tracking_number.clone())
            .collect()
    }

    #[test]
    fn test_default_order_is_newest_first() {
        let state = sample_state();
        assert_eq!(state.sort_field(), SortField::CreatedAt);
        assert_eq!(state.sort_order(), SortOrder::Descending);
        assert_eq!(
            display_numbers(&state),
            vec!["D-TRANSIT", "C-EXCEPTION", "B-PENDING", "A-DELIVERED"]
        );
    }

    #[test]
    fn test_sort_by_status_ascending_follows_fixed_rank() {
        let mut state = sample_state();
        state.toggle_sort(SortField::Status); // nueva columna: descendente
        state.toggle_sort(SortField::Status); // misma columna: invierte
        assert_eq!(state.sort_order(), SortOrder::Ascending);
        assert_eq!(
            display_numbers(&state),
            vec!["B-PENDING", "D-TRANSIT", "A-DELIVERED", "C-EXCEPTION"]
        );
    }

    #[test]
    fn test_toggle_sort_new_column_resets_to_descending() {
        let mut state = sample_state();
        state.toggle_sort(SortField::CreatedAt); // columna activa: invierte
        assert_eq!(state.sort_order(), SortOrder::Ascending);

        state.toggle_sort(SortField::Status); // cambia de columna
        assert_eq!(state.sort_field(), SortField::Status);
        assert_eq!(state.sort_order(), SortOrder::Descending);
    }

    #[test]
    fn test_selection_toggle_and_select_all() {
        let mut state = sample_state();
        let first = state.rows()[0].id;

        state.toggle_selection(first);
        assert!(state.is_selected(first));
        assert_eq!(state.selected_count(), 1);

        state.toggle_selection(first);
        assert!(!state.is_selected(first));

        state.select_all();
        assert!(state.is_all_selected());

        state.clear_selection();
        assert_eq!(state.selected_count(), 0);

        // Un id que no está en la lista no entra a la selección
        state.toggle_selection(Uuid::new_v4());
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_set_rows_prunes_stale_selection() {
        let mut state = sample_state();
        state.select_all();

        let survivor = state.rows()[0].clone();
        state.set_rows(vec![survivor.clone()]);
        assert_eq!(state.selected_count(), 1);
        assert!(state.is_selected(survivor.id));
    }

    #[test]
    fn test_clipboard_payload_uses_display_order() {
        let mut state = sample_state();
        // Selección en orden inverso al display
        let ids: Vec<Uuid> = state.rows().iter().map(|row| row.id).collect();
        for id in ids.iter().rev() {
            state.toggle_selection(*id);
        }

        assert_eq!(
            state.clipboard_payload(),
            "D-TRANSIT\nC-EXCEPTION\nB-PENDING\nA-DELIVERED"
        );
    }

    #[test]
    fn test_multi_lookup_url() {
        let mut state = sample_state();
        assert_eq!(state.multi_lookup_url("https://t.17track.net/en#nums="), None);

        state.select_all();
        let url = state
            .multi_lookup_url("https://t.17track.net/en#nums=")
            .unwrap();
        assert_eq!(
            url,
            "https://t.17track.net/en#nums=D-TRANSIT,C-EXCEPTION,B-PENDING,A-DELIVERED"
        );
    }

    #[test]
    fn test_official_lookup_url() {
        let mut row = sample_row("ABC123", TrackingStatus::Pending, 0);
        assert_eq!(official_lookup_url(&row), None);

        let company = LogisticsCompanySummary {
            id: Uuid::new_v4(),
            name: "DHL".to_string(),
            color: "#ffcc00".to_string(),
            tracking_url: "https://dhl.test/?id=".to_string(),
        };
        row.logistics_company_id = Some(company.id);
        row.logistics_company = Some(company);
        assert_eq!(
            official_lookup_url(&row).as_deref(),
            Some("https://dhl.test/?id=ABC123")
        );

        // Plantilla vacía: la consulta queda deshabilitada
        row.logistics_company.as_mut().unwrap().tracking_url = String::new();
        assert_eq!(official_lookup_url(&row), None);
    }

    #[test]
    fn test_optimistic_patches() {
        let mut state = sample_state();
        let id = state.rows()[1].id;

        assert!(state.update_status(id, TrackingStatus::Exception));
        assert!(state.update_note(id, Some("left at warehouse".to_string())));

        let row = state.rows().iter().find(|row| row.id == id).unwrap();
        assert_eq!(row.status, TrackingStatus::Exception);
        assert_eq!(row.note.as_deref(), Some("left at warehouse"));

        // Limpiar la asociación sincroniza el id escalar y el resumen
        let company = LogisticsCompanySummary {
            id: Uuid::new_v4(),
            name: "SF Express".to_string(),
            color: "#000000".to_string(),
            tracking_url: String::new(),
        };
        assert!(state.update_logistics_company(id, Some(company.clone())));
        let row = state.rows().iter().find(|row| row.id == id).unwrap();
        assert_eq!(row.logistics_company_id, Some(company.id));

        assert!(state.update_logistics_company(id, None));
        let row = state.rows().iter().find(|row| row.id == id).unwrap();
        assert_eq!(row.logistics_company_id, None);
        assert!(row.logistics_company.is_none());

        assert!(!state.update_status(Uuid::new_v4(), TrackingStatus::Pending));
    }

    #[test]
    fn test_remove_many_drops_rows_and_selection() {
        let mut state = sample_state();
        state.select_all();
        let removed: Vec<Uuid> = state.rows()[..2].iter().map(|row| row.id).collect();

        state.remove_many(&removed);
        assert_eq!(state.len(), 2);
        assert_eq!(state.selected_count(), 2);
        for id in removed {
            assert!(!state.is_selected(id));
        }
    }
}
