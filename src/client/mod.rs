//! Capa de cliente de la vista de lista
//!
//! Cliente HTTP tipado más las máquinas de estado que en la UI original
//! vivían en el navegador: lista con selección y orden, filtros en el
//! query string y el bus de eventos entre regiones.

pub mod api;
pub mod events;
pub mod filters;
pub mod list_state;
pub mod view;

pub use api::{ApiClient, BulkActionReport, BulkFailure, ClientError};
pub use events::{EventBus, TrackingEvent};
pub use filters::FilterState;
pub use list_state::{official_lookup_url, SortField, SortOrder, TrackingListState};
pub use view::TrackingListView;
