//! Bus de eventos tipado entre regiones de la UI
//!
//! La barra de filtros y la vista de lista se renderizan por separado y no
//! comparten estado directo; se sincronizan con dos mensajes: el conteo
//! total/filtrado tras cada fetch y la notificación de alta masiva, que
//! dispara un refetch de la lista.

use tokio::sync::broadcast;

/// Mensajes de sincronización entre la vista de lista y la barra de filtros
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingEvent {
    /// Conteo sin filtrar vs. conteo de la vista filtrada actual
    CountsUpdated { total: i64, filtered: i64 },
    /// Resultado de un alta masiva; la lista reacciona refrescando
    TrackingsAdded { created: u64, skipped: u64 },
}

/// Bus de publicación/suscripción para `TrackingEvent`
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<TrackingEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TrackingEvent> {
        self.sender.subscribe()
    }

    /// Publica a todos los suscriptores activos. Sin suscriptores el
    /// mensaje simplemente se descarta.
    pub fn publish(&self, event: TrackingEvent) {
        let _ = self.sender.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_reaches_all_subscribers() {
        let bus = EventBus::default();
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        bus.publish(TrackingEvent::CountsUpdated {
            total: 10,
            filtered: 4,
        });

        let expected = TrackingEvent::CountsUpdated {
            total: 10,
            filtered: 4,
        };
        assert_eq!(first.recv().await.unwrap(), expected);
        assert_eq!(second.recv().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_noop() {
        let bus = EventBus::default();
        bus.publish(TrackingEvent::TrackingsAdded {
            created: 3,
            skipped: 1,
        });
        // Un suscriptor posterior no recibe mensajes anteriores
        let mut late = bus.subscribe();
        bus.publish(TrackingEvent::TrackingsAdded {
            created: 2,
            skipped: 0,
        });
        assert_eq!(
            late.recv().await.unwrap(),
            TrackingEvent::TrackingsAdded {
                created: 2,
                skipped: 0
            }
        );
    }
}
