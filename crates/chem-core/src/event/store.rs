use chrono::Utc;
use log::debug;
use std::collections::HashMap;
use uuid::Uuid;

use super::{FlowEvent, FlowEventKind};

/// Almacenamiento de eventos append-only.
pub trait EventStore {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn append_kind(&mut self, flow_id: Uuid, kind: FlowEventKind) -> FlowEvent;
    /// Lista eventos de un flujo (orden ascendente por seq).
    fn list(&self, flow_id: Uuid) -> Vec<FlowEvent>;
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    pub inner: HashMap<Uuid, Vec<FlowEvent>>,
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, flow_id: Uuid, kind: FlowEventKind) -> FlowEvent {
        let vec = self.inner.entry(flow_id).or_default();
        let seq = vec.len() as u64;
        let ev = FlowEvent { seq,
                             flow_id,
                             kind,
                             ts: Utc::now() };
        debug!("[flow {}] #{} {:?}", flow_id, seq, ev.kind);
        vec.push(ev.clone());
        ev
    }

    fn list(&self, flow_id: Uuid) -> Vec<FlowEvent> {
        self.inner.get(&flow_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_is_per_flow_and_ascending() {
        let mut store = InMemoryEventStore::default();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let init = FlowEventKind::FlowInitialized { definition_hash: "h".into(),
                                                    step_count: 1 };
        assert_eq!(store.append_kind(a, init.clone()).seq, 0);
        assert_eq!(store.append_kind(b, init.clone()).seq, 0);
        assert_eq!(store.append_kind(a, FlowEventKind::StepStarted { step_index: 0,
                                                                      step_id: "s".into() })
                        .seq,
                   1);
        assert_eq!(store.list(a).len(), 2);
        assert!(store.list(Uuid::new_v4()).is_empty());
    }
}
