//! Core FlowEngine implementation

use uuid::Uuid;

use crate::engine::FlowCtx;
use crate::errors::CoreEngineError;
use crate::event::{EventStore, FlowEvent, FlowEventKind, InMemoryEventStore};
use crate::repo::{FlowDefinition, FlowInstance};
use crate::step::Pipe;

/// Motor de ejecución de flujos lineales.
///
/// Orquesta la ejecución de un `Pipe` paso a paso (stop-on-failure) y
/// conserva el log de eventos de cada flujo ejecutado.
#[derive(Debug)]
pub struct FlowEngine<E: EventStore> {
    event_store: E,
    name: Option<String>,
    last_flow: Option<(Uuid, FlowDefinition)>,
}

impl FlowEngine<InMemoryEventStore> {
    /// Crea un nuevo engine con store en memoria
    #[inline]
    pub fn new() -> Self {
        Self::new_with_store(InMemoryEventStore::default())
    }
}

impl Default for FlowEngine<InMemoryEventStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EventStore> FlowEngine<E> {
    /// Crea un nuevo motor con el store proporcionado
    pub fn new_with_store(event_store: E) -> Self {
        Self { event_store,
               name: None,
               last_flow: None }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    /// Ejecuta el pipe completo sobre `input` en un flujo nuevo y devuelve el
    /// output del último step.
    ///
    /// Si un step falla, el flujo queda sin `FlowCompleted` y el error se
    /// propaga tal cual (sin reintentos).
    pub fn run<I, O>(&mut self, pipe: Pipe<'_, I, O>, input: I) -> Result<O, CoreEngineError> {
        let flow_id = Uuid::new_v4();
        let definition = pipe.definition();
        self.last_flow = Some((flow_id, definition.clone()));

        let mut ctx = FlowCtx::start(&mut self.event_store, flow_id, definition);
        let output = pipe.execute(input, &mut ctx)?;
        ctx.complete()?;
        Ok(output)
    }

    /// Id del último flujo ejecutado.
    pub fn last_flow_id(&self) -> Option<Uuid> {
        self.last_flow.as_ref().map(|(id, _)| *id)
    }

    /// Lista eventos del último flujo
    pub fn events(&self) -> Option<Vec<FlowEvent>> {
        self.last_flow_id().map(|fid| self.event_store.list(fid))
    }

    /// Variante compacta de eventos del último flujo
    pub fn event_variants(&self) -> Option<Vec<&'static str>> {
        self.events()
            .map(|events| events.iter().map(|e| e.kind.variant()).collect())
    }

    /// Fingerprint del último flujo si completó
    pub fn flow_fingerprint(&self) -> Option<String> {
        let evs = self.events()?;
        evs.iter().rev().find_map(|e| match &e.kind {
                            FlowEventKind::FlowCompleted { flow_fingerprint } => Some(flow_fingerprint.clone()),
                            _ => None,
                        })
    }

    /// Estado reconstruido (replay) del último flujo.
    pub fn instance(&self) -> Option<FlowInstance> {
        let (flow_id, definition) = self.last_flow.as_ref()?;
        let events = self.event_store.list(*flow_id);
        Some(FlowInstance::replay(*flow_id, &events, definition))
    }

    /// Eventos de un flujo arbitrario.
    pub fn events_for(&self, flow_id: Uuid) -> Vec<FlowEvent> {
        self.event_store.list(flow_id)
    }
}
