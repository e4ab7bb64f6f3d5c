//! Tipos de evento del flujo y estructura `FlowEvent`.
//!
//! Rol en el flujo:
//! - Cada ejecución del `FlowEngine` emite eventos a un `EventStore`
//!   append-only.
//! - Estos eventos permiten reconstruir el estado de cada step (replay, ver
//!   `repo::FlowInstance`) sin depender de estructuras mutables.
//! - El enum `FlowEventKind` define el contrato observable y estable del motor.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FlowEventKind {
    /// Emisión inicial de un flujo: fija la `definition_hash` y cantidad de
    /// steps. Invariante: debe ser el primer evento de un `flow_id`.
    FlowInitialized { definition_hash: String, step_count: usize },
    /// Un step comenzó su ejecución. No implica éxito.
    StepStarted { step_index: usize, step_id: String },
    /// Un step terminó correctamente, con el resumen de su output y su
    /// fingerprint.
    StepFinished {
        step_index: usize,
        step_id: String,
        summary: serde_json::Value,
        fingerprint: String,
    },
    /// Un step terminó con error terminal. El flujo no continúa
    /// (stop-on-failure).
    StepFailed {
        step_index: usize,
        step_id: String,
        error: String,
        fingerprint: String,
    },
    /// Evento de cierre con fingerprint agregado del flow (hash de
    /// fingerprints ordenados de steps exitosos).
    FlowCompleted { flow_fingerprint: String },
}

impl FlowEventKind {
    /// Letra compacta usada por `FlowEngine::event_variants`.
    pub fn variant(&self) -> &'static str {
        match self {
            FlowEventKind::FlowInitialized { .. } => "I",
            FlowEventKind::StepStarted { .. } => "S",
            FlowEventKind::StepFinished { .. } => "F",
            FlowEventKind::StepFailed { .. } => "X",
            FlowEventKind::FlowCompleted { .. } => "C",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowEvent {
    pub seq: u64, // asignado por el EventStore (orden append)
    pub flow_id: Uuid,
    pub kind: FlowEventKind,
    pub ts: DateTime<Utc>, // metadato (no entra en fingerprint)
}
