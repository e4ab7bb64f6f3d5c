//! Tipos de repositorio: estado reconstruido (FlowInstance) y definición
//! (FlowDefinition).
//!
//! El replay es lineal: consume eventos en orden y actualiza un `StepSlot`
//! por evento. Los outputs no se guardan aquí (sólo su resumen vive en el
//! evento).
use chrono::{DateTime, Utc};
use serde_json::json;
use uuid::Uuid;

use crate::event::{FlowEvent, FlowEventKind};
use crate::hashing::hash_value;
use crate::step::{StepKind, StepStatus};

/// Definición inmutable del Flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowDefinition {
    pub step_ids: Vec<String>,
    pub definition_hash: String,
}

impl FlowDefinition {
    pub fn from_steps(steps: &[(&'static str, StepKind)]) -> Self {
        let described: Vec<_> = steps.iter()
                                     .map(|(id, kind)| json!({ "id": id, "kind": format!("{kind:?}") }))
                                     .collect();
        Self { step_ids: steps.iter().map(|(id, _)| id.to_string()).collect(),
               definition_hash: hash_value(&json!(described)) }
    }
    pub fn len(&self) -> usize {
        self.step_ids.len()
    }
    pub fn is_empty(&self) -> bool {
        self.step_ids.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct FlowInstance {
    pub id: Uuid,
    pub steps: Vec<StepSlot>,
    pub cursor: usize,
    pub completed: bool,
}

/// Estado de un step en la instancia.
#[derive(Debug, Clone)]
pub struct StepSlot {
    pub step_id: String,
    pub status: StepStatus,
    pub fingerprint: Option<String>,
    pub error: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl FlowInstance {
    /// Reconstruye el estado de un flow a partir de sus eventos.
    pub fn replay(flow_id: Uuid, events: &[FlowEvent], definition: &FlowDefinition) -> Self {
        let mut steps: Vec<StepSlot> = definition.step_ids
                                                 .iter()
                                                 .map(|id| StepSlot { step_id: id.clone(),
                                                                      status: StepStatus::Pending,
                                                                      fingerprint: None,
                                                                      error: None,
                                                                      started_at: None,
                                                                      finished_at: None })
                                                 .collect();
        let mut completed = false;
        for ev in events.iter().filter(|e| e.flow_id == flow_id) {
            match &ev.kind {
                FlowEventKind::FlowInitialized { .. } => {}
                FlowEventKind::StepStarted { step_index, .. } => {
                    if let Some(slot) = steps.get_mut(*step_index) {
                        slot.status = StepStatus::Running;
                        slot.started_at = Some(ev.ts);
                    }
                }
                FlowEventKind::StepFinished { step_index, fingerprint, .. } => {
                    if let Some(slot) = steps.get_mut(*step_index) {
                        slot.status = StepStatus::FinishedOk;
                        slot.fingerprint = Some(fingerprint.clone());
                        slot.finished_at = Some(ev.ts);
                    }
                }
                FlowEventKind::StepFailed { step_index,
                                            fingerprint,
                                            error,
                                            .. } => {
                    if let Some(slot) = steps.get_mut(*step_index) {
                        slot.status = StepStatus::Failed;
                        slot.fingerprint = Some(fingerprint.clone());
                        slot.error = Some(error.clone());
                        slot.finished_at = Some(ev.ts);
                    }
                }
                FlowEventKind::FlowCompleted { .. } => completed = true,
            }
        }
        let cursor = steps.iter()
                          .position(|s| matches!(s.status, StepStatus::Pending))
                          .unwrap_or(steps.len());
        FlowInstance { id: flow_id,
                       steps,
                       cursor,
                       completed }
    }

    /// Primer step fallido, si lo hay.
    pub fn failed_step(&self) -> Option<&StepSlot> {
        self.steps.iter().find(|s| s.status == StepStatus::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_hash_depends_on_order_and_kind() {
        let a = FlowDefinition::from_steps(&[("x", StepKind::Source), ("y", StepKind::Sink)]);
        let b = FlowDefinition::from_steps(&[("y", StepKind::Source), ("x", StepKind::Sink)]);
        let c = FlowDefinition::from_steps(&[("x", StepKind::Source), ("y", StepKind::Transform)]);
        assert_eq!(a.len(), 2);
        assert_ne!(a.definition_hash, b.definition_hash);
        assert_ne!(a.definition_hash, c.definition_hash);
        assert_eq!(a, FlowDefinition::from_steps(&[("x", StepKind::Source), ("y", StepKind::Sink)]));
    }
}
